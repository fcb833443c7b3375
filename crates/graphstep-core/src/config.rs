//! Configuration for graphstep
//!
//! Looked up as `graphstep.toml` in the working directory, falling back to
//! the user config directory (`<config dir>/graphstep/config.toml`).
//! A missing config file is not an error; built-in defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GraphstepError, Result};
use crate::format::OutputFormat;

const CONFIG_DIR: &str = "graphstep";
const CONFIG_FILE: &str = "config.toml";
const LOCAL_CONFIG_FILE: &str = "graphstep.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHSTEP_CONFIG_DIR";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,

    /// Run defaults
    #[serde(default)]
    pub run: RunConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Default output format (human, json, or records)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

/// Run configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RunConfig {
    /// Default delay between replayed events, in milliseconds
    #[serde(rename = "delay-ms", skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,
}

impl Config {
    fn global_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphstepError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration, preferring a local `graphstep.toml` under `root`
    /// over the global config file.
    pub fn load(root: &Path) -> Result<Self> {
        let local = root.join(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(&local);
        }

        let global = Self::global_path()?;
        if global.exists() {
            return Self::from_file(&global);
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphstepError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            GraphstepError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_local_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("graphstep.toml"),
            "[output]\nformat = \"records\"\n\n[run]\ndelay-ms = 250\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Records));
        assert_eq!(config.run.delay_ms, Some(250));
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempdir().unwrap();
        // Point the global lookup somewhere empty so a developer's real
        // config cannot leak into the test.
        std::env::set_var(CONFIG_DIR_ENV_VAR, dir.path().join("nowhere"));

        let config = Config::load(dir.path()).unwrap();
        assert!(config.output.format.is_none());
        assert!(config.run.delay_ms.is_none());

        std::env::remove_var(CONFIG_DIR_ENV_VAR);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("graphstep.toml"), "output = 12\n").unwrap();

        assert!(Config::load(dir.path()).is_err());
    }
}

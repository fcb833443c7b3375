//! Error types and exit codes for graphstep
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm, missing start vertex)
//! - 3: Data error (unknown vertex, missing edge, invalid graph definition)

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Exit codes for the graphstep CLI process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid graph input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphstep operations
#[derive(Error, Debug)]
pub enum GraphstepError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unknown algorithm: {name} (run `graphstep algorithms` for the list)")]
    UnknownAlgorithm { name: String },

    #[error("{algorithm} requires a start vertex")]
    MissingStartVertex { algorithm: String },

    // Data errors (exit code 3)
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    #[error("no such edge: {from} -> {to}")]
    NoSuchEdge { from: String, to: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("invalid graph definition in {path:?}: {reason}")]
    InvalidDefinition { path: PathBuf, reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphstepError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphstepError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        GraphstepError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph definition that failed to parse or validate
    pub fn invalid_definition(path: &Path, reason: impl std::fmt::Display) -> Self {
        GraphstepError::InvalidDefinition {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GraphstepError::UnknownFormat(_)
            | GraphstepError::UsageError(_)
            | GraphstepError::UnknownAlgorithm { .. }
            | GraphstepError::MissingStartVertex { .. } => ExitCode::Usage,

            // Data errors
            GraphstepError::UnknownVertex { .. }
            | GraphstepError::NoSuchEdge { .. }
            | GraphstepError::AlreadyExists { .. }
            | GraphstepError::InvalidDefinition { .. }
            | GraphstepError::InvalidValue { .. } => ExitCode::Data,

            // Generic failures
            GraphstepError::Io(_)
            | GraphstepError::Json(_)
            | GraphstepError::Yaml(_)
            | GraphstepError::Toml(_)
            | GraphstepError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphstepError::UnknownFormat(_) => "unknown_format",
            GraphstepError::UsageError(_) => "usage_error",
            GraphstepError::UnknownAlgorithm { .. } => "unknown_algorithm",
            GraphstepError::MissingStartVertex { .. } => "missing_start_vertex",
            GraphstepError::UnknownVertex { .. } => "unknown_vertex",
            GraphstepError::NoSuchEdge { .. } => "no_such_edge",
            GraphstepError::AlreadyExists { .. } => "already_exists",
            GraphstepError::InvalidDefinition { .. } => "invalid_definition",
            GraphstepError::InvalidValue { .. } => "invalid_value",
            GraphstepError::Io(_) => "io_error",
            GraphstepError::Json(_) => "json_error",
            GraphstepError::Yaml(_) => "yaml_error",
            GraphstepError::Toml(_) => "toml_error",
            GraphstepError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphstep operations
pub type Result<T> = std::result::Result<T, GraphstepError>;

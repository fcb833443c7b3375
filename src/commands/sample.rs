//! Print the built-in sample graph definition
//!
//! Emits the canonical JSON encoding regardless of --format, so the
//! output can be piped straight to a definition file.

use graphstep_core::error::Result;
use graphstep_core::graph::GraphDefinition;

use crate::commands::dispatch::CommandContext;

pub fn execute(_ctx: &CommandContext) -> Result<()> {
    println!("{}", GraphDefinition::sample().to_json_string()?);
    Ok(())
}

//! Command implementations for graphstep

pub mod algorithms;
pub mod dispatch;
pub mod run;
pub mod sample;
pub mod show;

use graphstep_core::error::Result;
use graphstep_core::graph::GraphDefinition;

use crate::cli::GraphArgs;

/// Load a graph definition from a file or from inline flags
pub(crate) fn load_definition(args: &GraphArgs) -> Result<GraphDefinition> {
    match &args.graph {
        Some(path) => GraphDefinition::load(path),
        None => crate::cli::parse::definition_from_args(args),
    }
}

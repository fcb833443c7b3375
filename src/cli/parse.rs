//! Value parsers for CLI arguments

use graphstep_core::error::{GraphstepError, Result};
use graphstep_core::format::OutputFormat;
use graphstep_core::graph::{EdgeSpec, GraphDefinition};

use super::GraphArgs;

/// Parse an output format name, for clap
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse().map_err(|e: GraphstepError| e.to_string())
}

/// Parse "U V" or "U V WEIGHT" into an edge spec
pub fn parse_edge_spec(s: &str) -> Result<EdgeSpec> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    match parts.as_slice() {
        [u, v] => Ok(EdgeSpec::Unweighted(u.to_string(), v.to_string())),
        [u, v, w] => {
            let weight: f64 = w
                .parse()
                .map_err(|_| GraphstepError::invalid_value("edge weight", w))?;
            Ok(EdgeSpec::Weighted(u.to_string(), v.to_string(), weight))
        }
        _ => Err(GraphstepError::UsageError(format!(
            "invalid edge spec '{}' (expected: \"U V\" or \"U V WEIGHT\")",
            s
        ))),
    }
}

/// Build a graph definition from `--vertices`/`--edge` flags
pub fn definition_from_args(args: &GraphArgs) -> Result<GraphDefinition> {
    let vertices: Vec<String> = args
        .vertices
        .as_deref()
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if vertices.is_empty() {
        return Err(GraphstepError::UsageError(
            "no vertices given (use --graph FILE or --vertices \"A B C\")".to_string(),
        ));
    }

    let edges = args
        .edges
        .iter()
        .map(|s| parse_edge_spec(s))
        .collect::<Result<Vec<_>>>()?;

    Ok(GraphDefinition {
        vertices,
        edges,
        directed: args.directed,
        weighted: args.weighted,
        name: None,
    })
}

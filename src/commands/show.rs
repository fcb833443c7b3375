//! Summarize a graph definition

use graphstep_core::error::Result;
use graphstep_core::format::OutputFormat;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
    let definition = crate::commands::load_definition(args)?;
    let graph = definition.build()?;

    match ctx.format() {
        OutputFormat::Human => {
            if let Some(name) = &definition.name {
                println!("graph: {}", name);
            }
            println!(
                "vertices: {} ({})",
                graph.vertex_count(),
                graph.vertices().join(" ")
            );
            println!("edges: {}", graph.edge_count());
            println!("directed: {}", graph.is_directed());
            println!("weighted: {}", definition.weighted);
        }
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "name": definition.name,
                "vertices": graph.vertices(),
                "edge_count": graph.edge_count(),
                "directed": graph.is_directed(),
                "weighted": definition.weighted,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Records => {
            println!(
                "G vertices={} edges={} directed={} weighted={}",
                graph.vertex_count(),
                graph.edge_count(),
                graph.is_directed(),
                definition.weighted
            );
            for vertex in graph.vertices() {
                println!("V {}", vertex);
            }
        }
    }

    Ok(())
}

//! List the available algorithms

use graphstep_core::engine::Algorithm;
use graphstep_core::error::Result;
use graphstep_core::format::OutputFormat;
use graphstep_core::records::escape_quotes;

use crate::commands::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    match ctx.format() {
        OutputFormat::Human => {
            for algorithm in Algorithm::ALL {
                if algorithm.requires_start() {
                    println!("{} (requires start vertex)", algorithm.name());
                } else {
                    println!("{}", algorithm.name());
                }
            }
        }
        OutputFormat::Json => {
            let list: Vec<serde_json::Value> = Algorithm::ALL
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "name": a.name(),
                        "requires_start": a.requires_start(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&list)?);
        }
        OutputFormat::Records => {
            for algorithm in Algorithm::ALL {
                println!(
                    "A \"{}\" requires_start={}",
                    escape_quotes(algorithm.name()),
                    algorithm.requires_start()
                );
            }
        }
    }

    Ok(())
}

//! Run an algorithm and render its event stream
//!
//! Human and records output stream line by line as the engine produces
//! events, honoring the replay delay; JSON output collects the full run
//! into one envelope. Ctrl-C flips an atomic flag that the event sink
//! checks between steps, ending the run early without killing the
//! process.

mod format;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use graphstep_core::engine::Algorithm;
use graphstep_core::error::Result;
use graphstep_core::format::OutputFormat;
use graphstep_core::graph::Graph;
use tracing::debug;

use crate::cli::RunArgs;
use crate::commands::dispatch::CommandContext;

/// Everything a renderer needs for one run
pub(crate) struct RunRequest<'a> {
    pub algorithm: Algorithm,
    pub graph: &'a Graph,
    pub start: Option<&'a str>,
    pub delay_ms: u64,
    pub cancelled: &'a AtomicBool,
    pub quiet: bool,
}

pub fn execute(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    let algorithm: Algorithm = args.algorithm.parse()?;
    let definition = crate::commands::load_definition(&args.graph)?;
    let graph = definition.build()?;

    debug!(elapsed = ?ctx.start.elapsed(), algorithm = %algorithm, "graph_built");

    // Default start is the first vertex
    let start = match &args.start {
        Some(start) => Some(start.clone()),
        None if algorithm.requires_start() => graph.vertices().first().cloned(),
        None => None,
    };

    let delay_ms = args.delay_ms.or(ctx.config.run.delay_ms).unwrap_or(0);

    let cancelled = Arc::new(AtomicBool::new(false));
    {
        let flag = Arc::clone(&cancelled);
        // Registration fails when a handler is already installed; the run
        // then simply cannot be interrupted early.
        let _ = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst));
    }

    let request = RunRequest {
        algorithm,
        graph: &graph,
        start: start.as_deref(),
        delay_ms,
        cancelled: cancelled.as_ref(),
        quiet: ctx.cli.quiet,
    };

    match ctx.format() {
        OutputFormat::Human => format::human::render(&request)?,
        OutputFormat::Json => format::json::render(&request)?,
        OutputFormat::Records => format::records::render(&request)?,
    }

    if cancelled.load(Ordering::SeqCst) && !ctx.cli.quiet {
        eprintln!("run cancelled");
    }

    Ok(())
}

//! CLI argument parsing for graphstep
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use graphstep_core::format::OutputFormat;
use parse::parse_format;

/// Graphstep - step through classical graph algorithms
#[derive(Parser, Debug)]
#[command(name = "graphstep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records (defaults to config, then human)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an algorithm over a graph and stream its events
    Run(RunArgs),

    /// Parse a graph definition and print a summary
    Show(GraphArgs),

    /// List the available algorithms
    Algorithms,

    /// Print the built-in sample graph definition
    Sample,
}

/// Flags selecting the graph to operate on
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph definition file (.json, .yaml)
    #[arg(long, short)]
    pub graph: Option<PathBuf>,

    /// Inline vertex list, whitespace separated (e.g. "A B C")
    #[arg(long)]
    pub vertices: Option<String>,

    /// Inline edge spec "U V" or "U V WEIGHT" (can be specified multiple times)
    #[arg(long = "edge", action = clap::ArgAction::Append)]
    pub edges: Vec<String>,

    /// Treat edges as one-way
    #[arg(long)]
    pub directed: bool,

    /// Honor edge weights (otherwise every edge costs 1.0)
    #[arg(long)]
    pub weighted: bool,
}

/// Arguments for the run command
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Algorithm name (e.g. DFS, dijkstra, bellman-ford)
    pub algorithm: String,

    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start vertex (defaults to the first vertex when one is required)
    #[arg(long, short)]
    pub start: Option<String>,

    /// Replay delay between events in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

//! Command dispatch logic for graphstep

use std::path::Path;
use std::time::Instant;

use graphstep_core::config::Config;
use graphstep_core::error::Result;
use graphstep_core::format::OutputFormat;
use tracing::debug;

use crate::cli::{Cli, Commands};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Effective output format: CLI flag, then config, then human
    pub fn format(&self) -> OutputFormat {
        self.cli
            .format
            .or(self.config.output.format)
            .unwrap_or_default()
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("graphstep {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step through classical graph algorithms as an event stream.");
        println!();
        println!("Run `graphstep --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run(args) => crate::commands::run::execute(ctx, args),
            Commands::Show(args) => crate::commands::show::execute(ctx, args),
            Commands::Algorithms => crate::commands::algorithms::execute(ctx),
            Commands::Sample => crate::commands::sample::execute(ctx),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::load(Path::new("."))?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    // Execute command
    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

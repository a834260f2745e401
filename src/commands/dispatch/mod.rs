//! Command dispatch logic for digraph

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{dfs, paths};
use digraph_core::error::Result;
use tracing::debug;

mod command;

pub use command::{resolve_config, Command, CommandContext, NoCommand};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Paths { file, from, to } => {
                let pair = from.zip(*to);
                paths::execute(ctx, file, pair)
            }
            Commands::Dfs { file } => dfs::execute(ctx, file),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = resolve_config(cli)?;

    debug!(elapsed = ?start.elapsed(), max_nodes = config.max_nodes, "resolve_config");

    let ctx = CommandContext::new(cli, config, start);

    // Execute command
    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

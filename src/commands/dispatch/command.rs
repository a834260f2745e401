//! Command trait and context for dispatching commands

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use digraph_core::config::GraphConfig;
use digraph_core::error::Result;

/// Resolve the graph configuration: `--max-nodes` over `--config` over defaults
pub fn resolve_config(cli: &Cli) -> Result<GraphConfig> {
    let mut config = match &cli.config {
        Some(path) => GraphConfig::load(path)?,
        None => GraphConfig::default(),
    };

    if let Some(max_nodes) = cli.max_nodes {
        config.max_nodes = max_nodes;
    }

    config.validate()?;
    Ok(config)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GraphConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: GraphConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Read a graph input file
    pub fn read_input(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), elapsed = ?self.start.elapsed(), "read_input");
        Ok(content)
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
        println!("digraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths and depth-first traversal over directed graphs.");
        println!();
        println!("Run `digraph --help` for usage information.");
        Ok(())
    }
}

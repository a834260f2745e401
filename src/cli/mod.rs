//! CLI argument parsing for digraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config, --max-nodes

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use digraph_core::format::OutputFormat;
use parse::{parse_node_id, parse_output_format};

/// Digraph - shortest paths and depth-first traversal over directed graphs
#[derive(Parser, Debug)]
#[command(name = "digraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "digraph_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// TOML configuration file
    #[arg(long, global = true, env = "DIGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Largest node count accepted per graph (overrides the config file)
    #[arg(long, global = true)]
    pub max_nodes: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute all-pairs shortest paths for every weighted graph in a file
    Paths {
        /// Graph file: node count, labels, "from to weight" edges ending in "0 0 0"
        file: PathBuf,

        /// Show a single pair starting at this node
        #[arg(long, requires = "to", value_parser = parse_node_id)]
        from: Option<usize>,

        /// Show a single pair ending at this node
        #[arg(long, requires = "from", value_parser = parse_node_id)]
        to: Option<usize>,
    },

    /// Depth-first traversal for every unweighted graph in a file
    Dfs {
        /// Graph file: node count, labels, "from to" edges ending in "0 0"
        file: PathBuf,
    },
}

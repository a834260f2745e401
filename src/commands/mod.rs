//! CLI commands for digraph

pub mod dfs;
pub mod dispatch;
pub mod paths;
mod view;

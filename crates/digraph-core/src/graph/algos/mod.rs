//! Graph algorithm implementations
//!
//! - `dijkstra`: all-pairs shortest paths with path reconstruction
//! - `dfs`: depth-first traversal from node 1

pub mod dfs;
pub mod dijkstra;

pub use dfs::{dfs_traverse, START_NODE};
pub use dijkstra::{ShortestPathTable, TableEntry};

//! Digraph Core Library
//!
//! Weighted adjacency-matrix digraphs with all-pairs shortest paths, and
//! unweighted adjacency-list digraphs with depth-first traversal.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod load;
pub mod logging;

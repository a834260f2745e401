//! Graph representations and algorithms
//!
//! - `AdjacencyMatrix`: weighted digraph with all-pairs shortest paths
//! - `AdjacencyList`: unweighted digraph with depth-first traversal
//! - Provider traits decoupling the algorithms from storage

pub mod algos;
pub mod labels;
pub mod list;
pub mod matrix;
pub mod traversal;
pub mod types;

pub use algos::{dfs_traverse, ShortestPathTable, TableEntry};
pub use labels::NodeLabels;
pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;
pub use traversal::{TraversalProvider, WeightedProvider};
pub use types::{
    BuildRequest, Distance, Edge, EdgeTuple, NodeId, PathResult, Traversal, Weight,
    WeightedEdge, NO_NODE,
};

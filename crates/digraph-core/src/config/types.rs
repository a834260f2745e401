//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default upper bound on the number of nodes a single graph may hold
pub const DEFAULT_MAX_NODES: usize = 256;

/// Per-instance graph configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Largest node count `build` accepts for one graph
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
}

fn default_max_nodes() -> usize {
    DEFAULT_MAX_NODES
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

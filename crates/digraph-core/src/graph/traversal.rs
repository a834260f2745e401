use crate::graph::types::{NodeId, Weight};

/// Weighted adjacency as seen by the shortest-path computation
pub trait WeightedProvider {
    /// Node ids run over `1..=node_count()`
    fn node_count(&self) -> usize;
    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight>;
}

/// Successor lists plus per-node visit marks, as seen by depth-first traversal
pub trait TraversalProvider {
    fn node_count(&self) -> usize;
    /// Outgoing targets of `id` in adjacency order
    fn successors(&self, id: NodeId) -> Vec<NodeId>;
    fn clear_visited(&mut self);
    /// Mark `id` visited; returns false if it already was
    fn mark_visited(&mut self, id: NodeId) -> bool;
}

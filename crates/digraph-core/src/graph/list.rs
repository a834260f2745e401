//! Unweighted digraph backed by per-node singly linked edge lists

use std::ops::RangeInclusive;

use crate::bail_out_of_range;
use crate::config::{GraphConfig, DEFAULT_MAX_NODES};
use crate::error::Result;
use crate::graph::algos::dfs_traverse;
use crate::graph::labels::NodeLabels;
use crate::graph::traversal::TraversalProvider;
use crate::graph::types::{BuildRequest, Edge, NodeId, Traversal};

/// Index of an edge record in the arena
type EdgeIndex = usize;

/// One outgoing edge, linked to the next edge of the same source node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeRecord {
    target: NodeId,
    next: Option<EdgeIndex>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct GraphNode {
    head: Option<EdgeIndex>,
    visited: bool,
}

/// Unweighted directed graph stored as adjacency lists.
///
/// Each node owns a linked list of edge records threaded through a shared
/// arena. New edges go to the head of the list, so a node's adjacency
/// order is the reverse of insertion order; traversal order depends on it.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    max_nodes: usize,
    labels: NodeLabels,
    /// Slot 0 is unused
    nodes: Vec<GraphNode>,
    edges: Vec<EdgeRecord>,
}

impl Default for AdjacencyList {
    fn default() -> Self {
        Self::with_max_nodes(DEFAULT_MAX_NODES)
    }
}

impl AdjacencyList {
    /// Empty graph bounded by `config.max_nodes`
    pub fn new(config: &GraphConfig) -> Self {
        Self::with_max_nodes(config.max_nodes)
    }

    /// Empty graph holding at most `max_nodes` nodes
    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self::empty(max_nodes, NodeLabels::default())
    }

    fn empty(max_nodes: usize, labels: NodeLabels) -> Self {
        Self {
            max_nodes,
            nodes: vec![GraphNode::default(); labels.len() + 1],
            labels,
            edges: Vec::new(),
        }
    }

    /// Replace the whole graph with the one described by `request`.
    ///
    /// Each pair up to the first `from == 0` is prepended to its source's
    /// list. On error the current graph is left as it was.
    #[tracing::instrument(skip(self, request), fields(nodes = request.node_count, edges = request.edges.len()))]
    pub fn build(&mut self, request: &BuildRequest<Edge>) -> Result<()> {
        request.validate(self.max_nodes)?;

        let mut graph = Self::empty(self.max_nodes, NodeLabels::new(request.labels.clone()));
        for edge in request.active_edges() {
            graph.insert_edge(edge.from, edge.to)?;
        }

        *self = graph;
        tracing::debug!(nodes = self.size(), edges = self.edge_count(), "build_list");
        Ok(())
    }

    /// Prepend `from -> to` to the edge list of `from`
    pub fn insert_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;

        let index = self.edges.len();
        self.edges.push(EdgeRecord {
            target: to,
            next: self.nodes[from].head,
        });
        self.nodes[from].head = Some(index);
        Ok(())
    }

    /// Targets of `id`'s outgoing edges in list order
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.check_node(id)?;
        Ok(self.walk(id).collect())
    }

    /// Depth-first traversal from node 1; see [`dfs_traverse`]
    pub fn depth_first_traversal(&mut self) -> Traversal {
        dfs_traverse(self)
    }

    pub fn label(&self, id: NodeId) -> Result<&str> {
        self.labels.get(id)
    }

    pub fn labels(&self) -> &NodeLabels {
        &self.labels
    }

    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Valid node ids, ascending
    pub fn node_ids(&self) -> RangeInclusive<NodeId> {
        1..=self.size()
    }

    /// Follow the linked list of `id`, which must be in range
    fn walk(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.nodes[id].head, move |&index| self.edges[index].next)
            .map(move |index| self.edges[index].target)
    }

    fn check_node(&self, id: NodeId) -> Result<()> {
        if !self.node_ids().contains(&id) {
            bail_out_of_range!(id, self.size());
        }
        Ok(())
    }
}

impl TraversalProvider for AdjacencyList {
    fn node_count(&self) -> usize {
        self.size()
    }

    fn successors(&self, id: NodeId) -> Vec<NodeId> {
        if self.node_ids().contains(&id) {
            self.walk(id).collect()
        } else {
            Vec::new()
        }
    }

    fn clear_visited(&mut self) {
        for node in &mut self.nodes {
            node.visited = false;
        }
    }

    fn mark_visited(&mut self, id: NodeId) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) if !node.visited => {
                node.visited = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    fn request(size: usize, edges: &[(NodeId, NodeId)]) -> BuildRequest<Edge> {
        BuildRequest::new(
            (1..=size).map(|id| format!("node {id}")).collect(),
            edges.iter().map(|&(from, to)| Edge::new(from, to)).collect(),
        )
    }

    fn built(size: usize, edges: &[(NodeId, NodeId)]) -> AdjacencyList {
        let mut graph = AdjacencyList::default();
        graph.build(&request(size, edges)).unwrap();
        graph
    }

    #[test]
    fn test_adjacency_is_reverse_of_insertion() {
        let graph = built(4, &[(1, 2), (1, 3), (2, 4)]);
        assert_eq!(graph.neighbors(1).unwrap(), vec![3, 2]);
        assert_eq!(graph.neighbors(2).unwrap(), vec![4]);
        assert!(graph.neighbors(3).unwrap().is_empty());
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_four_node_traversal() {
        let mut graph = built(4, &[(1, 2), (1, 3), (2, 4)]);
        assert_eq!(graph.depth_first_traversal().order, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_traversal_is_repeatable() {
        let mut graph = built(4, &[(1, 2), (1, 3), (2, 4)]);
        let first = graph.depth_first_traversal();
        assert_eq!(graph.depth_first_traversal(), first);
    }

    #[test]
    fn test_empty_graph_traversal() {
        let mut graph = built(0, &[]);
        assert!(graph.is_empty());
        assert!(graph.depth_first_traversal().order.is_empty());
    }

    #[test]
    fn test_each_reachable_node_emitted_once() {
        let mut graph = built(6, &[(1, 2), (2, 3), (3, 1), (3, 2), (2, 5), (4, 6)]);
        let mut order = graph.depth_first_traversal().order;
        assert_eq!(order, vec![1, 2, 5, 3]);
        order.sort_unstable();
        order.dedup();
        assert_eq!(order, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let graph = built(2, &[(1, 2), (1, 2)]);
        assert_eq!(graph.neighbors(1).unwrap(), vec![2, 2]);
    }

    #[test]
    fn test_build_stops_at_terminator() {
        let graph = built(3, &[(1, 2), (0, 0), (2, 3)]);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.neighbors(2).unwrap().is_empty());
    }

    #[test]
    fn test_rebuild_releases_old_edges() {
        let mut graph = built(3, &[(1, 2), (2, 3), (3, 1)]);
        graph.build(&request(2, &[(2, 1)])).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.neighbors(1).unwrap().is_empty());
        assert_eq!(graph.neighbors(2).unwrap(), vec![1]);
        assert_eq!(graph.label(2).unwrap(), "node 2");
    }

    #[test]
    fn test_failed_build_keeps_previous_graph() {
        let mut graph = built(2, &[(1, 2)]);
        let err = graph.build(&request(2, &[(3, 1)])).unwrap_err();
        assert!(matches!(err, GraphError::OutOfRange { node: 3, size: 2 }));
        assert_eq!(graph.neighbors(1).unwrap(), vec![2]);
    }

    #[test]
    fn test_too_many_nodes() {
        let mut graph = AdjacencyList::with_max_nodes(1);
        assert!(matches!(
            graph.build(&request(2, &[])),
            Err(GraphError::TooManyNodes { requested: 2, max: 1 })
        ));
    }

    #[test]
    fn test_out_of_range_lookups() {
        let mut graph = built(2, &[]);
        assert!(graph.neighbors(0).is_err());
        assert!(graph.insert_edge(1, 3).is_err());
        assert!(graph.label(3).is_err());
        assert!(graph.successors(9).is_empty());
    }
}

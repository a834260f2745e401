//! Weighted digraph backed by an adjacency matrix

use std::ops::RangeInclusive;
use std::time::Instant;

use crate::bail_out_of_range;
use crate::config::{GraphConfig, DEFAULT_MAX_NODES};
use crate::error::Result;
use crate::graph::algos::ShortestPathTable;
use crate::graph::labels::NodeLabels;
use crate::graph::traversal::WeightedProvider;
use crate::graph::types::{BuildRequest, NodeId, PathResult, Weight, WeightedEdge};
use crate::trace_time;

/// Weighted directed graph with an all-pairs shortest-path table.
///
/// `cost[i][j]` holds the weight of edge `i -> j`, or `None` when there is
/// no such edge. Storage is 1-based with slot 0 unused. The two directions
/// of a node pair are independent.
///
/// The shortest-path table is not maintained incrementally: after `build`,
/// `insert_edge` or `remove_edge`, call
/// [`compute_shortest_paths`](Self::compute_shortest_paths) before querying.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    max_nodes: usize,
    size: usize,
    labels: NodeLabels,
    cost: Vec<Vec<Option<Weight>>>,
    table: ShortestPathTable,
}

impl Default for AdjacencyMatrix {
    fn default() -> Self {
        Self::with_max_nodes(DEFAULT_MAX_NODES)
    }
}

impl AdjacencyMatrix {
    /// Empty graph bounded by `config.max_nodes`
    pub fn new(config: &GraphConfig) -> Self {
        Self::with_max_nodes(config.max_nodes)
    }

    /// Empty graph holding at most `max_nodes` nodes
    pub fn with_max_nodes(max_nodes: usize) -> Self {
        Self::empty(max_nodes, 0, NodeLabels::default())
    }

    fn empty(max_nodes: usize, size: usize, labels: NodeLabels) -> Self {
        Self {
            max_nodes,
            size,
            labels,
            cost: vec![vec![None; size + 1]; size + 1],
            table: ShortestPathTable::new(size),
        }
    }

    /// Replace the whole graph with the one described by `request`.
    ///
    /// Edges are applied in order up to the first one with `from == 0`.
    /// The request is validated up front; on error the current graph is
    /// left as it was.
    #[tracing::instrument(skip(self, request), fields(nodes = request.node_count, edges = request.edges.len()))]
    pub fn build(&mut self, request: &BuildRequest<WeightedEdge>) -> Result<()> {
        let start = Instant::now();
        request.validate(self.max_nodes)?;

        let mut graph = Self::empty(
            self.max_nodes,
            request.node_count,
            NodeLabels::new(request.labels.clone()),
        );
        let mut applied = 0usize;
        for edge in request.active_edges() {
            graph.insert_edge(edge.from, edge.to, edge.weight)?;
            applied += 1;
        }

        *self = graph;
        tracing::debug!(nodes = self.size, edges = applied, "build_matrix");
        trace_time!(start, "build_matrix");
        Ok(())
    }

    /// Set the weight of `from -> to`, overwriting any previous weight
    pub fn insert_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.cost[from][to] = Some(weight);
        self.table.invalidate();
        Ok(())
    }

    /// Remove `from -> to`; removing a missing edge is a no-op
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.cost[from][to] = None;
        self.table.invalidate();
        Ok(())
    }

    /// Weight of `from -> to`, `None` if there is no edge
    pub fn get_edge(&self, from: NodeId, to: NodeId) -> Result<Option<Weight>> {
        self.check_node(from)?;
        self.check_node(to)?;
        Ok(self.cost[from][to])
    }

    /// Run Dijkstra's algorithm with every node as source
    pub fn compute_shortest_paths(&mut self) {
        let mut table = std::mem::take(&mut self.table);
        table.compute(&*self);
        self.table = table;
        tracing::debug!(nodes = self.size, "compute_shortest_paths");
    }

    /// Shortest distance and node path from `from` to `to`.
    ///
    /// An unreachable pair is a normal result with `Distance::Unreachable`
    /// and an empty path.
    pub fn distance_and_path(&self, from: NodeId, to: NodeId) -> Result<PathResult> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.table.distance_and_path(from, to)
    }

    pub fn is_computed(&self) -> bool {
        self.table.is_computed()
    }

    pub fn table(&self) -> &ShortestPathTable {
        &self.table
    }

    pub fn label(&self, id: NodeId) -> Result<&str> {
        self.labels.get(id)
    }

    pub fn labels(&self) -> &NodeLabels {
        &self.labels
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    /// Valid node ids, ascending
    pub fn node_ids(&self) -> RangeInclusive<NodeId> {
        1..=self.size
    }

    fn check_node(&self, id: NodeId) -> Result<()> {
        if !self.node_ids().contains(&id) {
            bail_out_of_range!(id, self.size);
        }
        Ok(())
    }
}

impl WeightedProvider for AdjacencyMatrix {
    fn node_count(&self) -> usize {
        self.size
    }

    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.cost.get(from).and_then(|row| row.get(to)).copied().flatten()
    }
}

use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::traversal::WeightedProvider;
use crate::graph::types::{Distance, NodeId, PathResult, NO_NODE};
use crate::trace_time;

/// Per-(source, node) bookkeeping for Dijkstra's algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// Shortest distance from the source is final
    pub visited: bool,
    /// Best distance from the source known so far
    pub dist: Distance,
    /// Predecessor on the shortest path, `NO_NODE` for the source or unreached nodes
    pub path: NodeId,
}

impl Default for TableEntry {
    fn default() -> Self {
        Self {
            visited: false,
            dist: Distance::Unreachable,
            path: NO_NODE,
        }
    }
}

/// All-pairs shortest-path table, one row per source node.
///
/// Rows and columns are indexed by node id with slot 0 unused. The table is
/// filled by [`ShortestPathTable::compute`] and is read-only afterwards; any
/// change to the underlying graph must call [`ShortestPathTable::invalidate`]
/// so that queries fail with `NotComputed` until the next computation.
#[derive(Debug, Clone, Default)]
pub struct ShortestPathTable {
    rows: Vec<Vec<TableEntry>>,
    size: usize,
    computed: bool,
}

impl ShortestPathTable {
    /// Fresh table for `size` nodes with every entry reset
    pub fn new(size: usize) -> Self {
        let mut table = Self::default();
        table.reset(size);
        table
    }

    /// Reset every entry to unvisited/unreachable/no predecessor
    pub fn reset(&mut self, size: usize) {
        self.size = size;
        self.rows = vec![vec![TableEntry::default(); size + 1]; size + 1];
        self.computed = false;
    }

    /// Mark the table stale after a graph mutation
    pub fn invalidate(&mut self) {
        self.computed = false;
    }

    pub fn is_computed(&self) -> bool {
        self.computed
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw entry for `(source, node)`, if both ids are in range
    pub fn entry(&self, source: NodeId, node: NodeId) -> Option<&TableEntry> {
        if !self.in_range(source) || !self.in_range(node) {
            return None;
        }
        Some(&self.rows[source][node])
    }

    fn in_range(&self, id: NodeId) -> bool {
        (1..=self.size).contains(&id)
    }

    /// Run Dijkstra's algorithm from every node of `provider`
    #[tracing::instrument(skip(self, provider), fields(nodes = provider.node_count()))]
    pub fn compute<P: WeightedProvider + ?Sized>(&mut self, provider: &P) {
        let start = Instant::now();
        self.reset(provider.node_count());

        for source in 1..=self.size {
            dijkstra_from(provider, source, &mut self.rows[source]);
        }

        self.computed = true;
        trace_time!(start, "compute_shortest_paths", nodes = self.size);
    }

    /// Shortest distance and path from `from` to `to`
    pub fn distance_and_path(&self, from: NodeId, to: NodeId) -> Result<PathResult> {
        if !self.computed {
            return Err(GraphError::NotComputed);
        }
        for id in [from, to] {
            if !self.in_range(id) {
                return Err(GraphError::out_of_range(id, self.size));
            }
        }

        let distance = self.rows[from][to].dist;
        if !distance.is_reachable() {
            return Ok(PathResult::unreachable(from, to));
        }

        Ok(PathResult {
            from,
            to,
            distance,
            path: self.reconstruct_path(from, to),
        })
    }

    /// Walk predecessors back from `to` and return the path in forward order
    fn reconstruct_path(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        let row = &self.rows[from];
        let mut path = vec![to];
        let mut current = row[to].path;

        // A simple path never has more than `size` nodes
        while current != NO_NODE && path.len() <= self.size {
            path.push(current);
            current = row[current].path;
        }

        path.reverse();
        path
    }
}

/// Single-source Dijkstra over `row`, which is indexed by node id
fn dijkstra_from<P: WeightedProvider + ?Sized>(
    provider: &P,
    source: NodeId,
    row: &mut [TableEntry],
) {
    let size = provider.node_count();
    row[source].dist = Distance::ZERO;

    for _ in 1..=size {
        // Everything left is unreachable from this source
        let Some(current) = next_closest(row) else {
            break;
        };
        row[current].visited = true;
        let current_dist = row[current].dist;

        for next in 1..=size {
            if row[next].visited {
                continue;
            }
            let Some(weight) = provider.edge_weight(current, next) else {
                continue;
            };

            let candidate = current_dist.extend(weight);
            if candidate < row[next].dist {
                row[next].dist = candidate;
                row[next].path = current;
            }
        }
    }

    tracing::trace!(
        source,
        reached = row.iter().filter(|entry| entry.visited).count(),
        "dijkstra_source_done"
    );
}

/// Unvisited node with the smallest finite distance; lowest id wins ties
fn next_closest(row: &[TableEntry]) -> Option<NodeId> {
    let mut closest: Option<(NodeId, Distance)> = None;

    for (id, entry) in row.iter().enumerate().skip(1) {
        if entry.visited || !entry.dist.is_reachable() {
            continue;
        }
        if closest.is_none_or(|(_, best)| entry.dist < best) {
            closest = Some((id, entry.dist));
        }
    }

    closest.map(|(id, _)| id)
}

#[cfg(test)]
mod tests;

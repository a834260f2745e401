use serde::{Serialize, Serializer};

use crate::error::{GraphError, Result};

/// Node identifier, valid in `1..=size`
pub type NodeId = usize;

/// Reserved id meaning "no node": end of a predecessor chain or of an edge list
pub const NO_NODE: NodeId = 0;

/// Edge weight. Unsigned, so negative weights cannot be expressed.
pub type Weight = u32;

/// Shortest known distance between two nodes
///
/// Variant order matters: every `Finite` distance compares below
/// `Unreachable`, so the derived `Ord` is the distance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Distance {
    Finite(u64),
    #[default]
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            Distance::Finite(value) => Some(*value),
            Distance::Unreachable => None,
        }
    }

    /// Distance after following one more edge.
    ///
    /// Never does arithmetic on `Unreachable`; an overflowing sum is
    /// reported as unreachable rather than wrapping to a small value.
    pub fn extend(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(value) => value
                .checked_add(u64::from(weight))
                .map_or(Distance::Unreachable, Distance::Finite),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Weighted edge tuple as handed over by a loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(from: NodeId, to: NodeId, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

/// Unweighted edge tuple as handed over by a loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

/// Common view of edge tuples so `build` can spot the list terminator
pub trait EdgeTuple {
    fn source(&self) -> NodeId;
    fn target(&self) -> NodeId;

    /// `from == 0` marks the end of the edge list
    fn is_terminator(&self) -> bool {
        self.source() == NO_NODE
    }
}

impl EdgeTuple for WeightedEdge {
    fn source(&self) -> NodeId {
        self.from
    }

    fn target(&self) -> NodeId {
        self.to
    }
}

impl EdgeTuple for Edge {
    fn source(&self) -> NodeId {
        self.from
    }

    fn target(&self) -> NodeId {
        self.to
    }
}

/// Pre-parsed description of one graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest<E> {
    pub node_count: usize,
    /// Labels in node order: index 0 holds the label of node 1
    pub labels: Vec<String>,
    pub edges: Vec<E>,
}

impl<E: EdgeTuple> BuildRequest<E> {
    pub fn new(labels: Vec<String>, edges: Vec<E>) -> Self {
        Self {
            node_count: labels.len(),
            labels,
            edges,
        }
    }

    /// Edges up to, not including, the first terminator
    pub fn active_edges(&self) -> impl Iterator<Item = &E> {
        self.edges.iter().take_while(|edge| !edge.is_terminator())
    }

    /// Check the request against a node bound before anything is built
    pub fn validate(&self, max_nodes: usize) -> Result<()> {
        if self.node_count > max_nodes {
            return Err(GraphError::TooManyNodes {
                requested: self.node_count,
                max: max_nodes,
            });
        }
        if self.labels.len() != self.node_count {
            return Err(GraphError::LabelCountMismatch {
                expected: self.node_count,
                actual: self.labels.len(),
            });
        }
        for edge in self.active_edges() {
            for id in [edge.source(), edge.target()] {
                if !(1..=self.node_count).contains(&id) {
                    return Err(GraphError::out_of_range(id, self.node_count));
                }
            }
        }
        Ok(())
    }
}

/// Answer to a single distance/path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: Distance,
    /// Node ids from `from` to `to` inclusive; empty when unreachable
    pub path: Vec<NodeId>,
}

impl PathResult {
    pub fn unreachable(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            distance: Distance::Unreachable,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_reachable()
    }
}

/// Result of a depth-first traversal
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Traversal {
    pub order: Vec<NodeId>,
}

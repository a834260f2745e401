//! Display labels keyed by node id

use crate::error::{GraphError, Result};
use crate::graph::types::NodeId;

/// Node labels stored 1-based: slot 0 is never handed out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeLabels {
    labels: Vec<String>,
}

impl NodeLabels {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Number of labelled nodes
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of node `id`
    pub fn get(&self, id: NodeId) -> Result<&str> {
        id.checked_sub(1)
            .and_then(|index| self.labels.get(index))
            .map(String::as_str)
            .ok_or_else(|| GraphError::out_of_range(id, self.labels.len()))
    }

    /// `(id, label)` pairs in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| (index + 1, label.as_str()))
    }
}

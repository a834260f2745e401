//! JSON views shared by the graph commands

use serde::Serialize;

use digraph_core::graph::{NodeId, NodeLabels};

#[derive(Debug, Serialize)]
pub struct NodeView<'a> {
    pub id: NodeId,
    pub label: &'a str,
}

#[derive(Debug, Serialize)]
pub struct EdgeView {
    pub from: NodeId,
    pub to: NodeId,
}

/// One entry per node, ascending by id
pub fn node_views(labels: &NodeLabels) -> Vec<NodeView<'_>> {
    labels
        .iter()
        .map(|(id, label)| NodeView { id, label })
        .collect()
}

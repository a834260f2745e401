use crate::graph::traversal::TraversalProvider;
use crate::graph::types::{NodeId, Traversal};

/// Node the traversal always starts from
pub const START_NODE: NodeId = 1;

/// Pending work for one node on the explicit stack
struct Frame {
    successors: Vec<NodeId>,
    next: usize,
}

impl Frame {
    fn enter<P: TraversalProvider + ?Sized>(provider: &P, node: NodeId) -> Self {
        Self {
            successors: provider.successors(node),
            next: 0,
        }
    }
}

/// Depth-first traversal from node 1.
///
/// Emits nodes in recursive-descent order: a node is emitted when first
/// reached, then each successor is followed in adjacency order before
/// moving on to the next one. Visit marks are cleared first, so calling
/// this twice on the same graph yields the same order. Nodes unreachable
/// from node 1 are never emitted.
pub fn dfs_traverse<P: TraversalProvider + ?Sized>(provider: &mut P) -> Traversal {
    let mut order = Vec::new();
    if provider.node_count() == 0 {
        return Traversal { order };
    }

    provider.clear_visited();
    provider.mark_visited(START_NODE);
    order.push(START_NODE);
    let mut stack = vec![Frame::enter(&*provider, START_NODE)];

    while let Some(frame) = stack.last_mut() {
        let Some(&target) = frame.successors.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        if provider.mark_visited(target) {
            order.push(target);
            stack.push(Frame::enter(&*provider, target));
        }
    }

    tracing::debug!(visited = order.len(), nodes = provider.node_count(), "dfs_traverse");
    Traversal { order }
}

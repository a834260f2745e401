use super::*;
use crate::graph::types::Weight;
use std::collections::HashMap;

/// Minimal weighted provider backed by a map of directed edges
struct EdgeMap {
    size: usize,
    edges: HashMap<(NodeId, NodeId), Weight>,
}

impl EdgeMap {
    fn new(size: usize, edges: &[(NodeId, NodeId, Weight)]) -> Self {
        Self {
            size,
            edges: edges.iter().map(|&(a, b, w)| ((a, b), w)).collect(),
        }
    }
}

impl WeightedProvider for EdgeMap {
    fn node_count(&self) -> usize {
        self.size
    }

    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.edges.get(&(from, to)).copied()
    }
}

fn computed(size: usize, edges: &[(NodeId, NodeId, Weight)]) -> ShortestPathTable {
    let provider = EdgeMap::new(size, edges);
    let mut table = ShortestPathTable::new(size);
    table.compute(&provider);
    table
}

#[test]
fn test_new_table_is_reset() {
    let table = ShortestPathTable::new(3);
    assert!(!table.is_computed());
    for source in 1..=3 {
        for node in 1..=3 {
            assert_eq!(table.entry(source, node), Some(&TableEntry::default()));
        }
    }
    assert_eq!(table.entry(0, 1), None);
    assert_eq!(table.entry(1, 4), None);
}

#[test]
fn test_query_before_compute_is_not_computed() {
    let table = ShortestPathTable::new(2);
    assert!(matches!(
        table.distance_and_path(1, 2),
        Err(GraphError::NotComputed)
    ));
}

#[test]
fn test_prefers_cheaper_two_hop_route() {
    let table = computed(3, &[(1, 2, 5), (2, 3, 3), (1, 3, 20)]);

    let result = table.distance_and_path(1, 3).unwrap();
    assert_eq!(result.distance, Distance::Finite(8));
    assert_eq!(result.path, vec![1, 2, 3]);

    let back = table.distance_and_path(3, 1).unwrap();
    assert_eq!(back.distance, Distance::Unreachable);
    assert!(back.path.is_empty());
}

#[test]
fn test_source_to_itself() {
    let table = computed(2, &[(1, 2, 4)]);
    let result = table.distance_and_path(2, 2).unwrap();
    assert_eq!(result.distance, Distance::ZERO);
    assert_eq!(result.path, vec![2]);
    assert_eq!(table.entry(2, 2).unwrap().path, NO_NODE);
}

#[test]
fn test_tie_goes_to_lowest_id() {
    // Both 2 and 3 sit at distance 1; 2 is finalized first, so 4 is reached
    // through 2 even though the route through 3 costs the same.
    let table = computed(4, &[(1, 3, 1), (1, 2, 1), (3, 4, 1), (2, 4, 1)]);
    let result = table.distance_and_path(1, 4).unwrap();
    assert_eq!(result.distance, Distance::Finite(2));
    assert_eq!(result.path, vec![1, 2, 4]);
}

#[test]
fn test_unreachable_nodes_leave_entries_untouched() {
    let table = computed(4, &[(1, 2, 7), (3, 4, 1)]);

    for node in [3, 4] {
        let entry = table.entry(1, node).unwrap();
        assert!(!entry.visited);
        assert_eq!(entry.dist, Distance::Unreachable);
        assert_eq!(entry.path, NO_NODE);
    }
    assert_eq!(table.distance_and_path(3, 4).unwrap().distance, Distance::Finite(1));
}

#[test]
fn test_zero_weight_edge_is_an_edge() {
    let table = computed(2, &[(1, 2, 0)]);
    let result = table.distance_and_path(1, 2).unwrap();
    assert_eq!(result.distance, Distance::ZERO);
    assert_eq!(result.path, vec![1, 2]);
}

#[test]
fn test_large_weights_do_not_overflow() {
    let max = Weight::MAX;
    let table = computed(3, &[(1, 2, max), (2, 3, max)]);
    let result = table.distance_and_path(1, 3).unwrap();
    assert_eq!(result.distance, Distance::Finite(2 * u64::from(max)));
}

#[test]
fn test_out_of_range_query() {
    let table = computed(2, &[(1, 2, 1)]);
    assert!(matches!(
        table.distance_and_path(0, 2),
        Err(GraphError::OutOfRange { node: 0, size: 2 })
    ));
    assert!(matches!(
        table.distance_and_path(1, 3),
        Err(GraphError::OutOfRange { node: 3, size: 2 })
    ));
}

#[test]
fn test_invalidate_blocks_queries_until_recompute() {
    let provider = EdgeMap::new(2, &[(1, 2, 3)]);
    let mut table = ShortestPathTable::new(2);
    table.compute(&provider);
    assert!(table.is_computed());

    table.invalidate();
    assert!(matches!(
        table.distance_and_path(1, 2),
        Err(GraphError::NotComputed)
    ));

    table.compute(&provider);
    assert_eq!(
        table.distance_and_path(1, 2).unwrap().distance,
        Distance::Finite(3)
    );
}

#[test]
fn test_recompute_is_idempotent() {
    let provider = EdgeMap::new(3, &[(1, 2, 2), (2, 3, 2), (3, 1, 2)]);
    let mut table = ShortestPathTable::new(3);
    table.compute(&provider);
    let first: Vec<_> = (1..=3)
        .flat_map(|s| (1..=3).map(move |n| (s, n)))
        .map(|(s, n)| *table.entry(s, n).unwrap())
        .collect();

    table.compute(&provider);
    let second: Vec<_> = (1..=3)
        .flat_map(|s| (1..=3).map(move |n| (s, n)))
        .map(|(s, n)| *table.entry(s, n).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_next_closest_skips_visited_and_unreachable() {
    let mut row = vec![TableEntry::default(); 4];
    assert_eq!(next_closest(&row), None);

    row[2].dist = Distance::Finite(4);
    row[3].dist = Distance::Finite(4);
    assert_eq!(next_closest(&row), Some(2));

    row[2].visited = true;
    assert_eq!(next_closest(&row), Some(3));
}

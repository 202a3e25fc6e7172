//! Custom assertions for graph verification

use procmap_core::ProcessGraph;

/// Same nodes and edges after sorting, means compared within `tolerance`
pub fn assert_graphs_equivalent(a: &ProcessGraph, b: &ProcessGraph, tolerance: f64) {
    let (a, b) = (a.sorted(), b.sorted());
    assert_eq!(a.nodes, b.nodes, "node sets differ");
    assert_eq!(
        a.edges.len(),
        b.edges.len(),
        "edge counts differ: {:?} vs {:?}",
        a.edges.iter().map(|e| (&e.from, &e.to)).collect::<Vec<_>>(),
        b.edges.iter().map(|e| (&e.from, &e.to)).collect::<Vec<_>>()
    );
    for (x, y) in a.edges.iter().zip(&b.edges) {
        assert_eq!(
            (&x.from, &x.to, x.kind, x.count),
            (&y.from, &y.to, y.kind, y.count)
        );
        assert!(
            (x.avg_duration_secs - y.avg_duration_secs).abs() <= tolerance,
            "{} -> {}: {} vs {}",
            x.from,
            x.to,
            x.avg_duration_secs,
            y.avg_duration_secs
        );
    }
}

/// Edge exists with the expected count
pub fn assert_edge_count(graph: &ProcessGraph, from: &str, to: &str, expected: u64) {
    let edge = graph
        .edge(from, to)
        .unwrap_or_else(|| panic!("missing edge {from} -> {to}"));
    assert_eq!(edge.count, expected, "count of {from} -> {to}");
}

//! End-to-end builds through GraphPipeline

mod common;

use common::*;
use pretty_assertions::assert_eq;
use procmap_core::{
    EdgeKind, GraphPipeline, LogSource, MiningConfig, NodeKind, PipelineError, RecordPolicy,
    SessionOrdering,
};

#[test]
fn test_worked_scenario_from_file() {
    let file = fixture_file(&fixture_worked_scenario());
    let outcome = GraphPipeline::default()
        .run(LogSource::path(file.path()))
        .unwrap();
    let graph = outcome.graph;

    assert_eq!(graph.node("A").unwrap().visit_count, 2);
    assert_eq!(graph.node("B").unwrap().visit_count, 1);
    assert_eq!(graph.boundary_node(NodeKind::Start).unwrap().visit_count, 2);
    assert_eq!(graph.boundary_node(NodeKind::End).unwrap().visit_count, 2);

    let ab = graph.edge("A", "B").unwrap();
    assert_eq!(ab.count, 1);
    assert_eq!(ab.avg_duration_secs, 60.0);
    assert_edge_count(&graph, "start", "A", 2);
    assert_edge_count(&graph, "B", "end", 1);
    assert_edge_count(&graph, "A", "end", 1);
    assert_eq!(graph.edges.len(), 4);
}

#[test]
fn test_build_is_idempotent() {
    let pipeline = GraphPipeline::default();
    let log = fixture_order_log(40);

    let first = pipeline.run(LogSource::bytes("log", log.clone())).unwrap();
    let second = pipeline.run(LogSource::bytes("log", log)).unwrap();

    assert_graphs_equivalent(&first.graph, &second.graph, 1e-9);
    assert_eq!(first.report.session_count, second.report.session_count);
    assert_eq!(first.report.total_records, second.report.total_records);
}

#[test]
fn test_permissive_sees_exactly_k_events() {
    let log = LogBuilder::new()
        .event("c1", 0, "A")
        .raw("c1,not a time,B")
        .event("c1", 30, "B")
        .raw("c2,2024-01-01T00:00:00Z")
        .raw(",2024-01-01T00:00:00Z,A")
        .event("c2", 10, "A")
        .build();

    let config = MiningConfig::default().with_record_policy(RecordPolicy::Permissive);
    let outcome = GraphPipeline::new(config)
        .unwrap()
        .run(LogSource::bytes("log", log))
        .unwrap();

    assert_eq!(outcome.report.accepted_records, 3);
    assert_eq!(outcome.report.skipped_records, 3);
    assert_eq!(outcome.graph.stats().event_count, 3);
    assert_edge_count(&outcome.graph, "A", "B", 1);
}

#[test]
fn test_strict_fails_on_the_same_log() {
    let log = LogBuilder::new()
        .event("c1", 0, "A")
        .raw("c1,2024-01-01T00:00:10Z,B,extra")
        .build();

    let err = GraphPipeline::default()
        .run(LogSource::bytes("log", log))
        .unwrap_err();
    assert!(matches!(err, PipelineError::InvalidRecord { line: 3, .. }));
}

#[test]
fn test_header_only_log_gives_empty_graph() {
    let outcome = GraphPipeline::default()
        .run(LogSource::bytes("log", format!("{HEADER}\n")))
        .unwrap();
    assert!(outcome.graph.is_empty());
    assert_eq!(outcome.report.session_count, 0);
}

#[test]
fn test_quoted_activity_with_delimiter() {
    let log = LogBuilder::new()
        .raw("c1,2024-01-01T00:00:00Z,\"Review, second pass\"")
        .event("c1", 5, "Done")
        .build();
    let graph = GraphPipeline::default()
        .run(LogSource::bytes("log", log))
        .unwrap()
        .graph;
    assert_edge_count(&graph, "Review, second pass", "Done", 1);
}

#[test]
fn test_arrival_order_vs_timestamp_order() {
    let log = LogBuilder::new()
        .event("c1", 60, "B")
        .event("c1", 0, "A")
        .build();

    let arrival = GraphPipeline::default()
        .run(LogSource::bytes("log", log.clone()))
        .unwrap()
        .graph;
    assert_eq!(arrival.edge("B", "A").unwrap().avg_duration_secs, -60.0);

    let sorted = GraphPipeline::new(
        MiningConfig::default().with_session_ordering(SessionOrdering::Timestamp),
    )
    .unwrap()
    .run(LogSource::bytes("log", log))
    .unwrap()
    .graph;
    assert_eq!(sorted.edge("A", "B").unwrap().avg_duration_secs, 60.0);
    assert!(sorted.edge("B", "A").is_none());
}

#[test]
fn test_record_cap_truncates() {
    let config = MiningConfig::default().with_max_records(Some(10));
    let outcome = GraphPipeline::new(config)
        .unwrap()
        .run(LogSource::bytes("log", fixture_order_log(20)))
        .unwrap();
    assert!(outcome.report.truncated);
    assert_eq!(outcome.report.total_records, 10);
    assert_eq!(outcome.graph.stats().event_count, 10);
}

#[test]
fn test_parallel_build_matches_sequential() {
    let log = fixture_order_log(300);
    let sequential = GraphPipeline::default()
        .run(LogSource::bytes("log", log.clone()))
        .unwrap();
    let parallel = GraphPipeline::new(
        MiningConfig::default()
            .with_parallel(true)
            .with_parallel_chunk_size(16),
    )
    .unwrap()
    .run(LogSource::bytes("log", log))
    .unwrap();

    assert_graphs_equivalent(&sequential.graph, &parallel.graph, 1e-6);
}

#[test]
fn test_boundary_edges_per_session() {
    let cases = 30;
    let graph = GraphPipeline::default()
        .run(LogSource::bytes("log", fixture_order_log(cases)))
        .unwrap()
        .graph;

    let boundary_updates: u64 = graph
        .edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Boundary)
        .map(|e| e.count)
        .sum();
    assert_eq!(boundary_updates, 2 * cases as u64);
    assert_edge_count(&graph, "start", "Create Order", cases as u64);
    assert_edge_count(&graph, "Check Credit", "end", (cases / 3) as u64);
}

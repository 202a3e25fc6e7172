//! Adapter output over real builds

mod common;

use common::*;
use procmap_core::adapters::{to_cytoscape, to_dot};
use procmap_core::{GraphPipeline, LogSource};

#[test]
fn test_cytoscape_round_trips_through_json() {
    let graph = GraphPipeline::default()
        .run(LogSource::bytes("log", fixture_worked_scenario()))
        .unwrap()
        .graph;

    let json = serde_json::to_string(&to_cytoscape(&graph)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let nodes = value["nodes"].as_array().unwrap();
    let edges = value["edges"].as_array().unwrap();
    assert_eq!(nodes.len(), 4);
    assert_eq!(edges.len(), 4);
    assert!(nodes.iter().all(|n| n["data"]["count"] == n["data"]["total"]));

    let dashed = edges
        .iter()
        .filter(|e| e["data"]["style"] == "dashed")
        .count();
    assert_eq!(dashed, 3);
}

#[test]
fn test_dot_is_stable_across_builds() {
    let render = || {
        let graph = GraphPipeline::default()
            .run(LogSource::bytes("log", fixture_order_log(25)))
            .unwrap()
            .graph;
        to_dot(&graph)
    };
    let dot = render();
    assert_eq!(dot, render());
    assert!(dot.starts_with("digraph G {"));
    assert!(dot.contains("\"start\" -> \"Create Order\" [label=\"25\" style=dashed];"));
}

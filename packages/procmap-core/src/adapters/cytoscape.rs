//! Cytoscape-style element JSON
//!
//! Every node and edge is wrapped as `{"data": {...}}`, the element shape
//! browser graph viewers consume.

use serde::{Deserialize, Serialize};

use crate::features::process_graph::ProcessGraph;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element<T> {
    pub data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeData {
    pub id: String,
    pub label: String,
    pub count: u64,
    pub total: u64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    pub from: String,
    pub to: String,
    pub count: u64,
    pub label: String,
    pub style: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CytoscapeGraph {
    pub nodes: Vec<Element<NodeData>>,
    pub edges: Vec<Element<EdgeData>>,
}

/// Wrap every node and edge of `graph`, keeping its order
pub fn to_cytoscape(graph: &ProcessGraph) -> CytoscapeGraph {
    let nodes = graph
        .nodes
        .iter()
        .map(|node| Element {
            data: NodeData {
                id: node.id.clone(),
                label: node.label.clone(),
                count: node.visit_count,
                total: node.total_count,
                color: node.color.as_str().to_string(),
            },
        })
        .collect();

    let edges = graph
        .edges
        .iter()
        .map(|edge| Element {
            data: EdgeData {
                from: edge.from.clone(),
                to: edge.to.clone(),
                count: edge.count,
                label: edge.label.clone(),
                style: edge.line_style.as_str().to_string(),
            },
        })
        .collect();

    CytoscapeGraph { nodes, edges }
}

//! Graphviz DOT rendering
//!
//! Output is deterministic: the graph is sorted before rendering.

use crate::features::process_graph::{EdgeKind, LineStyle, ProcessGraph};

/// Which half of a transition label goes on the edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DotLabelMode {
    /// Transition counts
    #[default]
    Events,
    /// Mean durations (`"12.50 sec avg"`); boundary edges stay unlabeled
    Duration,
}

impl DotLabelMode {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "events" | "count" => Ok(DotLabelMode::Events),
            "duration" | "time" => Ok(DotLabelMode::Duration),
            _ => Err(format!(
                "Unknown label mode: {}. Valid options: events, duration",
                s
            )),
        }
    }
}

pub fn to_dot(graph: &ProcessGraph) -> String {
    to_dot_with(graph, DotLabelMode::Events)
}

pub fn to_dot_with(graph: &ProcessGraph, mode: DotLabelMode) -> String {
    let graph = graph.sorted();
    let mut out = String::new();
    out.push_str("digraph G {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  node [shape=rect style=filled];\n");
    out.push_str("  edge [fontsize=12];\n");

    for node in &graph.nodes {
        out.push_str(&format!(
            "  \"{}\" [label=\"{} ({})\" fillcolor=\"{}\"];\n",
            escape_dot(&node.id),
            escape_dot(&node.label),
            node.visit_count,
            node.color.as_str()
        ));
    }

    for edge in &graph.edges {
        let label = match (mode, edge.kind) {
            (DotLabelMode::Events, _) => edge.count.to_string(),
            (DotLabelMode::Duration, EdgeKind::Transition) => {
                format!("{:.2} sec avg", edge.avg_duration_secs)
            }
            (DotLabelMode::Duration, EdgeKind::Boundary) => String::new(),
        };
        let style = match edge.line_style {
            LineStyle::Dashed => " style=dashed",
            LineStyle::Solid => "",
        };
        out.push_str(&format!(
            "  \"{}\" -> \"{}\" [label=\"{}\"{}];\n",
            escape_dot(&edge.from),
            escape_dot(&edge.to),
            label,
            style
        ));
    }

    out.push_str("}\n");
    out
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

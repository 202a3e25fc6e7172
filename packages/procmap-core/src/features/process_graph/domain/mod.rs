// Process Graph Domain Models
//
// Immutable output of one build. Nodes are activities plus the two
// synthetic boundary nodes; edges are directly-follows transitions plus
// the start/end boundary edges.

use serde::{Deserialize, Serialize};

// ============================================================
// Boundary node identity
// ============================================================

pub const START_ID: &str = "start";
pub const END_ID: &str = "end";
pub const START_LABEL: &str = "Process start";
pub const END_LABEL: &str = "Process end";

// ============================================================
// Kinds
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    Activity,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeColor {
    Blue,
    Green,
    Red,
}

impl NodeColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeColor::Blue => "blue",
            NodeColor::Green => "green",
            NodeColor::Red => "red",
        }
    }
}

impl From<NodeKind> for NodeColor {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Activity => NodeColor::Blue,
            NodeKind::Start => NodeColor::Green,
            NodeKind::End => NodeColor::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    Transition,
    Boundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl LineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
        }
    }
}

impl From<EdgeKind> for LineStyle {
    fn from(kind: EdgeKind) -> Self {
        match kind {
            EdgeKind::Transition => LineStyle::Solid,
            EdgeKind::Boundary => LineStyle::Dashed,
        }
    }
}

// ============================================================
// Node / Edge
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub visit_count: u64,
    /// Mirrors `visit_count`; kept for consumers of the older wire shape
    pub total_count: u64,
    pub color: NodeColor,
}

impl ProcessNode {
    pub fn activity(label: impl Into<String>, visit_count: u64) -> Self {
        let label = label.into();
        Self::with_kind(label.clone(), label, NodeKind::Activity, visit_count)
    }

    pub fn start(session_count: u64) -> Self {
        Self::with_kind(START_ID, START_LABEL, NodeKind::Start, session_count)
    }

    pub fn end(session_count: u64) -> Self {
        Self::with_kind(END_ID, END_LABEL, NodeKind::End, session_count)
    }

    fn with_kind(
        id: impl Into<String>,
        label: impl Into<String>,
        kind: NodeKind,
        visit_count: u64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            visit_count,
            total_count: visit_count,
            color: kind.into(),
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.kind != NodeKind::Activity
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    pub count: u64,
    /// Mean seconds between the two events; always 0.0 on boundary edges
    pub avg_duration_secs: f64,
    pub label: String,
    pub line_style: LineStyle,
}

impl ProcessEdge {
    pub fn transition(
        from: impl Into<String>,
        to: impl Into<String>,
        count: u64,
        avg_duration_secs: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: EdgeKind::Transition,
            count,
            avg_duration_secs,
            label: transition_label(count, avg_duration_secs),
            line_style: EdgeKind::Transition.into(),
        }
    }

    pub fn boundary(from: impl Into<String>, to: impl Into<String>, count: u64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: EdgeKind::Boundary,
            count,
            avg_duration_secs: 0.0,
            label: count.to_string(),
            line_style: EdgeKind::Boundary.into(),
        }
    }
}

/// `"{count}\n{avg:.2} sec avg"`
pub fn transition_label(count: u64, avg_duration_secs: f64) -> String {
    format!("{}\n{:.2} sec avg", count, avg_duration_secs)
}

// ============================================================
// Graph
// ============================================================

/// Directly-follows graph produced by one build
///
/// `nodes` and `edges` carry no order guarantee; use [`ProcessGraph::sorted`]
/// when a stable order matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessGraph {
    pub nodes: Vec<ProcessNode>,
    pub edges: Vec<ProcessEdge>,
}

impl ProcessGraph {
    pub fn new(nodes: Vec<ProcessNode>, edges: Vec<ProcessEdge>) -> Self {
        Self { nodes, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Copy ordered as: start, activities by label, end; edges by (from, to)
    pub fn sorted(&self) -> Self {
        let mut graph = self.clone();
        graph
            .nodes
            .sort_by(|a, b| (a.kind, &a.id).cmp(&(b.kind, &b.id)));
        graph
            .edges
            .sort_by(|a, b| (&a.from, &a.to, a.kind).cmp(&(&b.from, &b.to, b.kind)));
        graph
    }

    /// First node with this id (an activity wins over a boundary node of the same id)
    pub fn node(&self, id: &str) -> Option<&ProcessNode> {
        self.nodes
            .iter()
            .find(|n| n.id == id && n.kind == NodeKind::Activity)
            .or_else(|| self.nodes.iter().find(|n| n.id == id))
    }

    pub fn boundary_node(&self, kind: NodeKind) -> Option<&ProcessNode> {
        self.nodes.iter().find(|n| n.kind == kind && n.is_boundary())
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&ProcessEdge> {
        self.edges.iter().find(|e| e.from == from && e.to == to)
    }

    pub fn stats(&self) -> GraphStats {
        let activity_count = self
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Activity)
            .count();
        let transition_count = self
            .edges
            .iter()
            .filter(|e| e.kind == EdgeKind::Transition)
            .count();
        GraphStats {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            activity_count,
            transition_count,
            session_count: self
                .boundary_node(NodeKind::Start)
                .map_or(0, |n| n.visit_count),
            event_count: self
                .nodes
                .iter()
                .filter(|n| n.kind == NodeKind::Activity)
                .map(|n| n.visit_count)
                .sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub activity_count: usize,
    pub transition_count: usize,
    pub session_count: u64,
    pub event_count: u64,
}

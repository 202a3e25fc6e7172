//! Build result types

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::features::process_graph::ProcessGraph;
use crate::features::session::AccumulationStats;

/// Counters describing one completed build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    pub total_records: u64,
    pub accepted_records: u64,
    pub skipped_records: u64,
    pub session_count: usize,
    pub node_count: usize,
    pub edge_count: usize,
    /// Reading stopped at the configured record cap
    pub truncated: bool,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl BuildReport {
    pub(crate) fn new(
        stats: AccumulationStats,
        session_count: usize,
        graph: &ProcessGraph,
        elapsed: Duration,
    ) -> Self {
        Self {
            total_records: stats.total_records,
            accepted_records: stats.accepted_records,
            skipped_records: stats.skipped_records,
            session_count,
            node_count: graph.nodes.len(),
            edge_count: graph.edges.len(),
            truncated: stats.truncated,
            elapsed,
        }
    }
}

/// Graph plus the report of the build that produced it
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub graph: ProcessGraph,
    pub report: BuildReport,
}

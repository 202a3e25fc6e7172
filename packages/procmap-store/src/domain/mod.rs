//! Domain models and port trait for process graph storage

use chrono::{DateTime, Utc};
use std::sync::Arc;

use procmap_core::{BuildReport, LogSource, ProcessGraph};

use crate::error::Result;

// ═══════════════════════════════════════════════════════════════════════════
// Domain Model: GraphSnapshot
// ═══════════════════════════════════════════════════════════════════════════

/// One published build
///
/// Immutable; replaced wholesale by the next successful build.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    /// Monotonic build counter for this store (first build is 1)
    pub generation: u64,
    pub built_at: DateTime<Utc>,
    pub source: String,
    pub report: BuildReport,
    pub graph: Arc<ProcessGraph>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Port Trait: GraphStore
// ═══════════════════════════════════════════════════════════════════════════

/// Holder of at most one current process graph
///
/// # Core Operations
///
/// - `build`: consume a log and replace the current graph on success
/// - `fetch`: current graph, or `GraphNotBuilt`
/// - `clear`: drop the current graph
///
/// A failed build leaves the previous graph in place.
pub trait GraphStore: Send + Sync {
    /// Build from `source` and publish the result
    ///
    /// # Errors
    ///
    /// Input errors (`SourceUnavailable`, `MalformedLine`, and under the
    /// strict policy `InvalidRecord` / `InvalidTimestamp`).
    fn build(&self, source: LogSource) -> Result<BuildReport>;

    /// Current graph
    ///
    /// # Errors
    ///
    /// `GraphNotBuilt` before the first successful build or after `clear`.
    fn fetch(&self) -> Result<Arc<ProcessGraph>>;

    /// Current snapshot with its build metadata
    fn snapshot(&self) -> Result<Arc<GraphSnapshot>>;

    fn clear(&self);
}

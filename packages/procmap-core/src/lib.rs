/*
 * procmap - Event Log → Process Graph
 *
 * Feature-First Architecture:
 * - shared/      : Common models (Event, Session)
 * - features/    : Vertical slices (record_source → event_parsing → session → process_graph)
 * - pipeline/    : Orchestration
 * - adapters/    : Presentation shapes (Cytoscape JSON, Graphviz DOT)
 *
 * Pipeline:
 *   CSV records → typed events → per-case sessions → directly-follows graph
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::should_implement_trait)] // Inherent from_str returns a plain String error

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models (Event, Session)
pub mod shared;

/// Feature modules (source → parsing → sessions → graph)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration (YAML v1)
pub mod config;

/// Presentation adapters
pub mod adapters;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{MiningConfig, RecordPolicy, SessionOrdering};
pub use errors::{PipelineError, Result, TokenizeError};
pub use features::process_graph::{
    aggregate, EdgeKind, GraphAggregator, GraphStats, LineStyle, NodeColor, NodeKind,
    ProcessEdge, ProcessGraph, ProcessNode,
};
pub use features::record_source::{CsvRecordSource, LogSource, RawRecord};
pub use features::session::{AccumulationStats, SessionAccumulator, SessionLog};
pub use pipeline::{BuildOutcome, BuildReport, GraphPipeline};
pub use shared::models::{Event, Session};

//! Feature slices, leaf-first
//!
//! record_source → event_parsing → session → process_graph

pub mod event_parsing;
pub mod process_graph;
pub mod record_source;
pub mod session;

//! procmap-store - Process Graph Snapshot Store
//!
//! ## Core Principles
//!
//! 1. **Wholesale replacement**: a build publishes a complete graph or nothing
//! 2. **Snapshot reads**: `fetch` hands out an `Arc`, never a view into state
//!    that a later build could mutate
//! 3. **Single writer**: builds are serialized; readers never wait on a build
//!
//! ## Usage
//!
//! ```rust,no_run
//! use procmap_core::LogSource;
//! use procmap_store::{GraphStore, InMemoryGraphStore};
//!
//! # fn main() -> procmap_store::Result<()> {
//! let store = InMemoryGraphStore::new();
//! let report = store.build(LogSource::path("events.csv"))?;
//! let graph = store.fetch()?;
//! assert_eq!(graph.nodes.len(), report.node_count);
//! store.clear();
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StoreError};

pub use domain::{GraphSnapshot, GraphStore};
pub use infrastructure::InMemoryGraphStore;

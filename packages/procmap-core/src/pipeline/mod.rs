//! Pipeline orchestration
//!
//! ```text
//! LogSource ─open─▶ CsvRecordSource ─parse─▶ SessionAccumulator ─finish─▶ SessionLog
//!                                                                          │
//!                                               ProcessGraph ◀─aggregate───┘
//! ```

pub mod orchestrator;
pub mod result;

pub use orchestrator::GraphPipeline;
pub use result::{BuildOutcome, BuildReport};

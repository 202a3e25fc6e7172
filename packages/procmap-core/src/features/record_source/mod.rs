//! Record Source
//!
//! Lazy, finite sequence of raw field tuples from a delimited log.
//! The header line is always discarded. Restartable only by reopening.

pub mod csv_source;
pub mod domain;
mod quote_scan;

pub use csv_source::CsvRecordSource;
pub use domain::{LogSource, RawRecord};

//! Shared module - Common types
//!
//! Types every feature slice agrees on. No I/O here.

pub mod models;

// Re-exports for convenience
pub use models::*;

//! Common test utilities for procmap-core
//!
//! Shared fixtures, assertions, and builders for integration tests.

#![allow(dead_code, unused_imports)]

mod assertions;
mod builders;
mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

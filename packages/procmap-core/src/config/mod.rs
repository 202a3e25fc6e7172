//! Configuration
//!
//! One flat [`MiningConfig`] per build, loadable from a versioned YAML
//! file or assembled with the `with_*` builder methods.
//!
//! # Examples
//!
//! ```rust
//! use procmap_core::config::{MiningConfig, RecordPolicy};
//!
//! let config = MiningConfig::new()
//!     .with_record_policy(RecordPolicy::Permissive)
//!     .with_max_records(None);
//! assert!(config.validate().is_ok());
//! ```

pub mod error;
pub mod mining_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use mining_config::{
    MiningConfig, RecordPolicy, SessionOrdering, DEFAULT_DELIMITER, DEFAULT_MAX_RECORDS,
    DEFAULT_PARALLEL_CHUNK_SIZE,
};

//! Error types for procmap-store

use std::fmt;
use thiserror::Error;

use procmap_core::config::ConfigError;
use procmap_core::PipelineError;

/// Store error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Log could not be opened or read
    SourceUnavailable,
    /// Log line could not be tokenized
    MalformedLine,
    /// Wrong field count or empty field (strict builds)
    InvalidRecord,
    /// Timestamp is not RFC 3339 (strict builds)
    InvalidTimestamp,
    /// Fetch before any successful build, or after clear
    GraphNotBuilt,
    /// Serialization errors
    Serialization,
    /// Configuration errors
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::SourceUnavailable => "source_unavailable",
            ErrorKind::MalformedLine => "malformed_line",
            ErrorKind::InvalidRecord => "invalid_record",
            ErrorKind::InvalidTimestamp => "invalid_timestamp",
            ErrorKind::GraphNotBuilt => "graph_not_built",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Config => "config",
        }
    }

    /// Failure caused by the input log rather than the store
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::SourceUnavailable
                | ErrorKind::MalformedLine
                | ErrorKind::InvalidRecord
                | ErrorKind::InvalidTimestamp
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Store error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct StoreError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl StoreError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn graph_not_built() -> Self {
        Self::new(
            ErrorKind::GraphNotBuilt,
            "No graph has been built yet. Run a build first.",
        )
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization, message)
    }
}

impl From<PipelineError> for StoreError {
    fn from(err: PipelineError) -> Self {
        let kind = match &err {
            PipelineError::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            PipelineError::MalformedLine { .. } => ErrorKind::MalformedLine,
            PipelineError::InvalidRecord { .. } => ErrorKind::InvalidRecord,
            PipelineError::InvalidTimestamp { .. } => ErrorKind::InvalidTimestamp,
        };
        StoreError::new(kind, err.to_string()).with_source(err)
    }
}

impl From<ConfigError> for StoreError {
    fn from(err: ConfigError) -> Self {
        StoreError::new(ErrorKind::Config, err.to_string()).with_source(err)
    }
}

// JSON error conversions
impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::serialization(format!("JSON error: {}", err)).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, StoreError>;

//! Error types for procmap-core
//!
//! Every stage before aggregation reports through [`PipelineError`].
//! Aggregation itself has no error path.

use thiserror::Error;

/// Main error type for log → graph builds
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The log resource could not be opened or read at all
    #[error("Source unavailable: {source_name}: {source}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be tokenized (terminates the record stream)
    #[error("Malformed line {line}: {source}")]
    MalformedLine {
        line: u64,
        #[source]
        source: TokenizeError,
    },

    /// Wrong field count or empty required field
    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    /// Timestamp does not parse as RFC 3339
    #[error("Invalid timestamp at line {line}: '{value}' ({source})")]
    InvalidTimestamp {
        line: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl PipelineError {
    /// Create an invalid record error
    pub fn invalid_record(line: u64, reason: impl Into<String>) -> Self {
        PipelineError::InvalidRecord {
            line,
            reason: reason.into(),
        }
    }

    /// Create a source-unavailable error
    pub fn source_unavailable(source_name: impl Into<String>, source: std::io::Error) -> Self {
        PipelineError::SourceUnavailable {
            source_name: source_name.into(),
            source,
        }
    }

    /// Record-level errors a permissive build may skip
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            PipelineError::InvalidRecord { .. } | PipelineError::InvalidTimestamp { .. }
        )
    }

    /// Source line the error refers to, if any
    pub fn line(&self) -> Option<u64> {
        match self {
            PipelineError::SourceUnavailable { .. } => None,
            PipelineError::MalformedLine { line, .. }
            | PipelineError::InvalidRecord { line, .. }
            | PipelineError::InvalidTimestamp { line, .. } => Some(*line),
        }
    }
}

/// Why a line could not be split into fields
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// `"` inside a field that did not open with one
    #[error("bare \" in non-quoted field")]
    BareQuote,

    /// Something other than a delimiter or line break after a closing `"`
    #[error("extraneous or missing \" in quoted field")]
    ExtraneousQuote,

    /// Input ended inside a quoted field
    #[error("quoted field is never closed")]
    UnterminatedQuote,

    /// Rejected by the csv reader itself (invalid UTF-8)
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

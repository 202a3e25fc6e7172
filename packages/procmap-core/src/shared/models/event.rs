//! Event: one observed activity occurrence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accepted log record
///
/// Immutable once parsed. Owned by exactly one [`Session`](super::Session)
/// after grouping; never retained in the final graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Case / session identifier (non-empty)
    pub case_id: String,
    /// Occurrence instant, normalized to UTC
    pub timestamp: DateTime<Utc>,
    /// Activity label (non-empty); becomes a graph node
    pub activity: String,
    /// 1-based source line (diagnostics only)
    #[serde(default)]
    pub line: u64,
}

impl Event {
    pub fn new(
        case_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        activity: impl Into<String>,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            timestamp,
            activity: activity.into(),
            line: 0,
        }
    }

    /// Attach the source line the event was parsed from
    pub fn at_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }

    /// Signed elapsed seconds from `earlier` to `self`
    ///
    /// Negative when `earlier` is actually later (out-of-order rows).
    pub fn seconds_since(&self, earlier: &Event) -> f64 {
        let delta = self.timestamp.signed_duration_since(earlier.timestamp);
        match delta.num_nanoseconds() {
            Some(nanos) => nanos as f64 / 1_000_000_000.0,
            // Beyond ±292 years nanoseconds overflow i64
            None => delta.num_milliseconds() as f64 / 1_000.0,
        }
    }
}

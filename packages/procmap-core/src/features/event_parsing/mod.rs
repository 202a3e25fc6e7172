//! Event Parser
//!
//! `caseID,timestampRFC3339,activityLabel` → [`Event`]. Pure; the
//! failure policy belongs to the caller (see `features::session`).

use chrono::{DateTime, Utc};

use crate::errors::{PipelineError, Result};
use crate::features::record_source::RawRecord;
use crate::shared::models::Event;

/// Exact number of fields a record must carry
pub const FIELD_COUNT: usize = 3;

const CASE_ID: usize = 0;
const TIMESTAMP: usize = 1;
const ACTIVITY: usize = 2;

/// Parse one raw record into an event
pub fn parse_event(record: &RawRecord) -> Result<Event> {
    if record.len() != FIELD_COUNT {
        return Err(PipelineError::invalid_record(
            record.line,
            format!(
                "expected {} fields (case id, timestamp, activity), found {}",
                FIELD_COUNT,
                record.len()
            ),
        ));
    }

    let case_id = required(record, CASE_ID, "case id")?;
    let raw_timestamp = record.get(TIMESTAMP).unwrap_or_default();
    let activity = required(record, ACTIVITY, "activity")?;

    let timestamp = parse_timestamp(raw_timestamp).map_err(|source| {
        PipelineError::InvalidTimestamp {
            line: record.line,
            value: raw_timestamp.to_string(),
            source,
        }
    })?;

    Ok(Event::new(case_id, timestamp, activity).at_line(record.line))
}

/// RFC 3339 (`2024-03-01T10:15:30Z`, fractional seconds and offsets allowed)
pub fn parse_timestamp(value: &str) -> std::result::Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value.trim()).map(|dt| dt.with_timezone(&Utc))
}

fn required<'a>(record: &'a RawRecord, index: usize, what: &str) -> Result<&'a str> {
    match record.get(index) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(PipelineError::invalid_record(
            record.line,
            format!("empty {}", what),
        )),
    }
}

//! SessionAccumulator and SessionLog
//!
//! Groups parsed events into per-case sessions while draining a record
//! stream, then hands the completed sessions over as a [`SessionLog`].

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::config::{RecordPolicy, SessionOrdering};
use crate::errors::Result;
use crate::features::event_parsing::parse_event;
use crate::features::record_source::RawRecord;
use crate::shared::models::{Event, Session};

/// Counters collected while draining a record stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccumulationStats {
    /// Data records pulled from the source (header excluded)
    pub total_records: u64,
    /// Records that became events
    pub accepted_records: u64,
    /// Records dropped under the permissive policy
    pub skipped_records: u64,
    /// Reading stopped at `max_records`
    pub truncated: bool,
}

/// Groups events by case id, preserving arrival order per case
#[derive(Debug, Default)]
pub struct SessionAccumulator {
    sessions: AHashMap<String, Session>,
    stats: AccumulationStats,
}

impl SessionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event to its case's session (created on first sight)
    pub fn push(&mut self, event: Event) {
        self.stats.accepted_records += 1;
        match self.sessions.get_mut(event.case_id.as_str()) {
            Some(session) => session.push(event),
            None => {
                self.sessions
                    .insert(event.case_id.clone(), Session::start(event));
            }
        }
    }

    /// Consume a record stream exactly once
    ///
    /// Stream-level errors (`SourceUnavailable`, `MalformedLine`) are always
    /// fatal. Record-level errors are fatal under [`RecordPolicy::Strict`]
    /// and skipped with a warning under [`RecordPolicy::Permissive`].
    pub fn drain<I>(
        &mut self,
        records: I,
        policy: RecordPolicy,
        max_records: Option<usize>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = Result<RawRecord>>,
    {
        for item in records {
            let record = item?;

            if let Some(cap) = max_records {
                if self.stats.total_records >= cap as u64 {
                    tracing::warn!(
                        max_records = cap,
                        line = record.line,
                        "record cap reached, ignoring the rest of the log"
                    );
                    self.stats.truncated = true;
                    break;
                }
            }
            self.stats.total_records += 1;

            match parse_event(&record) {
                Ok(event) => self.push(event),
                Err(err) if policy == RecordPolicy::Permissive && err.is_record_error() => {
                    tracing::warn!(line = record.line, error = %err, "skipping invalid record");
                    self.stats.skipped_records += 1;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }

    pub fn stats(&self) -> AccumulationStats {
        self.stats
    }

    /// Close the accumulator and expose the completed sessions
    pub fn finish(self, ordering: SessionOrdering) -> SessionLog {
        let mut sessions = self.sessions;
        if ordering == SessionOrdering::Timestamp {
            for session in sessions.values_mut() {
                session.sort_by_timestamp();
            }
        }
        SessionLog {
            sessions,
            stats: self.stats,
        }
    }
}

/// Completed case id → session mapping
///
/// Iteration order is unspecified.
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    sessions: AHashMap<String, Session>,
    stats: AccumulationStats,
}

impl SessionLog {
    /// Build directly from sessions (tests, replays)
    ///
    /// Sessions sharing a case id are merged in iteration order.
    pub fn from_sessions(sessions: impl IntoIterator<Item = Session>) -> Self {
        let mut log = Self::default();
        for session in sessions {
            log.stats.accepted_records += session.len() as u64;
            log.stats.total_records += session.len() as u64;
            match log.sessions.get_mut(session.case_id.as_str()) {
                Some(existing) => existing.append(session),
                None => {
                    log.sessions.insert(session.case_id.clone(), session);
                }
            }
        }
        log
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, case_id: &str) -> Option<&Session> {
        self.sessions.get(case_id)
    }

    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.sessions.values()
    }

    pub fn event_count(&self) -> usize {
        self.sessions.values().map(Session::len).sum()
    }

    pub fn stats(&self) -> AccumulationStats {
        self.stats
    }
}

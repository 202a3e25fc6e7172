//! Graph Aggregator
//!
//! Activities are interned into an arena (`label → u32`), and every
//! per-pair counter lives under a dense `u64` key built from the two
//! arena indices, so no string is concatenated or rehashed per event.

use ahash::AHashMap;
use std::sync::Arc;

use crate::features::process_graph::domain::{ProcessEdge, ProcessGraph, ProcessNode, END_ID, START_ID};
use crate::features::session::SessionLog;
use crate::shared::models::Session;

type ActivityId = u32;

#[inline]
fn pair_key(from: ActivityId, to: ActivityId) -> u64 {
    ((from as u64) << 32) | to as u64
}

#[inline]
fn split_key(key: u64) -> (ActivityId, ActivityId) {
    ((key >> 32) as ActivityId, key as ActivityId)
}

/// Count plus running mean of the durations seen for one ordered pair
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitionStats {
    pub count: u64,
    pub avg_secs: f64,
}

impl TransitionStats {
    /// `avg = (avg × (count − 1) + duration) / count`
    pub fn record(&mut self, duration_secs: f64) {
        self.count += 1;
        self.avg_secs =
            (self.avg_secs * (self.count - 1) as f64 + duration_secs) / self.count as f64;
    }

    /// Count-weighted mean of two partial results
    pub fn combine(self, other: Self) -> Self {
        let count = self.count + other.count;
        if count == 0 {
            return Self::default();
        }
        Self {
            count,
            avg_secs: (self.avg_secs * self.count as f64 + other.avg_secs * other.count as f64)
                / count as f64,
        }
    }
}

#[derive(Debug, Clone)]
struct ActivitySlot {
    label: Arc<str>,
    visits: u64,
}

/// Mutable accumulation state for one build (or one parallel chunk)
#[derive(Debug, Clone, Default)]
pub struct GraphAggregator {
    index: AHashMap<Arc<str>, ActivityId>,
    activities: Vec<ActivitySlot>,
    transitions: AHashMap<u64, TransitionStats>,
    starts: AHashMap<ActivityId, u64>,
    ends: AHashMap<ActivityId, u64>,
    session_count: u64,
}

impl GraphAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, label: &str) -> ActivityId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.activities.len() as ActivityId;
        let label: Arc<str> = Arc::from(label);
        self.activities.push(ActivitySlot {
            label: label.clone(),
            visits: 0,
        });
        self.index.insert(label, id);
        id
    }

    /// Pass 1: node visits and directly-follows transitions of one session
    pub fn accumulate_session(&mut self, session: &Session) {
        let mut prev: Option<ActivityId> = None;
        for (i, event) in session.events().iter().enumerate() {
            let id = self.intern(&event.activity);
            self.activities[id as usize].visits += 1;

            if let Some(from) = prev {
                let duration = event.seconds_since(&session.events()[i - 1]);
                self.transitions
                    .entry(pair_key(from, id))
                    .or_default()
                    .record(duration);
            }
            prev = Some(id);
        }
    }

    /// Pass 2: `start → first` and `last → end` for every non-empty session
    pub fn accumulate_boundaries<'a>(&mut self, sessions: impl IntoIterator<Item = &'a Session>) {
        for session in sessions {
            let (Some(first), Some(last)) = (session.first(), session.last()) else {
                continue;
            };
            let first = self.intern(&first.activity);
            let last = self.intern(&last.activity);
            *self.starts.entry(first).or_default() += 1;
            *self.ends.entry(last).or_default() += 1;
            self.session_count += 1;
        }
    }

    /// Fold another aggregator's counters into this one
    pub fn merge(&mut self, other: GraphAggregator) {
        let remap: Vec<ActivityId> = other
            .activities
            .iter()
            .map(|slot| {
                let id = self.intern(&slot.label);
                self.activities[id as usize].visits += slot.visits;
                id
            })
            .collect();

        for (key, stats) in other.transitions {
            let (from, to) = split_key(key);
            let key = pair_key(remap[from as usize], remap[to as usize]);
            let slot = self.transitions.entry(key).or_default();
            *slot = slot.combine(stats);
        }
        for (id, count) in other.starts {
            *self.starts.entry(remap[id as usize]).or_default() += count;
        }
        for (id, count) in other.ends {
            *self.ends.entry(remap[id as usize]).or_default() += count;
        }
        self.session_count += other.session_count;
    }

    pub fn session_count(&self) -> u64 {
        self.session_count
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Freeze into a [`ProcessGraph`]; labels are formatted here, once
    pub fn finish(self) -> ProcessGraph {
        let label = |id: ActivityId| self.activities[id as usize].label.to_string();

        let boundary_nodes = if self.session_count > 0 { 2 } else { 0 };
        let mut nodes = Vec::with_capacity(self.activities.len() + boundary_nodes);
        nodes.extend(
            self.activities
                .iter()
                .map(|slot| ProcessNode::activity(slot.label.as_ref(), slot.visits)),
        );
        if self.session_count > 0 {
            nodes.push(ProcessNode::start(self.session_count));
            nodes.push(ProcessNode::end(self.session_count));
        }

        let mut edges =
            Vec::with_capacity(self.transitions.len() + self.starts.len() + self.ends.len());
        edges.extend(self.transitions.iter().map(|(&key, stats)| {
            let (from, to) = split_key(key);
            ProcessEdge::transition(label(from), label(to), stats.count, stats.avg_secs)
        }));
        edges.extend(
            self.starts
                .iter()
                .map(|(&id, &count)| ProcessEdge::boundary(START_ID, label(id), count)),
        );
        edges.extend(
            self.ends
                .iter()
                .map(|(&id, &count)| ProcessEdge::boundary(label(id), END_ID, count)),
        );

        ProcessGraph::new(nodes, edges)
    }
}

/// Sequential two-pass aggregation of a completed session log
pub fn aggregate(log: &SessionLog) -> ProcessGraph {
    let mut aggregator = GraphAggregator::new();
    for session in log.sessions() {
        aggregator.accumulate_session(session);
    }
    aggregator.accumulate_boundaries(log.sessions());
    aggregator.finish()
}

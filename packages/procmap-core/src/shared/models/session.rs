//! Session: the ordered events of one case

use serde::{Deserialize, Serialize};

use super::Event;

/// Ordered events sharing one case id
///
/// Never empty: a session only comes into existence with its first event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub case_id: String,
    events: Vec<Event>,
}

impl Session {
    /// Start a session from its first event
    pub fn start(first: Event) -> Self {
        Self {
            case_id: first.case_id.clone(),
            events: vec![first],
        }
    }

    /// Append in arrival order
    pub fn push(&mut self, event: Event) {
        debug_assert_eq!(event.case_id, self.case_id);
        self.events.push(event);
    }

    /// Move all of `other`'s events onto the end of this session
    pub fn append(&mut self, mut other: Session) {
        debug_assert_eq!(other.case_id, self.case_id);
        self.events.append(&mut other.events);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn first(&self) -> Option<&Event> {
        self.events.first()
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    /// Consecutive `(prev, curr)` pairs
    pub fn transitions(&self) -> impl Iterator<Item = (&Event, &Event)> {
        self.events.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Stable sort by timestamp; equal instants keep arrival order
    pub fn sort_by_timestamp(&mut self) {
        self.events.sort_by_key(|e| e.timestamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(secs: i64, activity: &str) -> Event {
        Event::new("c1", Utc.timestamp_opt(secs, 0).unwrap(), activity)
    }

    #[test]
    fn test_session_starts_non_empty() {
        let session = Session::start(event(0, "A"));
        assert_eq!(session.case_id, "c1");
        assert_eq!(session.len(), 1);
        assert!(!session.is_empty());
        assert_eq!(session.transitions().count(), 0);
    }

    #[test]
    fn test_transitions_follow_arrival_order() {
        let mut session = Session::start(event(10, "A"));
        session.push(event(5, "B"));
        session.push(event(20, "C"));

        let pairs: Vec<_> = session
            .transitions()
            .map(|(a, b)| (a.activity.as_str(), b.activity.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "B"), ("B", "C")]);
    }

    #[test]
    fn test_sort_by_timestamp_is_stable() {
        let mut session = Session::start(event(10, "A"));
        session.push(event(5, "B"));
        session.push(event(10, "C"));
        session.sort_by_timestamp();

        let order: Vec<_> = session.events().iter().map(|e| e.activity.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(session.first().unwrap().activity, "B");
        assert_eq!(session.last().unwrap().activity, "C");
    }

    #[test]
    fn test_append_keeps_both_orders() {
        let mut session = Session::start(event(0, "A"));
        let mut tail = Session::start(event(30, "C"));
        tail.push(event(20, "B"));
        session.append(tail);

        let order: Vec<_> = session.events().iter().map(|e| e.activity.as_str()).collect();
        assert_eq!(order, vec!["A", "C", "B"]);
    }
}

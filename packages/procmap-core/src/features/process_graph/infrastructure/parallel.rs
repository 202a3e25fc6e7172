// Parallel Aggregation (Rayon)
//
// Whole sessions are the unit of work: each chunk gets its own
// GraphAggregator (both passes), partial aggregators are then merged.
// Means combine by count weighting, so chunking does not change results
// beyond float rounding.

use rayon::prelude::*;

use super::aggregator::GraphAggregator;
use crate::features::process_graph::domain::ProcessGraph;
use crate::features::session::SessionLog;
use crate::shared::models::Session;

/// Aggregate `log` across the rayon pool, `chunk_size` sessions per task
pub fn aggregate_parallel(log: &SessionLog, chunk_size: usize) -> ProcessGraph {
    let sessions: Vec<&Session> = log.sessions().collect();
    let chunk_size = chunk_size.max(1);

    sessions
        .par_chunks(chunk_size)
        .fold(GraphAggregator::new, |mut aggregator, chunk| {
            for session in chunk {
                aggregator.accumulate_session(session);
            }
            aggregator.accumulate_boundaries(chunk.iter().copied());
            aggregator
        })
        .reduce(GraphAggregator::new, |mut a, b| {
            a.merge(b);
            a
        })
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::process_graph::infrastructure::aggregator::aggregate;
    use crate::shared::models::Event;
    use chrono::{TimeZone, Utc};

    fn log(cases: usize) -> SessionLog {
        SessionLog::from_sessions((0..cases).map(|c| {
            let labels = ["Receive", "Check", "Approve", "Reject", "Archive"];
            let case = format!("case-{}", c);
            let len = 1 + c % 5;
            let mut session = Session::start(Event::new(
                case.as_str(),
                Utc.timestamp_opt(0, 0).unwrap(),
                labels[c % labels.len()],
            ));
            for step in 1..len {
                session.push(Event::new(
                    case.as_str(),
                    Utc.timestamp_opt((step * (c + 3)) as i64, 0).unwrap(),
                    labels[(c + step) % labels.len()],
                ));
            }
            session
        }))
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let log = log(500);
        let seq = aggregate(&log).sorted();

        for chunk in [1, 7, 64, 10_000] {
            let par = aggregate_parallel(&log, chunk).sorted();
            assert_eq!(seq.nodes, par.nodes, "chunk size {}", chunk);
            assert_eq!(seq.edges.len(), par.edges.len());
            for (a, b) in seq.edges.iter().zip(&par.edges) {
                assert_eq!((&a.from, &a.to, a.count), (&b.from, &b.to, b.count));
                assert!((a.avg_duration_secs - b.avg_duration_secs).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_parallel_empty_log() {
        assert!(aggregate_parallel(&SessionLog::default(), 16).is_empty());
    }
}

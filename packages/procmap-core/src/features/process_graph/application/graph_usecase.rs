//! Process Graph UseCase

use crate::config::MiningConfig;
use crate::features::process_graph::domain::ProcessGraph;
use crate::features::process_graph::infrastructure::aggregate;
use crate::features::session::SessionLog;

/// Completed sessions → directly-follows graph
pub trait ProcessGraphUseCase: Send + Sync {
    fn build_graph(&self, log: &SessionLog) -> ProcessGraph;
}

/// Picks the sequential or rayon path from configuration
#[derive(Debug, Clone)]
pub struct ProcessGraphUseCaseImpl {
    parallel: bool,
    chunk_size: usize,
}

impl ProcessGraphUseCaseImpl {
    pub fn new() -> Self {
        Self::from_config(&MiningConfig::default())
    }

    pub fn from_config(config: &MiningConfig) -> Self {
        Self {
            parallel: config.parallel,
            chunk_size: config.parallel_chunk_size,
        }
    }

    #[cfg(feature = "parallel")]
    fn build_parallel(&self, log: &SessionLog) -> ProcessGraph {
        crate::features::process_graph::infrastructure::aggregate_parallel(log, self.chunk_size)
    }

    #[cfg(not(feature = "parallel"))]
    fn build_parallel(&self, log: &SessionLog) -> ProcessGraph {
        tracing::debug!(
            chunk_size = self.chunk_size,
            "built without the `parallel` feature, aggregating sequentially"
        );
        aggregate(log)
    }
}

impl ProcessGraphUseCase for ProcessGraphUseCaseImpl {
    fn build_graph(&self, log: &SessionLog) -> ProcessGraph {
        // Small logs never pay for the fan-out
        if self.parallel && log.len() > self.chunk_size {
            self.build_parallel(log)
        } else {
            aggregate(log)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Event, Session};
    use chrono::{TimeZone, Utc};

    fn log() -> SessionLog {
        SessionLog::from_sessions((0..20).map(|i| {
            let case = format!("c{}", i);
            let mut s = Session::start(Event::new(case.as_str(), Utc.timestamp_opt(0, 0).unwrap(), "A"));
            s.push(Event::new(case.as_str(), Utc.timestamp_opt(i, 0).unwrap(), "B"));
            s
        }))
    }

    #[test]
    fn test_sequential_and_parallel_usecase_agree() {
        let seq = ProcessGraphUseCaseImpl::new().build_graph(&log()).sorted();
        let config = MiningConfig::default()
            .with_parallel(true)
            .with_parallel_chunk_size(3);
        let par = ProcessGraphUseCaseImpl::from_config(&config)
            .build_graph(&log())
            .sorted();

        assert_eq!(seq.nodes, par.nodes);
        let (a, b) = (seq.edge("A", "B").unwrap(), par.edge("A", "B").unwrap());
        assert_eq!(a.count, 20);
        assert_eq!(b.count, 20);
        assert!((a.avg_duration_secs - 9.5).abs() < 1e-9);
        assert!((b.avg_duration_secs - 9.5).abs() < 1e-9);
    }
}

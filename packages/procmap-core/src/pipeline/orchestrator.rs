//! GraphPipeline: source → events → sessions → graph

use std::time::Instant;

use crate::config::{ConfigResult, MiningConfig, DEFAULT_DELIMITER};
use crate::errors::Result;
use crate::features::process_graph::{ProcessGraphUseCase, ProcessGraphUseCaseImpl};
use crate::features::record_source::LogSource;
use crate::features::session::SessionAccumulator;

use super::result::{BuildOutcome, BuildReport};

/// Runs one full build per call
///
/// Holds validated configuration only; every [`GraphPipeline::run`]
/// starts from empty accumulation state, so repeated runs over the same
/// input are identical.
#[derive(Debug, Clone)]
pub struct GraphPipeline {
    config: MiningConfig,
    delimiter: u8,
}

impl Default for GraphPipeline {
    fn default() -> Self {
        Self {
            config: MiningConfig::default(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl GraphPipeline {
    /// Rejects configuration that fails [`MiningConfig::validate`]
    pub fn new(config: MiningConfig) -> ConfigResult<Self> {
        config.validate()?;
        let delimiter = config.delimiter_byte()?;
        Ok(Self { config, delimiter })
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    pub fn run(&self, source: LogSource) -> Result<BuildOutcome> {
        let start = Instant::now();
        let source_name = source.name();

        let records = source.open(self.delimiter)?;

        let mut accumulator = SessionAccumulator::new();
        accumulator.drain(
            records,
            self.config.record_policy,
            self.config.max_records,
        )?;
        let log = accumulator.finish(self.config.session_ordering);
        let read_elapsed = start.elapsed();
        tracing::debug!(
            source = %source_name,
            sessions = log.len(),
            events = log.event_count(),
            elapsed_ms = read_elapsed.as_millis() as u64,
            "sessions accumulated"
        );

        let aggregate_start = Instant::now();
        let graph = ProcessGraphUseCaseImpl::from_config(&self.config).build_graph(&log);
        tracing::debug!(
            parallel = self.config.parallel,
            elapsed_ms = aggregate_start.elapsed().as_millis() as u64,
            "graph aggregated"
        );

        let report = BuildReport::new(log.stats(), log.len(), &graph, start.elapsed());
        tracing::info!(
            source = %source_name,
            records = report.total_records,
            skipped = report.skipped_records,
            sessions = report.session_count,
            nodes = report.node_count,
            edges = report.edge_count,
            truncated = report.truncated,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "process graph built"
        );

        Ok(BuildOutcome { graph, report })
    }
}

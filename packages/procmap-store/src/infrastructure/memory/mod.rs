//! In-memory GraphStore
//!
//! Writers serialize on `build_lock`, which also carries the generation
//! counter. Readers only touch `current` long enough to clone an `Arc`.

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use procmap_core::{BuildReport, GraphPipeline, LogSource, MiningConfig, ProcessGraph};

use crate::domain::{GraphSnapshot, GraphStore};
use crate::error::{Result, StoreError};

pub struct InMemoryGraphStore {
    pipeline: GraphPipeline,
    build_lock: Mutex<u64>,
    current: RwLock<Option<Arc<GraphSnapshot>>>,
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self::from_pipeline(GraphPipeline::default())
    }

    /// Store whose builds run with `config`
    pub fn with_config(config: MiningConfig) -> Result<Self> {
        Ok(Self::from_pipeline(GraphPipeline::new(config)?))
    }

    fn from_pipeline(pipeline: GraphPipeline) -> Self {
        Self {
            pipeline,
            build_lock: Mutex::new(0),
            current: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &MiningConfig {
        self.pipeline.config()
    }

    pub fn is_built(&self) -> bool {
        self.current.read().is_some()
    }

    /// Current graph as pretty JSON, sorted for stable output
    pub fn to_json(&self) -> Result<String> {
        let graph = self.fetch()?;
        Ok(serde_json::to_string_pretty(&graph.sorted())?)
    }
}

impl Default for InMemoryGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryGraphStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryGraphStore")
            .field("config", self.pipeline.config())
            .field("built", &self.is_built())
            .finish()
    }
}

impl GraphStore for InMemoryGraphStore {
    fn build(&self, source: LogSource) -> Result<BuildReport> {
        let mut generation = self.build_lock.lock();
        let source_name = source.name();

        let outcome = self.pipeline.run(source).map_err(|err| {
            tracing::warn!(source = %source_name, error = %err, "build failed, keeping previous graph");
            StoreError::from(err)
        })?;

        *generation += 1;
        let snapshot = GraphSnapshot {
            generation: *generation,
            built_at: Utc::now(),
            source: source_name,
            report: outcome.report,
            graph: Arc::new(outcome.graph),
        };
        *self.current.write() = Some(Arc::new(snapshot));

        tracing::info!(generation = *generation, "graph published");
        Ok(outcome.report)
    }

    fn fetch(&self) -> Result<Arc<ProcessGraph>> {
        self.snapshot().map(|snapshot| Arc::clone(&snapshot.graph))
    }

    fn snapshot(&self) -> Result<Arc<GraphSnapshot>> {
        self.current
            .read()
            .as_ref()
            .map(Arc::clone)
            .ok_or_else(StoreError::graph_not_built)
    }

    fn clear(&self) {
        if self.current.write().take().is_some() {
            tracing::info!("graph cleared");
        }
    }
}

// Process Graph - Sessions to Directly-Follows Graph
//
// Two passes over completed sessions:
//   1. visits + transitions (count, running mean duration)
//   2. start/end boundary edges
//
// ## Architecture
// - Domain: immutable output (ProcessGraph, ProcessNode, ProcessEdge)
// - Infrastructure: arena aggregator, rayon chunked merge
// - Application: use case choosing the sequential or parallel path

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{ProcessGraphUseCase, ProcessGraphUseCaseImpl};

pub use domain::{
    EdgeKind, GraphStats, LineStyle, NodeColor, NodeKind, ProcessEdge, ProcessGraph, ProcessNode,
    END_ID, END_LABEL, START_ID, START_LABEL,
};

pub use infrastructure::{aggregate, GraphAggregator, TransitionStats};

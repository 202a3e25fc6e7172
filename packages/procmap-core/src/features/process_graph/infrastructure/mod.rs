// Process Graph Infrastructure
//
// Arena-backed aggregator plus the optional rayon fan-out.

pub mod aggregator;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use aggregator::{aggregate, GraphAggregator, TransitionStats};
#[cfg(feature = "parallel")]
pub use parallel::aggregate_parallel;

//! Session Accumulator
//!
//! Single pass over the record stream: parse, apply the record policy,
//! group by case id. Sessions are only observable through the
//! [`SessionLog`] returned by [`SessionAccumulator::finish`], i.e. after
//! the stream is fully drained.

pub mod accumulator;

pub use accumulator::{AccumulationStats, SessionAccumulator, SessionLog};

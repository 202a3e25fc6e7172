//! Infrastructure layer - Storage adapters

pub mod memory;

pub use memory::InMemoryGraphStore;

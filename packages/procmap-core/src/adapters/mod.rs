//! Presentation adapters
//!
//! Read-only views of a [`ProcessGraph`](crate::ProcessGraph) for
//! external renderers. Neither adapter alters counts or labels.

pub mod cytoscape;
pub mod dot;

pub use cytoscape::{to_cytoscape, CytoscapeGraph};
pub use dot::{to_dot, to_dot_with, DotLabelMode};

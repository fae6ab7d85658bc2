//! Building blocks shared by the graph types and the algorithms.

pub mod base;
pub mod error;
pub mod marker;
pub mod weight;

pub use base::{Edge, EdgeSet, GraphBase, Label, Neighbors, VertexSet};
pub use weight::Weight;

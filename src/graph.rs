//! Graph data structures.
//!
//! Both graphs keep their vertices, adjacency sequences and edge costs in
//! insertion order, so every enumeration is deterministic. Edge identity is
//! the `(origin, destination)` key of the cost map; the weight is a mutable
//! payload of that key.

pub mod directed;
mod shared;
pub mod undirected;

pub use directed::DiGraph;
pub use shared::{Adjacent, Edges, Vertices};
pub use undirected::UnGraph;

//! A small graph algorithms engine.
//!
//! The crate provides two graph data structures, [`DiGraph`] and [`UnGraph`],
//! which keep vertices, adjacency and edge costs in insertion order, and a
//! handful of classical algorithms built on top of them:
//!
//! * unweighted shortest paths ([`algo::shortest_paths`]),
//! * all-pairs lowest cost walks ([`algo::all_pairs`]),
//! * topological sorting ([`algo::toposort`]) and critical path scheduling
//!   ([`algo::schedule`]),
//! * vertex cover approximations ([`algo::vertex_cover`]).
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::shortest_paths::lowest_length_path, DiGraph};
//!
//! let mut graph = DiGraph::new();
//! graph.extend_with_edges([(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
//!
//! assert_eq!(lowest_length_path(&graph, &0, &3), vec![0, 1, 2, 3]);
//! ```

pub mod algo;
pub mod common;
pub mod core;
pub mod format;
pub mod graph;
pub mod infra;

#[cfg(feature = "random")]
pub mod generate;

pub use crate::{
    core::{error::GraphError, Edge},
    graph::{DiGraph, UnGraph},
};

pub mod prelude {
    #[doc(hidden)]
    pub use crate::core::{EdgeSet, GraphBase, Neighbors, VertexSet};
}

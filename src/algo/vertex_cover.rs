//! Approximate a [vertex cover] of an undirected graph.
//!
//! A vertex cover is a set of vertices such that every edge has at least one
//! endpoint in it. Finding a minimum one is NP-hard, the algorithms here are
//! fast heuristics. Neither of them guarantees a minimum cover.
//!
//! See available parameters [here](VertexCoverBuilder#implementations).
//!
//! [vertex cover]: https://en.wikipedia.org/wiki/Vertex_cover
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::VertexCover, UnGraph};
//!
//! let mut graph = UnGraph::new();
//! graph
//!     .extend_with_edges([(0, 1, ()), (0, 2, ()), (0, 3, ()), (3, 4, ())])
//!     .unwrap();
//!
//! let cover = VertexCover::on(&graph).max_degree().run();
//!
//! assert!(cover.covers(&graph));
//! assert_eq!(cover.iter().collect::<Vec<_>>(), vec![&0, &3]);
//! ```

use crate::{
    common::FxIndexSet,
    core::{EdgeSet, GraphBase, Label},
};

mod builder;
mod endpoint_pair;
mod max_degree;

pub use builder::VertexCoverBuilder;

/// A set of vertices touching every edge of the graph it was computed on.
///
/// The vertices are kept in the order they were added to the cover.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct VertexCover<V> {
    vertices: FxIndexSet<V>,
}

impl<V: Label> VertexCover<V> {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// Returns whether every edge of `graph` has an endpoint in this set.
    pub fn covers<G>(&self, graph: &G) -> bool
    where
        G: EdgeSet + GraphBase<Vertex = V>,
    {
        graph
            .edges()
            .all(|edge| self.contains(edge.origin) || self.contains(edge.destination))
    }
}

impl<V> IntoIterator for VertexCover<V> {
    type Item = V;
    type IntoIter = indexmap::set::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

/// Algorithm for [`VertexCover`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// Repeatedly takes both endpoints of an edge that is not covered yet.
    ///
    /// Vertices are visited in the enumeration order. For each vertex not in
    /// the cover, its first neighbor not in the cover is looked up and if
    /// found, both are added. The edges picked this way form a matching, so
    /// the cover is at most twice as large as a minimum one.
    EndpointPair,

    /// Greedily takes the vertex covering the most edges not covered yet.
    ///
    /// Ties are broken in favor of the vertex that comes first in the
    /// enumeration order. There is no constant approximation guarantee, but
    /// the cover tends to be small in practice.
    MaxDegree,
}

mod algo {
    use super::Algo;

    #[derive(Debug)]
    pub struct AnyAlgo;

    #[derive(Debug)]
    pub struct SpecificAlgo(pub Algo);

    #[derive(Debug)]
    pub struct EndpointPair;

    #[derive(Debug)]
    pub struct MaxDegree;
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{graph::UnGraph, infra::proptest::graph_undirected};

    use super::*;

    fn create_triangle() -> UnGraph<u32, i32> {
        let mut graph = UnGraph::new();
        graph
            .extend_with_edges([(0, 1, 1), (1, 2, 1), (0, 2, 1)])
            .unwrap();
        graph
    }

    fn create_star() -> UnGraph<u32, ()> {
        let mut graph = UnGraph::new();
        graph
            .extend_with_edges([(0, 1, ()), (0, 2, ()), (0, 3, ()), (0, 4, ())])
            .unwrap();
        graph
    }

    fn create_path() -> UnGraph<u32, ()> {
        let mut graph = UnGraph::new();
        graph
            .extend_with_edges([(0, 1, ()), (1, 2, ()), (2, 3, ())])
            .unwrap();
        graph
    }

    #[test]
    fn endpoint_pair_triangle() {
        let graph = create_triangle();
        let cover = VertexCover::on(&graph).endpoint_pair().run();

        assert_eq!(cover.len(), 2);
        assert!(cover.covers(&graph));
        assert_eq!(cover.into_iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn max_degree_triangle() {
        let graph = create_triangle();
        let cover = VertexCover::on(&graph).max_degree().run();

        assert_eq!(cover.len(), 2);
        assert!(cover.covers(&graph));
        assert_eq!(cover.into_iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn cloned_cover_is_independent() {
        let graph = create_triangle();
        let cover = VertexCover::on(&graph).run();
        let copy = cover.clone();

        assert_eq!(format!("{copy:?}"), format!("{cover:?}"));
        assert_eq!(
            copy.into_iter().collect::<Vec<_>>(),
            cover.iter().copied().collect::<Vec<_>>()
        );
    }

    #[test]
    fn endpoint_pair_star() {
        let graph = create_star();
        let cover = VertexCover::on(&graph).endpoint_pair().run();

        assert_eq!(cover.into_iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn max_degree_star() {
        let graph = create_star();
        let cover = VertexCover::on(&graph).max_degree().run();

        assert_eq!(cover.into_iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn endpoint_pair_path() {
        let graph = create_path();
        let cover = VertexCover::on(&graph).endpoint_pair().run();

        assert_eq!(cover.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn max_degree_path() {
        let graph = create_path();
        let cover = VertexCover::on(&graph).run();

        assert_eq!(cover.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn self_loop() {
        let mut graph = UnGraph::new();
        graph
            .extend_with_edges([(0, 0, ()), (0, 1, ()), (2, 2, ())])
            .unwrap();

        for algo in [Algo::EndpointPair, Algo::MaxDegree] {
            let cover = VertexCover::on(&graph).using(algo).run();
            assert!(cover.covers(&graph), "{algo:?}");
            assert!(cover.contains(&2), "{algo:?}");
        }

        let cover = VertexCover::on(&graph).max_degree().run();
        assert_eq!(cover.into_iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn isolated_vertices_skipped() {
        let mut graph = create_path();
        graph.add_vertex(7).unwrap();

        for algo in [Algo::EndpointPair, Algo::MaxDegree] {
            let cover = VertexCover::on(&graph).using(algo).run();
            assert!(!cover.contains(&7), "{algo:?}");
        }
    }

    #[test]
    fn empty_graph() {
        let graph = UnGraph::<u32, ()>::new();

        assert!(VertexCover::on(&graph).endpoint_pair().run().is_empty());
        assert!(VertexCover::on(&graph).max_degree().run().is_empty());
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_vertex_cover_endpoint_pair(graph in graph_undirected(any::<()>())) {
            let cover = VertexCover::on(&graph).endpoint_pair().run();

            prop_assert!(cover.covers(&graph));
            // Without self-loops the cover consists of disjoint edges.
            prop_assert_eq!(cover.len() % 2, 0);
            prop_assert!(cover.len() <= 2 * graph.edge_count());
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_vertex_cover_max_degree(graph in graph_undirected(any::<()>()).allow_loops()) {
            let cover = VertexCover::on(&graph).max_degree().run();

            prop_assert!(cover.covers(&graph));
            prop_assert!(cover.len() <= graph.edge_count());
            prop_assert!(cover.iter().all(|v| graph.degree(v).unwrap() > 0));
        }
    }
}

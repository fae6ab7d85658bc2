//! Find a [topologically sorted] collection of vertices on a [directed acyclic
//! graph] (DAG).
//!
//! See available parameters [here](TopoSortBuilder#implementations).
//!
//! The order is produced by [Kahn's algorithm] with a FIFO queue seeded by the
//! vertices without predecessors in the graph's enumeration order. Hence the
//! order is deterministic for a given graph.
//!
//! [topologically sorted]: https://en.wikipedia.org/wiki/Topological_sorting
//! [directed acyclic graph]:
//!     https://en.wikipedia.org/wiki/Directed_acyclic_graph
//! [Kahn's algorithm]:
//!     https://en.wikipedia.org/wiki/Topological_sorting#Kahn's_algorithm
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::TopoSort, DiGraph};
//!
//! let mut dependency_tree = DiGraph::new();
//!
//! // Edge direction in "must be compiled before" relation.
//! dependency_tree
//!     .extend_with_edges([
//!         ("cargo_credential", "cargo", ()),
//!         ("serde", "cargo_credential", ()),
//!         ("serde_json", "cargo_credential", ()),
//!         ("serde", "serde_json", ()),
//!         ("time", "cargo_credential", ()),
//!         ("libc", "time", ()),
//!         ("serde", "time", ()),
//!         ("cargo_util", "cargo", ()),
//!         ("libc", "cargo_util", ()),
//!     ])
//!     .unwrap();
//!
//! for package in TopoSort::on(&dependency_tree).run().map(Result::unwrap) {
//!     // Compile package
//! }
//! ```

use thiserror::Error;

use crate::core::{marker::Directed, GraphBase, Neighbors, VertexSet};

mod builder;
mod kahn;

pub use builder::TopoSortBuilder;
use kahn::KahnIter;

/// Topologically sorted collection of vertices on a directed acyclic graph
/// (DAG).
///
/// See [module](self) documentation for more details and example.
///
/// This type implements the [`Iterator`] trait and is **lazy**. If you want
/// the resulting [`Vec`] of the vertices, use
/// [`into_vec`](TopoSort::into_vec).
pub struct TopoSort<'a, G>
where
    G: GraphBase,
{
    inner: KahnIter<'a, G>,
}

impl<'a, G> Iterator for TopoSort<'a, G>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    type Item = Result<&'a G::Vertex, Error<G::Vertex>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, G> TopoSort<'a, G>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    /// Returns the topologically sorted collection of vertices as [`Vec`],
    /// `Err` if a cycle is detected.
    pub fn into_vec(self) -> Result<Vec<G::Vertex>, Error<G::Vertex>> {
        self.map(|vertex| vertex.cloned()).collect()
    }
}

/// The error encountered during a [`TopoSort`] run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<V> {
    /// The graph contains a cycle.
    ///
    /// Graphs with cycles don't have a topological order. The vertex lies on
    /// a cycle.
    #[error("graph contains cycle through vertex {vertex:?}")]
    Cycle { vertex: V },
}

/// Returns the vertices in a topological order, or an empty vector if the
/// graph contains a cycle.
///
/// A partial order is never returned. Use [`TopoSort`] to learn which vertex
/// lies on a cycle.
///
/// # Examples
///
/// ```
/// use grafo::{algo::toposort::topo_sort, DiGraph};
///
/// let mut graph = DiGraph::new();
/// graph.extend_with_edges([(2, 0, ()), (0, 1, ())]).unwrap();
///
/// assert_eq!(topo_sort(&graph), vec![2, 0, 1]);
///
/// graph.add_edge(1, 2, ()).unwrap();
/// assert!(topo_sort(&graph).is_empty());
/// ```
pub fn topo_sort<G>(graph: &G) -> Vec<G::Vertex>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    TopoSort::on(graph).run().into_vec().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    use super::*;

    use crate::{core::EdgeSet, graph::DiGraph, infra::proptest::graph_directed};

    fn assert_valid<G>(sorted: Result<Vec<G::Vertex>, Error<G::Vertex>>, graph: &G)
    where
        G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet + EdgeSet,
    {
        let has_cycle = has_cycle(graph);

        match (sorted, has_cycle) {
            (Ok(sorted), false) => {
                assert_eq!(
                    sorted.len(),
                    graph.vertex_count(),
                    "sorted sequence length is not equal to vertex count"
                );

                let map = sorted
                    .iter()
                    .enumerate()
                    .map(|(k, v)| (v, k))
                    .collect::<FxHashMap<_, _>>();

                for edge in graph.edges() {
                    let i = map.get(edge.origin).unwrap();
                    let j = map.get(edge.destination).unwrap();

                    assert!(
                        i < j,
                        "invalid topological order for {:?} -> {:?}",
                        edge.origin,
                        edge.destination
                    );
                }
            }
            (Ok(_), true) => panic!("algorithm did not detect cycle"),
            (Err(error), false) => panic!("algorithm incorrectly returned error: {error:?}"),
            (Err(Error::Cycle { vertex }), true) => {
                assert!(
                    reachable(graph, &vertex, &vertex),
                    "reported vertex {vertex:?} is not on a cycle"
                );
            }
        }
    }

    fn has_cycle<G>(graph: &G) -> bool
    where
        G: Neighbors + VertexSet,
    {
        graph.vertices().any(|v| reachable(graph, v, v))
    }

    // Whether `to` is reachable from `from` by a non-empty walk.
    fn reachable<G>(graph: &G, from: &G::Vertex, to: &G::Vertex) -> bool
    where
        G: Neighbors + VertexSet,
    {
        use crate::core::marker::Direction;

        let mut stack = graph
            .neighbors_directed(from, Direction::Outgoing)
            .collect::<Vec<_>>();
        let mut visited = rustc_hash::FxHashSet::default();

        while let Some(v) = stack.pop() {
            if v == to {
                return true;
            }

            if visited.insert(v) {
                stack.extend(graph.neighbors_directed(v, Direction::Outgoing));
            }
        }

        false
    }

    fn create_basic_graph() -> DiGraph<u32, ()> {
        let mut graph = DiGraph::new();

        for v in 0..6 {
            graph.add_vertex(v).unwrap();
        }

        graph
            .extend_with_edges([
                (5, 2, ()),
                (5, 0, ()),
                (4, 0, ()),
                (4, 1, ()),
                (2, 3, ()),
                (3, 1, ()),
            ])
            .unwrap();

        graph
    }

    fn create_cyclic_graph() -> DiGraph<u32, ()> {
        let mut graph = create_basic_graph();
        graph.add_edge(1, 5, ()).unwrap();
        graph
    }

    fn create_disconnected_graph() -> DiGraph<u32, ()> {
        let mut graph = create_basic_graph();

        graph
            .extend_with_edges([(7, 6, ()), (7, 8, ()), (6, 9, ()), (8, 9, ())])
            .unwrap();

        graph
    }

    #[test]
    fn kahn_basic() {
        let graph = create_basic_graph();
        assert_valid(TopoSort::on(&graph).run().into_vec(), &graph);
    }

    #[test]
    fn kahn_fifo_order() {
        let graph = create_basic_graph();

        assert_eq!(
            TopoSort::on(&graph).run().into_vec(),
            Ok(vec![4, 5, 2, 0, 3, 1])
        );
    }

    #[test]
    fn kahn_cycle() {
        let graph = create_cyclic_graph();
        assert_valid(TopoSort::on(&graph).run().into_vec(), &graph);
    }

    #[test]
    fn kahn_disconnected() {
        let graph = create_disconnected_graph();
        assert_valid(TopoSort::on(&graph).run().into_vec(), &graph);
    }

    #[test]
    fn kahn_none_after_cycle() {
        let graph = create_cyclic_graph();
        let mut toposort = TopoSort::on(&graph).run();

        for result in toposort.by_ref() {
            match result {
                Ok(_) => {}
                Err(error) => {
                    assert_matches!(error, Error::Cycle { .. });
                    break;
                }
            }
        }

        assert_eq!(toposort.next(), None);
    }

    #[test]
    fn self_loop_is_cycle() {
        let mut graph = create_basic_graph();
        graph.add_edge(3, 3, ()).unwrap();

        assert_eq!(
            TopoSort::on(&graph).run().into_vec(),
            Err(Error::Cycle { vertex: 3 })
        );
    }

    #[test]
    fn topo_sort_three_cycle() {
        let mut graph = DiGraph::new();
        graph
            .extend_with_edges([(0, 1, 1), (1, 2, 1), (2, 0, 1)])
            .unwrap();

        assert!(topo_sort(&graph).is_empty());
    }

    #[test]
    fn topo_sort_empty_graph() {
        let graph = DiGraph::<u32, ()>::new();

        assert!(topo_sort(&graph).is_empty());
        assert_eq!(TopoSort::on(&graph).run().next(), None);
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_kahn_acyclic(graph in graph_directed(any::<()>()).acyclic()) {
            assert_valid(TopoSort::on(&graph).run().into_vec(), &graph);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_toposort_kahn_any(graph in graph_directed(any::<()>())) {
            assert_valid(TopoSort::on(&graph).run().into_vec(), &graph);
        }
    }
}

//! Find [shortest paths] by the number of edges from a single source vertex,
//! ignoring edge weights.
//!
//! See available parameters [here](ShortestPathsBuilder#implementations).
//!
//! The search is a breadth-first traversal. When a [goal] is given, the search
//! terminates as soon as the goal is *discovered*, i.e., when it is first put
//! to the frontier, not when it is later taken out of it.
//!
//! [shortest paths]: https://en.wikipedia.org/wiki/Shortest_path_problem
//! [goal]: ShortestPathsBuilder::goal
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::ShortestPaths, DiGraph};
//!
//! let mut graph = DiGraph::new();
//!
//! graph
//!     .extend_with_edges([
//!         ("Prague", "Brno", 205),
//!         ("Brno", "Vienna", 145),
//!         ("Prague", "Linz", 247),
//!         ("Linz", "Vienna", 185),
//!         ("Vienna", "Bratislava", 80),
//!     ])
//!     .unwrap();
//!
//! let shortest_paths = ShortestPaths::on(&graph).run("Prague").unwrap();
//!
//! assert_eq!(shortest_paths.dist(&"Bratislava"), Some(3));
//! assert_eq!(
//!     shortest_paths.path_to(&"Bratislava"),
//!     Some(vec!["Prague", "Brno", "Vienna", "Bratislava"])
//! );
//! ```

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{GraphBase, Neighbors, VertexSet};

mod bfs;
mod builder;

pub use builder::ShortestPathsBuilder;

/// Shortest paths and their lengths (in edges) from a single source vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug)]
pub struct ShortestPaths<G: GraphBase> {
    source: G::Vertex,
    // Using HashMaps because the algorithm supports early termination when
    // reaching given goal. It is likely that reaching goal means visiting a
    // subgraph which is significantly smaller than the original graph.
    dist: FxHashMap<G::Vertex, usize>,
    pred: FxHashMap<G::Vertex, G::Vertex>,
}

impl<G> ShortestPaths<G>
where
    G: GraphBase,
{
    /// Source vertex where the search was started.
    pub fn source(&self) -> &G::Vertex {
        &self.source
    }

    /// Returns the number of edges on the shortest path between the source
    /// vertex and the given vertex, or `None` if it's not known.
    ///
    /// There are two causes why the distance between two vertices is not known:
    /// (1) the vertices are not connected, or (2) the
    /// [goal](ShortestPathsBuilder::goal) was reached before discovering the
    /// given vertex.
    pub fn dist(&self, to: &G::Vertex) -> Option<usize> {
        self.dist.get(to).copied()
    }

    /// Returns an iterator over vertices on the path between the given vertex
    /// and the source vertex, in this order, excluding the given vertex.
    ///
    /// The iterator is empty if the vertex was not discovered.
    pub fn reconstruct<'a>(&'a self, to: &'a G::Vertex) -> PathReconstruction<'a, G> {
        PathReconstruction {
            curr: to,
            pred: &self.pred,
        }
    }

    /// Returns the vertices on the path from the source vertex to the given
    /// vertex, both inclusive, or `None` if the vertex was not discovered.
    pub fn path_to(&self, to: &G::Vertex) -> Option<Vec<G::Vertex>> {
        let dist = self.dist(to)?;

        let mut path = Vec::with_capacity(dist + 1);
        path.push(to.clone());
        path.extend(self.reconstruct(to).cloned());
        path.reverse();

        Some(path)
    }
}

/// The error encountered during a [`ShortestPaths`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source or the goal is not a vertex of the graph.
    #[error("vertex does not exist")]
    UnknownVertex,

    /// The specified goal not reached.
    #[error("specified goal not reached")]
    GoalNotReached,
}

/// Iterator over the vertices on the path from a vertex to the source vertex.
///
/// Returned by [`ShortestPaths::reconstruct`].
pub struct PathReconstruction<'a, G: GraphBase> {
    curr: &'a G::Vertex,
    pred: &'a FxHashMap<G::Vertex, G::Vertex>,
}

impl<'a, G: GraphBase> Iterator for PathReconstruction<'a, G> {
    type Item = &'a G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        self.curr = self.pred.get(self.curr)?;
        Some(self.curr)
    }
}

/// Returns the vertices of a path from `source` to `goal` with the least number
/// of edges, both endpoints inclusive.
///
/// The result is empty if either vertex does not exist in the graph or if
/// `goal` is not reachable from `source`. Hence an empty result does not tell
/// apart invalid input from unreachability.
///
/// # Examples
///
/// ```
/// use grafo::{algo::shortest_paths::lowest_length_path, DiGraph};
///
/// let mut graph = DiGraph::new();
/// graph.extend_with_edges([(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
///
/// assert_eq!(lowest_length_path(&graph, &0, &3), vec![0, 1, 2, 3]);
/// assert_eq!(lowest_length_path(&graph, &2, &2), vec![2]);
/// assert!(lowest_length_path(&graph, &3, &0).is_empty());
/// ```
pub fn lowest_length_path<G>(graph: &G, source: &G::Vertex, goal: &G::Vertex) -> Vec<G::Vertex>
where
    G: Neighbors + VertexSet,
{
    ShortestPaths::on(graph)
        .goal(goal.clone())
        .run(source.clone())
        .ok()
        .and_then(|shortest_paths| shortest_paths.path_to(goal))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{
        core::{marker::Directed, EdgeSet},
        graph::{DiGraph, UnGraph},
        infra::proptest::{graph_directed, graph_undirected},
    };

    use super::*;

    fn create_basic_graph() -> UnGraph<u32, i32> {
        let mut graph = UnGraph::new();

        graph
            .extend_with_edges([
                (0, 1, 3),
                (0, 2, 2),
                (1, 2, 2),
                (1, 3, 2),
                (1, 4, 7),
                (2, 3, 5),
                (3, 4, 3),
                (4, 5, 10),
            ])
            .unwrap();

        graph
    }

    fn create_graph_with_isolated_vertex() -> UnGraph<u32, i32> {
        let mut graph = UnGraph::new();

        graph
            .extend_with_edges([(0, 1, 3), (0, 2, 2), (1, 2, 2)])
            .unwrap();
        graph.add_vertex(3).unwrap();

        graph
    }

    fn assert_valid_path<G>(graph: &G, path: &[G::Vertex], source: &G::Vertex, goal: &G::Vertex)
    where
        G: EdgeSet,
    {
        assert_eq!(path.first(), Some(source));
        assert_eq!(path.last(), Some(goal));

        for pair in path.windows(2) {
            assert!(
                graph.contains_edge(&pair[0], &pair[1]),
                "{:?} -> {:?} is not an edge",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn bfs_basic() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).run(0).unwrap();

        assert_eq!(shortest_paths.dist(&4), Some(2));
        assert_eq!(
            shortest_paths.reconstruct(&4).copied().collect::<Vec<_>>(),
            vec![1, 0]
        );

        assert_eq!(shortest_paths.dist(&2), Some(1));
        assert_eq!(shortest_paths.dist(&5), Some(3));
        assert_eq!(shortest_paths.source(), &0);
    }

    #[test]
    fn bfs_early_termination() {
        let graph = create_basic_graph();
        let shortest_paths = ShortestPaths::on(&graph).goal(4).run(0).unwrap();

        assert_eq!(shortest_paths.dist(&4), Some(2));
        assert!(shortest_paths.dist(&5).is_none());
    }

    #[test]
    fn bfs_goal_not_reached() {
        let graph = create_graph_with_isolated_vertex();
        let shortest_paths = ShortestPaths::on(&graph).goal(3).run(0);

        assert_matches!(shortest_paths, Err(Error::GoalNotReached));
    }

    #[test]
    fn bfs_unknown_vertex() {
        let graph = create_basic_graph();

        assert_matches!(ShortestPaths::on(&graph).run(9), Err(Error::UnknownVertex));
        assert_matches!(
            ShortestPaths::on(&graph).goal(9).run(0),
            Err(Error::UnknownVertex)
        );
    }

    #[test]
    fn bfs_respects_direction() {
        let mut graph = DiGraph::new();
        graph
            .extend_with_edges([(0, 1, ()), (1, 2, ()), (2, 0, ()), (0, 3, ())])
            .unwrap();

        assert_eq!(lowest_length_path(&graph, &0, &2), vec![0, 1, 2]);
        assert_eq!(lowest_length_path(&graph, &2, &3), vec![2, 0, 3]);
        assert_eq!(lowest_length_path(&graph, &3, &0), Vec::<i32>::new());
    }

    #[test]
    fn lowest_length_path_chain() {
        let mut graph = DiGraph::new();
        graph
            .extend_with_edges([(0, 1, 1), (1, 2, 1), (2, 3, 1)])
            .unwrap();

        assert_eq!(lowest_length_path(&graph, &0, &3), vec![0, 1, 2, 3]);
    }

    #[test]
    fn lowest_length_path_same_vertex() {
        let graph = create_graph_with_isolated_vertex();

        assert_eq!(lowest_length_path(&graph, &3, &3), vec![3]);
    }

    #[test]
    fn lowest_length_path_tolerates_invalid_input() {
        let graph = create_basic_graph();

        assert!(lowest_length_path(&graph, &0, &42).is_empty());
        assert!(lowest_length_path(&graph, &42, &0).is_empty());
        assert!(lowest_length_path(&graph, &42, &42).is_empty());
    }

    #[test]
    fn lowest_length_path_shortcut() {
        let graph = create_basic_graph();
        let path = lowest_length_path(&graph, &0, &5);

        assert_eq!(path.len(), 4);
        assert_valid_path(&graph, &path, &0, &5);
    }

    // Hop distances computed by repeated relaxation, used as a reference.
    fn reference_dist<G>(graph: &G, source: &G::Vertex) -> FxHashMap<G::Vertex, usize>
    where
        G: EdgeSet<EdgeType = Directed>,
    {
        let mut dist = FxHashMap::default();
        dist.insert(source.clone(), 0);

        loop {
            let mut changed = false;

            for edge in graph.edges() {
                if let Some(&d) = dist.get(edge.origin) {
                    let current = dist.get(edge.destination).copied().unwrap_or(usize::MAX);
                    if d + 1 < current {
                        dist.insert(edge.destination.clone(), d + 1);
                        changed = true;
                    }
                }
            }

            if !changed {
                return dist;
            }
        }
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_matches_reference(graph in graph_directed(any::<()>()), source: u32, goal: u32) {
            prop_assume!(graph.vertex_count() > 0);

            let n = graph.vertex_count() as u32;
            let (source, goal) = (source % n, goal % n);
            let expected = reference_dist(&graph, &source);
            let path = lowest_length_path(&graph, &source, &goal);

            match expected.get(&goal) {
                Some(&d) => {
                    prop_assert_eq!(path.len(), d + 1);
                    assert_valid_path(&graph, &path, &source, &goal);
                }
                None => prop_assert!(path.is_empty()),
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_bfs_undirected_paths_valid(graph in graph_undirected(any::<()>()), source: u32, goal: u32) {
            prop_assume!(graph.vertex_count() > 0);

            let n = graph.vertex_count() as u32;
            let (source, goal) = (source % n, goal % n);
            let path = lowest_length_path(&graph, &source, &goal);

            if !path.is_empty() {
                assert_valid_path(&graph, &path, &source, &goal);
            }
        }
    }
}

//! Find [lowest cost walks] between all pairs of vertices.
//!
//! The computation is the [Floyd–Warshall algorithm] running in `O(|V|^3)`
//! time over a dense cost matrix and a predecessor matrix. Rows and columns
//! correspond to vertex positions in the graph's enumeration order.
//!
//! Negative edge weights are supported. If the graph contains a cycle of
//! negative total cost anywhere, no cost nor walk is reported for any pair,
//! even if the cycle is not reachable from the queried vertices.
//!
//! Costs are summed without wrapping. A lowest cost that does not fit into the
//! weight type is reported as [`Error::Overflow`].
//!
//! [lowest cost walks]: https://en.wikipedia.org/wiki/Shortest_path_problem#All-pairs_shortest_paths
//! [Floyd–Warshall algorithm]: https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm
//!
//! # Examples
//!
//! ```
//! use grafo::{algo::AllPairs, DiGraph};
//!
//! let mut graph = DiGraph::new();
//! graph
//!     .extend_with_edges([(0, 1, 1), (1, 2, 2), (0, 2, 5)])
//!     .unwrap();
//!
//! let all_pairs = AllPairs::compute(&graph);
//! let walk = all_pairs.walk(&0, &2).unwrap();
//!
//! assert_eq!(walk.cost, 3);
//! assert_eq!(walk.path, vec![0, 1, 2]);
//! ```

use thiserror::Error;

use crate::{
    common::{FxIndexSet, Matrix},
    core::{weight::Weight, EdgeSet, GraphBase, Label, VertexSet},
};

mod floyd_warshall;

use floyd_warshall::floyd_warshall;

/// Lowest walk costs and predecessors for all pairs of vertices.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone)]
pub struct AllPairs<V, W> {
    vertices: FxIndexSet<V>,
    cost: Matrix<Cost<W>>,
    pred: Matrix<Option<usize>>,
    negative_cycle: bool,
}

/// Lowest known cost of walks between a pair of vertices.
///
/// Variants are ordered from the cheapest to the most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
pub enum Cost<W> {
    /// The cost is below the smallest value of the weight type.
    NegativeOverflow,
    Finite(W),
    /// The cost is above the largest value of the weight type.
    Overflow,
    Unreachable,
}

impl<W: Weight> Cost<W> {
    // Cost of a walk followed by another walk.
    fn concat(&self, other: &Self) -> Self {
        match (self, other) {
            (Cost::Unreachable, _) | (_, Cost::Unreachable) => Cost::Unreachable,
            (Cost::Finite(a), Cost::Finite(b)) => match a.checked_add(b) {
                Some(sum) => Cost::Finite(sum),
                None if *a < W::zero() => Cost::NegativeOverflow,
                None => Cost::Overflow,
            },
            // Overflows in opposite directions are indeterminate, counted as
            // too high.
            (Cost::Overflow, _) | (_, Cost::Overflow) => Cost::Overflow,
            (Cost::NegativeOverflow, _) | (_, Cost::NegativeOverflow) => Cost::NegativeOverflow,
        }
    }
}

/// A lowest cost walk between two vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk<V, W> {
    pub cost: W,
    /// Vertices of the walk from the source to the destination, both
    /// inclusive.
    pub path: Vec<V>,
}

/// Matrices after a vertex was added to the set of allowed intermediate
/// vertices.
///
/// Reported to the observer of [`AllPairs::compute_with`].
#[derive(Debug)]
pub struct Step<'a, V, W> {
    /// Number of intermediate vertices considered so far, minus one.
    pub k: usize,
    pub vertex: &'a V,
    pub cost: &'a Matrix<Cost<W>>,
    pub pred: &'a Matrix<Option<usize>>,
}

/// The error encountered when querying [`AllPairs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The graph contains a cycle of negative total cost.
    #[error("negative cost cycle encountered")]
    NegativeCycle,

    /// The destination is not reachable from the source.
    #[error("no walk exists")]
    NoWalk,

    /// The lowest cost does not fit into the weight type.
    #[error("walk cost out of range")]
    Overflow,

    /// The source or the destination is not a vertex of the graph.
    #[error("vertex does not exist")]
    UnknownVertex,
}

impl<V, W> AllPairs<V, W>
where
    V: Label,
    W: Weight,
{
    pub fn compute<G>(graph: &G) -> Self
    where
        G: VertexSet + EdgeSet + GraphBase<Vertex = V, Weight = W>,
    {
        floyd_warshall(graph, |_| {})
    }

    /// Same as [`compute`](AllPairs::compute), but calls `observer` with the
    /// current matrices after each intermediate vertex is processed.
    pub fn compute_with<G, F>(graph: &G, observer: F) -> Self
    where
        G: VertexSet + EdgeSet + GraphBase<Vertex = V, Weight = W>,
        F: FnMut(Step<'_, V, W>),
    {
        floyd_warshall(graph, observer)
    }

    /// Whether any vertex lies on a cycle of negative total cost.
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Returns the cost of the lowest cost walk from `source` to
    /// `destination`.
    pub fn cost(&self, source: &V, destination: &V) -> Result<&W, Error> {
        let (i, j) = self.indices(source, destination)?;

        match &self.cost[(i, j)] {
            Cost::Finite(cost) => Ok(cost),
            Cost::Unreachable => Err(Error::NoWalk),
            Cost::Overflow | Cost::NegativeOverflow => Err(Error::Overflow),
        }
    }

    /// Returns the lowest cost walk from `source` to `destination`.
    pub fn walk(&self, source: &V, destination: &V) -> Result<Walk<V, W>, Error> {
        let cost = self.cost(source, destination)?.clone();
        let (i, j) = self.indices(source, destination)?;

        let mut path = vec![j];
        let mut curr = j;

        while curr != i {
            // A finite cost implies the chain of predecessors leads back to the
            // source.
            curr = self.pred[(i, curr)].ok_or(Error::NoWalk)?;
            path.push(curr);
        }

        path.reverse();

        let path = path
            .into_iter()
            .map(|index| self.vertex(index).clone())
            .collect();

        Ok(Walk { cost, path })
    }

    /// Vertices in the order of the matrix rows and columns.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }

    /// The cost matrix.
    pub fn costs(&self) -> &Matrix<Cost<W>> {
        &self.cost
    }

    /// The predecessor matrix. Cell `(i, j)` holds the vertex preceding `j` on
    /// the lowest cost walk from `i`, `None` if there is no walk or `i == j`.
    pub fn predecessors(&self) -> &Matrix<Option<usize>> {
        &self.pred
    }

    fn indices(&self, source: &V, destination: &V) -> Result<(usize, usize), Error> {
        if self.negative_cycle {
            return Err(Error::NegativeCycle);
        }

        let i = self
            .vertices
            .get_index_of(source)
            .ok_or(Error::UnknownVertex)?;
        let j = self
            .vertices
            .get_index_of(destination)
            .ok_or(Error::UnknownVertex)?;

        Ok((i, j))
    }

    fn vertex(&self, index: usize) -> &V {
        self.vertices
            .get_index(index)
            .expect("matrix index within vertex count")
    }
}

/// Returns the lowest cost walk from `source` to `destination`.
///
/// Convenience wrapper around [`AllPairs::compute`] followed by
/// [`AllPairs::walk`].
pub fn lowest_cost_walk<G>(
    graph: &G,
    source: &G::Vertex,
    destination: &G::Vertex,
) -> Result<Walk<G::Vertex, G::Weight>, Error>
where
    G: VertexSet + EdgeSet,
    G::Weight: Weight,
{
    AllPairs::compute(graph).walk(source, destination)
}

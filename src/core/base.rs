use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
};

use super::marker::{Direction, EdgeType};

/// Vertex label. Identity of a vertex is defined solely by label equality.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T> Label for T where T: Clone + Eq + Hash + Debug {}

/// An edge between `origin` and `destination` carrying a `weight`.
///
/// This is only a view. Edge identity is the `(origin, destination)` pair
/// under which a graph stores the weight, the weight itself never takes part
/// in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V, W> {
    pub origin: V,
    pub destination: V,
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    pub fn new(origin: V, destination: V, weight: W) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }
}

impl<V: Clone, W: Clone> Edge<&V, &W> {
    pub fn cloned(&self) -> Edge<V, W> {
        Edge::new(
            self.origin.clone(),
            self.destination.clone(),
            self.weight.clone(),
        )
    }
}

impl<V: Display, W: Display> Display for Edge<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) weight: {}",
            self.origin, self.destination, self.weight
        )
    }
}

pub trait GraphBase {
    type Vertex: Label;
    type Weight;
    type EdgeType: EdgeType;

    fn is_directed(&self) -> bool {
        Self::EdgeType::is_directed()
    }
}

pub trait VertexSet: GraphBase {
    type VerticesIter<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Vertices in enumeration (insertion) order.
    fn vertices(&self) -> Self::VerticesIter<'_>;

    fn vertex_count(&self) -> usize;

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Position of the vertex in the enumeration order, a compact index in
    /// `0..vertex_count()`.
    fn vertex_index(&self, vertex: &Self::Vertex) -> Option<usize>;

    fn vertex_at(&self, index: usize) -> Option<&Self::Vertex>;
}

pub trait EdgeSet: GraphBase {
    type EdgesIter<'a>: Iterator<Item = Edge<&'a Self::Vertex, &'a Self::Weight>>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_>;

    fn edge_count(&self) -> usize;

    fn contains_edge(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool;

    fn edge_weight(&self, from: &Self::Vertex, to: &Self::Vertex) -> Option<&Self::Weight>;
}

pub trait Neighbors: GraphBase {
    type NeighborsIter<'a>: Iterator<Item = &'a Self::Vertex>
    where
        Self: 'a;

    /// Neighbors of the vertex in the given direction, empty if the vertex
    /// does not exist. Undirected graphs ignore the direction.
    fn neighbors_directed(&self, vertex: &Self::Vertex, dir: Direction) -> Self::NeighborsIter<'_>;

    fn degree_directed(&self, vertex: &Self::Vertex, dir: Direction) -> usize {
        self.neighbors_directed(vertex, dir).count()
    }
}

macro_rules! deref_graph {
    ($($ref_kind:tt)*) => {
        impl<G> GraphBase for $($ref_kind)* G
        where
            G: GraphBase,
        {
            type Vertex = G::Vertex;
            type Weight = G::Weight;
            type EdgeType = G::EdgeType;
        }

        impl<G> VertexSet for $($ref_kind)* G
        where
            G: VertexSet,
        {
            type VerticesIter<'a> = G::VerticesIter<'a>
            where
                Self: 'a;

            fn vertices(&self) -> Self::VerticesIter<'_> {
                (**self).vertices()
            }

            fn vertex_count(&self) -> usize {
                (**self).vertex_count()
            }

            fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
                (**self).contains_vertex(vertex)
            }

            fn vertex_index(&self, vertex: &Self::Vertex) -> Option<usize> {
                (**self).vertex_index(vertex)
            }

            fn vertex_at(&self, index: usize) -> Option<&Self::Vertex> {
                (**self).vertex_at(index)
            }
        }

        impl<G> EdgeSet for $($ref_kind)* G
        where
            G: EdgeSet,
        {
            type EdgesIter<'a> = G::EdgesIter<'a>
            where
                Self: 'a;

            fn edges(&self) -> Self::EdgesIter<'_> {
                (**self).edges()
            }

            fn edge_count(&self) -> usize {
                (**self).edge_count()
            }

            fn contains_edge(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool {
                (**self).contains_edge(from, to)
            }

            fn edge_weight(&self, from: &Self::Vertex, to: &Self::Vertex) -> Option<&Self::Weight> {
                (**self).edge_weight(from, to)
            }
        }

        impl<G> Neighbors for $($ref_kind)* G
        where
            G: Neighbors,
        {
            type NeighborsIter<'a> = G::NeighborsIter<'a>
            where
                Self: 'a;

            fn neighbors_directed(&self, vertex: &Self::Vertex, dir: Direction) -> Self::NeighborsIter<'_> {
                (**self).neighbors_directed(vertex, dir)
            }

            fn degree_directed(&self, vertex: &Self::Vertex, dir: Direction) -> usize {
                (**self).degree_directed(vertex, dir)
            }
        }
    }
}

deref_graph!(&);
deref_graph!(&mut);

use std::{fmt, mem};

use crate::{
    common::{remove_first, EdgeKey, FxIndexMap},
    core::{
        error::GraphError,
        marker::{Direction, Undirected},
        EdgeSet, GraphBase, Label, Neighbors, VertexSet,
    },
};

use super::shared::{Adjacent, Edges, Vertices};

/// Undirected graph with weighted edges.
///
/// Each relation is stored symmetrically in a single adjacency map. The weight
/// is stored once, under the endpoint pair ordered by `Ord`, so that the cost
/// of `{x, y}` is the same whichever order the endpoints are given in.
///
/// # Examples
///
/// ```
/// use grafo::UnGraph;
///
/// let mut graph = UnGraph::new();
/// graph.extend_with_edges([(2, 1, 10), (1, 3, 20)]).unwrap();
///
/// assert_eq!(graph.cost(&1, &2), Ok(&10));
/// assert_eq!(graph.cost(&2, &1), Ok(&10));
/// assert_eq!(graph.degree(&1), Ok(2));
/// ```
#[derive(Clone)]
pub struct UnGraph<V, W> {
    adjacency: FxIndexMap<V, Vec<V>>,
    costs: FxIndexMap<(V, V), W>,
}

fn canonical<'a, V: Ord>(a: &'a V, b: &'a V) -> EdgeKey<'a, V> {
    if a <= b {
        EdgeKey(a, b)
    } else {
        EdgeKey(b, a)
    }
}

impl<V, W> UnGraph<V, W> {
    pub fn new() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
            costs: FxIndexMap::default(),
        }
    }

    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            adjacency: FxIndexMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            costs: FxIndexMap::with_capacity_and_hasher(edge_capacity, Default::default()),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.costs.clear();
    }

    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices::new(self.adjacency.keys())
    }

    /// All edges in the order they were added, each reported with
    /// `origin <= destination`.
    pub fn edges(&self) -> Edges<'_, V, W> {
        Edges::new(self.costs.iter())
    }
}

impl<V: Label + Ord, W> UnGraph<V, W> {
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn contains_edge(&self, a: &V, b: &V) -> bool {
        self.costs.contains_key(&canonical(a, b))
    }

    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError<V>> {
        if self.contains_vertex(&vertex) {
            return Err(GraphError::DuplicateVertex(vertex));
        }

        self.adjacency.insert(vertex, Vec::new());
        Ok(())
    }

    pub fn add_edge(&mut self, a: V, b: V, weight: W) -> Result<(), GraphError<V>> {
        if !self.contains_vertex(&a) {
            return Err(GraphError::UnknownVertex(a));
        }

        if !self.contains_vertex(&b) {
            return Err(GraphError::UnknownVertex(b));
        }

        if self.contains_edge(&a, &b) {
            return Err(GraphError::EdgeExists(a, b));
        }

        self.adjacency[&a].push(b.clone());
        if a != b {
            self.adjacency[&b].push(a.clone());
        }

        let key = if a <= b { (a, b) } else { (b, a) };
        self.costs.insert(key, weight);
        Ok(())
    }

    pub fn remove_edge(&mut self, a: &V, b: &V) -> Result<W, GraphError<V>> {
        let weight = self
            .costs
            .shift_remove(&canonical(a, b))
            .ok_or_else(|| GraphError::EdgeNotFound(a.clone(), b.clone()))?;

        remove_first(&mut self.adjacency[a], b);
        if a != b {
            remove_first(&mut self.adjacency[b], a);
        }

        Ok(weight)
    }

    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), GraphError<V>> {
        let neighbors = self
            .adjacency
            .shift_remove(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))?;

        for neighbor in neighbors.iter().filter(|&n| n != vertex) {
            if let Some(adjacent) = self.adjacency.get_mut(neighbor) {
                remove_first(adjacent, vertex);
            }
        }

        if !neighbors.is_empty() {
            self.costs.retain(|(a, b), _| a != vertex && b != vertex);
        }

        Ok(())
    }

    /// Weight of the edge `{a, b}`, independent of the endpoint order.
    pub fn cost(&self, a: &V, b: &V) -> Result<&W, GraphError<V>> {
        self.costs
            .get(&canonical(a, b))
            .ok_or_else(|| GraphError::EdgeNotFound(a.clone(), b.clone()))
    }

    pub fn set_cost(&mut self, a: &V, b: &V, weight: W) -> Result<W, GraphError<V>> {
        match self.costs.get_mut(&canonical(a, b)) {
            Some(slot) => Ok(mem::replace(slot, weight)),
            None => Err(GraphError::EdgeNotFound(a.clone(), b.clone())),
        }
    }

    /// Number of neighbors. A self-loop counts once.
    pub fn degree(&self, vertex: &V) -> Result<usize, GraphError<V>> {
        self.adjacency(vertex).map(<[V]>::len)
    }

    pub fn neighbors(&self, vertex: &V) -> Result<Adjacent<'_, V>, GraphError<V>> {
        self.adjacency(vertex).map(Adjacent::new)
    }

    pub fn isolated_vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency
            .iter()
            .filter(|(_, neighbors)| neighbors.is_empty())
            .map(|(vertex, _)| vertex)
    }

    /// Adds all edges, creating endpoints that are not in the graph yet.
    pub fn extend_with_edges<I>(&mut self, edges: I) -> Result<(), GraphError<V>>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        for (a, b, weight) in edges {
            for vertex in [&a, &b] {
                if !self.contains_vertex(vertex) {
                    self.add_vertex(vertex.clone())?;
                }
            }

            self.add_edge(a, b, weight)?;
        }

        Ok(())
    }

    fn adjacency(&self, vertex: &V) -> Result<&[V], GraphError<V>> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }
}

impl<V, W> Default for UnGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for UnGraph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnGraph")
            .field("vertices", &self.adjacency.keys().collect::<Vec<_>>())
            .field("edges", &self.costs)
            .finish()
    }
}

impl<V: Label + Ord, W> GraphBase for UnGraph<V, W> {
    type Vertex = V;
    type Weight = W;
    type EdgeType = Undirected;
}

impl<V: Label + Ord, W> VertexSet for UnGraph<V, W> {
    type VerticesIter<'a> = Vertices<'a, V>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        UnGraph::vertices(self)
    }

    fn vertex_count(&self) -> usize {
        UnGraph::vertex_count(self)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        UnGraph::contains_vertex(self, vertex)
    }

    fn vertex_index(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    fn vertex_at(&self, index: usize) -> Option<&V> {
        self.adjacency.get_index(index).map(|(vertex, _)| vertex)
    }
}

impl<V: Label + Ord, W> EdgeSet for UnGraph<V, W> {
    type EdgesIter<'a> = Edges<'a, V, W>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        UnGraph::edges(self)
    }

    fn edge_count(&self) -> usize {
        UnGraph::edge_count(self)
    }

    fn contains_edge(&self, from: &V, to: &V) -> bool {
        UnGraph::contains_edge(self, from, to)
    }

    fn edge_weight(&self, from: &V, to: &V) -> Option<&W> {
        self.costs.get(&canonical(from, to))
    }
}

impl<V: Label + Ord, W> Neighbors for UnGraph<V, W> {
    type NeighborsIter<'a> = Adjacent<'a, V>
    where
        Self: 'a;

    fn neighbors_directed(&self, vertex: &V, _dir: Direction) -> Self::NeighborsIter<'_> {
        self.adjacency(vertex)
            .map(Adjacent::new)
            .unwrap_or_else(|_| Adjacent::empty())
    }

    fn degree_directed(&self, vertex: &V, _dir: Direction) -> usize {
        self.adjacency(vertex).map_or(0, <[V]>::len)
    }
}

use std::{fmt, mem};

use crate::{
    common::{remove_first, EdgeKey, FxIndexMap},
    core::{
        error::GraphError,
        marker::{Directed, Direction},
        Edge, EdgeSet, GraphBase, Label, Neighbors, VertexSet,
    },
};

use super::shared::{Adjacent, Edges, Vertices};

/// Directed graph with weighted edges.
///
/// The graph is made of three coupled maps: outbound adjacency, inbound
/// adjacency and edge costs. Vertex `y` is in the outbound sequence of `x` iff
/// `x` is in the inbound sequence of `y` iff the cost map holds the key
/// `(x, y)`. Every mutation keeps the three maps consistent.
///
/// Parallel edges are not allowed, self-loops are.
///
/// # Examples
///
/// ```
/// use grafo::{DiGraph, GraphError};
///
/// let mut graph = DiGraph::new();
///
/// graph.add_vertex("a").unwrap();
/// graph.add_vertex("b").unwrap();
/// graph.add_edge("a", "b", 5).unwrap();
///
/// assert_eq!(graph.cost(&"a", &"b"), Ok(&5));
/// assert_eq!(graph.add_edge("a", "b", 7), Err(GraphError::EdgeExists("a", "b")));
/// ```
#[derive(Clone)]
pub struct DiGraph<V, W> {
    outbound: FxIndexMap<V, Vec<V>>,
    inbound: FxIndexMap<V, Vec<V>>,
    costs: FxIndexMap<(V, V), W>,
}

impl<V, W> DiGraph<V, W> {
    pub fn new() -> Self {
        Self {
            outbound: FxIndexMap::default(),
            inbound: FxIndexMap::default(),
            costs: FxIndexMap::default(),
        }
    }

    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            outbound: FxIndexMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            inbound: FxIndexMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            costs: FxIndexMap::with_capacity_and_hasher(edge_capacity, Default::default()),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.outbound.len()
    }

    pub fn edge_count(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outbound.is_empty()
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.outbound.clear();
        self.inbound.clear();
        self.costs.clear();
    }

    pub fn vertices(&self) -> Vertices<'_, V> {
        Vertices::new(self.outbound.keys())
    }

    /// All edges in the order they were added.
    pub fn edges(&self) -> Edges<'_, V, W> {
        Edges::new(self.costs.iter())
    }
}

impl<V: Label, W> DiGraph<V, W> {
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.outbound.contains_key(vertex)
    }

    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.costs.contains_key(&EdgeKey(from, to))
    }

    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError<V>> {
        if self.contains_vertex(&vertex) {
            return Err(GraphError::DuplicateVertex(vertex));
        }

        self.inbound.insert(vertex.clone(), Vec::new());
        self.outbound.insert(vertex, Vec::new());
        Ok(())
    }

    /// Adds an edge from `from` to `to`.
    ///
    /// Fails if any of the endpoints does not exist or if the edge already
    /// exists, regardless of its weight.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<(), GraphError<V>> {
        if !self.contains_vertex(&from) {
            return Err(GraphError::UnknownVertex(from));
        }

        if !self.contains_vertex(&to) {
            return Err(GraphError::UnknownVertex(to));
        }

        if self.contains_edge(&from, &to) {
            return Err(GraphError::EdgeExists(from, to));
        }

        self.outbound[&from].push(to.clone());
        self.inbound[&to].push(from.clone());
        self.costs.insert((from, to), weight);
        Ok(())
    }

    /// Removes the edge and returns its weight.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Result<W, GraphError<V>> {
        let weight = self
            .costs
            .shift_remove(&EdgeKey(from, to))
            .ok_or_else(|| GraphError::EdgeNotFound(from.clone(), to.clone()))?;

        remove_first(&mut self.outbound[from], to);
        remove_first(&mut self.inbound[to], from);
        Ok(weight)
    }

    /// Removes the vertex together with all its inbound and outbound edges.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), GraphError<V>> {
        let successors = self
            .outbound
            .shift_remove(vertex)
            .ok_or_else(|| GraphError::VertexNotFound(vertex.clone()))?;
        let predecessors = self.inbound.shift_remove(vertex).unwrap_or_default();

        for predecessor in predecessors.iter().filter(|&p| p != vertex) {
            if let Some(outbound) = self.outbound.get_mut(predecessor) {
                remove_first(outbound, vertex);
            }
        }

        for successor in successors.iter().filter(|&s| s != vertex) {
            if let Some(inbound) = self.inbound.get_mut(successor) {
                remove_first(inbound, vertex);
            }
        }

        if !predecessors.is_empty() || !successors.is_empty() {
            self.costs
                .retain(|(from, to), _| from != vertex && to != vertex);
        }

        Ok(())
    }

    pub fn cost(&self, from: &V, to: &V) -> Result<&W, GraphError<V>> {
        self.costs
            .get(&EdgeKey(from, to))
            .ok_or_else(|| GraphError::EdgeNotFound(from.clone(), to.clone()))
    }

    /// Replaces the weight of an existing edge and returns the previous one.
    pub fn set_cost(&mut self, from: &V, to: &V, weight: W) -> Result<W, GraphError<V>> {
        match self.costs.get_mut(&EdgeKey(from, to)) {
            Some(slot) => Ok(mem::replace(slot, weight)),
            None => Err(GraphError::EdgeNotFound(from.clone(), to.clone())),
        }
    }

    pub fn in_degree(&self, vertex: &V) -> Result<usize, GraphError<V>> {
        self.adjacency(vertex, Direction::Incoming)
            .map(<[V]>::len)
    }

    pub fn out_degree(&self, vertex: &V) -> Result<usize, GraphError<V>> {
        self.adjacency(vertex, Direction::Outgoing)
            .map(<[V]>::len)
    }

    /// Outbound neighbors of the vertex in the order the edges were added.
    pub fn successors(&self, vertex: &V) -> Result<Adjacent<'_, V>, GraphError<V>> {
        self.adjacency(vertex, Direction::Outgoing)
            .map(Adjacent::new)
    }

    /// Inbound neighbors of the vertex in the order the edges were added.
    pub fn predecessors(&self, vertex: &V) -> Result<Adjacent<'_, V>, GraphError<V>> {
        self.adjacency(vertex, Direction::Incoming)
            .map(Adjacent::new)
    }

    pub fn outbound_edges<'a>(&'a self, vertex: &'a V) -> Result<IncidentEdges<'a, V, W>, GraphError<V>> {
        self.incident_edges(vertex, Direction::Outgoing)
    }

    pub fn inbound_edges<'a>(&'a self, vertex: &'a V) -> Result<IncidentEdges<'a, V, W>, GraphError<V>> {
        self.incident_edges(vertex, Direction::Incoming)
    }

    /// Vertices with no inbound and no outbound edges.
    pub fn isolated_vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.outbound
            .iter()
            .filter(|(vertex, outbound)| {
                outbound.is_empty()
                    && self
                        .inbound
                        .get(*vertex)
                        .map_or(true, |inbound| inbound.is_empty())
            })
            .map(|(vertex, _)| vertex)
    }

    /// Adds all edges, creating endpoints that are not in the graph yet.
    pub fn extend_with_edges<I>(&mut self, edges: I) -> Result<(), GraphError<V>>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        for (from, to, weight) in edges {
            for vertex in [&from, &to] {
                if !self.contains_vertex(vertex) {
                    self.add_vertex(vertex.clone())?;
                }
            }

            self.add_edge(from, to, weight)?;
        }

        Ok(())
    }

    /// Deep copy of the graph with every label replaced by `f(label)`.
    ///
    /// The mapping must be injective, otherwise the structure of the copy is
    /// unspecified.
    pub fn map_vertices<U, F>(&self, mut f: F) -> DiGraph<U, W>
    where
        U: Label,
        W: Clone,
        F: FnMut(&V) -> U,
    {
        let labels = self.outbound.keys().map(&mut f).collect::<Vec<_>>();
        let relabel = |vertex: &V| {
            let index = self
                .outbound
                .get_index_of(vertex)
                .expect("adjacency refers to existing vertices");
            labels[index].clone()
        };

        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());

        for (label, (outbound, inbound)) in labels
            .iter()
            .zip(self.outbound.values().zip(self.inbound.values()))
        {
            graph
                .outbound
                .insert(label.clone(), outbound.iter().map(relabel).collect());
            graph
                .inbound
                .insert(label.clone(), inbound.iter().map(relabel).collect());
        }

        for ((from, to), weight) in self.costs.iter() {
            graph
                .costs
                .insert((relabel(from), relabel(to)), weight.clone());
        }

        debug_assert_eq!(graph.vertex_count(), self.vertex_count());
        graph
    }

    fn adjacency(&self, vertex: &V, dir: Direction) -> Result<&[V], GraphError<V>> {
        let map = match dir {
            Direction::Outgoing => &self.outbound,
            Direction::Incoming => &self.inbound,
        };

        map.get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }

    fn incident_edges<'a>(
        &'a self,
        vertex: &'a V,
        dir: Direction,
    ) -> Result<IncidentEdges<'a, V, W>, GraphError<V>> {
        let neighbors = self.adjacency(vertex, dir)?;

        Ok(IncidentEdges {
            vertex,
            neighbors: Adjacent::new(neighbors),
            costs: &self.costs,
            dir,
        })
    }
}

impl<V, W> Default for DiGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug, W: fmt::Debug> fmt::Debug for DiGraph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiGraph")
            .field("vertices", &self.outbound.keys().collect::<Vec<_>>())
            .field("edges", &self.costs)
            .finish()
    }
}

/// Edges entering or leaving a single vertex, in the order the edges were
/// added.
#[derive(Debug, Clone)]
pub struct IncidentEdges<'a, V, W> {
    vertex: &'a V,
    neighbors: Adjacent<'a, V>,
    costs: &'a FxIndexMap<(V, V), W>,
    dir: Direction,
}

impl<'a, V: Label, W> Iterator for IncidentEdges<'a, V, W> {
    type Item = Edge<&'a V, &'a W>;

    fn next(&mut self) -> Option<Self::Item> {
        let neighbor = self.neighbors.next()?;
        let (origin, destination) = match self.dir {
            Direction::Outgoing => (self.vertex, neighbor),
            Direction::Incoming => (neighbor, self.vertex),
        };

        let costs: &'a FxIndexMap<(V, V), W> = self.costs;
        Some(Edge::new(origin, destination, &costs[&EdgeKey(origin, destination)]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.neighbors.size_hint()
    }
}

impl<V: Label, W> GraphBase for DiGraph<V, W> {
    type Vertex = V;
    type Weight = W;
    type EdgeType = Directed;
}

impl<V: Label, W> VertexSet for DiGraph<V, W> {
    type VerticesIter<'a> = Vertices<'a, V>
    where
        Self: 'a;

    fn vertices(&self) -> Self::VerticesIter<'_> {
        DiGraph::vertices(self)
    }

    fn vertex_count(&self) -> usize {
        DiGraph::vertex_count(self)
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        DiGraph::contains_vertex(self, vertex)
    }

    fn vertex_index(&self, vertex: &V) -> Option<usize> {
        self.outbound.get_index_of(vertex)
    }

    fn vertex_at(&self, index: usize) -> Option<&V> {
        self.outbound.get_index(index).map(|(vertex, _)| vertex)
    }
}

impl<V: Label, W> EdgeSet for DiGraph<V, W> {
    type EdgesIter<'a> = Edges<'a, V, W>
    where
        Self: 'a;

    fn edges(&self) -> Self::EdgesIter<'_> {
        DiGraph::edges(self)
    }

    fn edge_count(&self) -> usize {
        DiGraph::edge_count(self)
    }

    fn contains_edge(&self, from: &V, to: &V) -> bool {
        DiGraph::contains_edge(self, from, to)
    }

    fn edge_weight(&self, from: &V, to: &V) -> Option<&W> {
        self.costs.get(&EdgeKey(from, to))
    }
}

impl<V: Label, W> Neighbors for DiGraph<V, W> {
    type NeighborsIter<'a> = Adjacent<'a, V>
    where
        Self: 'a;

    fn neighbors_directed(&self, vertex: &V, dir: Direction) -> Self::NeighborsIter<'_> {
        self.adjacency(vertex, dir)
            .map(Adjacent::new)
            .unwrap_or_else(|_| Adjacent::empty())
    }

    fn degree_directed(&self, vertex: &V, dir: Direction) -> usize {
        self.adjacency(vertex, dir).map_or(0, <[V]>::len)
    }
}

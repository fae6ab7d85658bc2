use thiserror::Error;

use crate::{
    core::{
        marker::{Direction, EdgeType},
        EdgeSet, GraphBase, Neighbors, VertexSet,
    },
    graph::{DiGraph, UnGraph},
};

/// Graph that can be built from compact `u32` labels, used by the generators
/// below and by the property-based strategies.
pub trait Create<W>: GraphBase<Vertex = u32, Weight = W> + Sized {
    fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self;

    /// Adds a vertex whose label is not in the graph yet.
    fn insert_vertex(&mut self, vertex: u32);

    /// Adds the edge unless an edge between the endpoints already exists. Both
    /// endpoints must be in the graph.
    fn insert_edge(&mut self, from: u32, to: u32, weight: W);
}

impl<W> Create<W> for DiGraph<u32, W> {
    fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        DiGraph::with_capacity(vertex_capacity, edge_capacity)
    }

    fn insert_vertex(&mut self, vertex: u32) {
        self.add_vertex(vertex).expect("fresh vertex label");
    }

    fn insert_edge(&mut self, from: u32, to: u32, weight: W) {
        if !self.contains_edge(&from, &to) {
            self.add_edge(from, to, weight).expect("endpoints exist");
        }
    }
}

impl<W> Create<W> for UnGraph<u32, W> {
    fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        UnGraph::with_capacity(vertex_capacity, edge_capacity)
    }

    fn insert_vertex(&mut self, vertex: u32) {
        self.add_vertex(vertex).expect("fresh vertex label");
    }

    fn insert_edge(&mut self, from: u32, to: u32, weight: W) {
        if !self.contains_edge(&from, &to) {
            self.add_edge(from, to, weight).expect("endpoints exist");
        }
    }
}

pub fn create_path<W: Default, G: Create<W>>(vertex_count: u32) -> G {
    let mut graph = G::with_capacity(
        vertex_count as usize,
        vertex_count.saturating_sub(1) as usize,
    );

    for v in 0..vertex_count {
        graph.insert_vertex(v);

        if v > 0 {
            graph.insert_edge(v - 1, v, W::default());
        }
    }

    graph
}

pub fn create_complete<W: Default, G: Create<W>>(vertex_count: u32) -> G {
    let n = vertex_count as usize;
    let edge_count = if G::EdgeType::is_directed() {
        n * n.saturating_sub(1)
    } else {
        n * n.saturating_sub(1) / 2
    };

    let mut graph = G::with_capacity(n, edge_count);

    for v in 0..vertex_count {
        graph.insert_vertex(v);
    }

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !G::EdgeType::is_directed() && v > u {
                break;
            }

            graph.insert_edge(u, v, W::default());
        }
    }

    graph
}

fn degree_dir(dir: Direction) -> &'static str {
    match dir {
        Direction::Outgoing => "out",
        Direction::Incoming => "in",
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertices iterator count ({0}) is not equal to vertex count ({1})")]
    VerticesVertexCountMismatch(usize, usize),
    #[error("vertex at position {0} does not map back to its position")]
    VertexIndexInvalid(usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("edge number {0} (zero-based) has an endpoint that is not a vertex")]
    EdgeEndpointMissing(usize),
    #[error("edge number {0} (zero-based) is missing in the {} adjacency", degree_dir(*.1))]
    EdgeNotInAdjacency(usize, Direction),
    #[error("neighbor of vertex at position {0} is not connected by an edge")]
    NeighborWithoutEdge(usize),
    #[error("sum of degrees ({0}) is not equal to doubled edge count minus loops ({1})")]
    HandshakingLemma(usize, usize),
    #[error("sum of {} degrees ({0}) is not equal to edge count ({1})", degree_dir(*.2))]
    HandshakingLemmaDirected(usize, usize, Direction),
}

/// Checks that the adjacency and the edge cost map of a graph describe the
/// same set of edges.
pub fn check_consistency<G>(graph: &G) -> Result<(), ConsistencyCheckError>
where
    G: VertexSet + EdgeSet + Neighbors,
{
    fn cmp<F, E>(actual: usize, expected: usize, error: F) -> Result<(), E>
    where
        F: FnOnce(usize, usize) -> E,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let vertex_count = graph.vertex_count();
    let edge_count = graph.edge_count();

    cmp(
        graph.vertices().count(),
        vertex_count,
        ConsistencyCheckError::VerticesVertexCountMismatch,
    )?;
    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    for (i, vertex) in graph.vertices().enumerate() {
        if graph.vertex_index(vertex) != Some(i) || graph.vertex_at(i) != Some(vertex) {
            return Err(ConsistencyCheckError::VertexIndexInvalid(i));
        }
    }

    let mut loops = 0;

    for (i, edge) in graph.edges().enumerate() {
        if !graph.contains_vertex(edge.origin) || !graph.contains_vertex(edge.destination) {
            return Err(ConsistencyCheckError::EdgeEndpointMissing(i));
        }

        if edge.origin == edge.destination {
            loops += 1;
        }

        for (from, to, dir) in [
            (edge.origin, edge.destination, Direction::Outgoing),
            (edge.destination, edge.origin, Direction::Incoming),
        ] {
            if !graph.neighbors_directed(from, dir).any(|n| n == to) {
                return Err(ConsistencyCheckError::EdgeNotInAdjacency(i, dir));
            }
        }
    }

    for (i, vertex) in graph.vertices().enumerate() {
        let has_edges = graph
            .neighbors_directed(vertex, Direction::Outgoing)
            .all(|n| graph.contains_edge(vertex, n))
            && graph
                .neighbors_directed(vertex, Direction::Incoming)
                .all(|n| graph.contains_edge(n, vertex));

        if !has_edges {
            return Err(ConsistencyCheckError::NeighborWithoutEdge(i));
        }
    }

    let out_deg_sum = graph
        .vertices()
        .map(|v| graph.degree_directed(v, Direction::Outgoing))
        .sum::<usize>();

    let in_deg_sum = graph
        .vertices()
        .map(|v| graph.degree_directed(v, Direction::Incoming))
        .sum::<usize>();

    if graph.is_directed() {
        fn handshaking_lemma_directed(
            dir: Direction,
        ) -> impl FnOnce(usize, usize) -> ConsistencyCheckError {
            move |actual, expected| {
                ConsistencyCheckError::HandshakingLemmaDirected(actual, expected, dir)
            }
        }

        // https://en.wikipedia.org/wiki/Handshaking_lemma
        cmp(
            in_deg_sum,
            edge_count,
            handshaking_lemma_directed(Direction::Incoming),
        )?;
        cmp(
            out_deg_sum,
            edge_count,
            handshaking_lemma_directed(Direction::Outgoing),
        )?;
    } else {
        // Self-loops are stored once in the neighbor list.
        cmp(
            out_deg_sum,
            2 * edge_count - loops,
            ConsistencyCheckError::HandshakingLemma,
        )?;
    }

    Ok(())
}

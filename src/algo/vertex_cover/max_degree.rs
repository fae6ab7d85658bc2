use tracing::{debug, trace};

use crate::{
    common::FxIndexSet,
    core::{marker::Direction, EdgeSet, Neighbors, VertexSet},
};

pub fn max_degree<G>(graph: &G) -> FxIndexSet<G::Vertex>
where
    G: VertexSet + EdgeSet + Neighbors,
{
    // Number of uncovered edges incident to each vertex, indexed by the
    // position in the enumeration order. A self-loop counts once.
    let mut remaining = graph
        .vertices()
        .map(|v| graph.degree_directed(v, Direction::Outgoing))
        .collect::<Vec<_>>();
    let mut uncovered = graph.edge_count();
    let mut cover = FxIndexSet::default();

    while uncovered > 0 {
        // Strict comparison keeps the earliest vertex on ties.
        let (i, degree) = remaining
            .iter()
            .copied()
            .enumerate()
            .fold((0, 0), |best, (i, deg)| if deg > best.1 { (i, deg) } else { best });

        if degree == 0 {
            // Only reachable if the graph reports inconsistent counts.
            break;
        }

        let vertex = graph.vertex_at(i).expect("index in bounds");

        uncovered -= degree;
        remaining[i] = 0;

        for neighbor in graph.neighbors_directed(vertex, Direction::Outgoing) {
            if neighbor == vertex {
                continue;
            }

            if let Some(j) = graph.vertex_index(neighbor) {
                remaining[j] = remaining[j].saturating_sub(1);
            }
        }

        trace!(?vertex, degree, uncovered, "vertex added to cover");

        cover.insert(vertex.clone());
    }

    debug!(size = cover.len(), "max degree cover found");

    cover
}

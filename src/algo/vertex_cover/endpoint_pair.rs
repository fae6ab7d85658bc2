use fixedbitset::FixedBitSet;
use tracing::{debug, trace};

use crate::{
    common::FxIndexSet,
    core::{marker::Direction, Neighbors, VertexSet},
};

pub fn endpoint_pair<G>(graph: &G) -> FxIndexSet<G::Vertex>
where
    G: VertexSet + Neighbors,
{
    // Vertices are referred to by their position in the enumeration order.
    let mut marked = FixedBitSet::with_capacity(graph.vertex_count());
    let mut cover = FxIndexSet::default();

    for (i, vertex) in graph.vertices().enumerate() {
        if marked.contains(i) {
            continue;
        }

        let unmarked = graph
            .neighbors_directed(vertex, Direction::Outgoing)
            .filter_map(|n| graph.vertex_index(n).map(|j| (j, n)))
            .find(|(j, _)| !marked.contains(*j));

        // Isolated or all incident edges are covered already.
        let Some((j, neighbor)) = unmarked else {
            continue;
        };

        marked.insert(i);
        marked.insert(j);

        cover.insert(vertex.clone());
        cover.insert(neighbor.clone());

        trace!(?vertex, ?neighbor, "edge endpoints added to cover");
    }

    debug!(size = cover.len(), "endpoint pair cover found");

    cover
}

//! Random graph generation.

use tracing::debug;

use crate::graph::DiGraph;

/// Largest weight assigned by [`random_graph`].
pub const MAX_WEIGHT: u32 = 1000;

/// Generates a directed graph with vertices `0..vertex_count` and
/// `edge_count` distinct edges chosen uniformly at random.
///
/// Self-loops are never generated, so the edge count is capped at
/// `vertex_count * (vertex_count - 1)`. Weights are drawn from
/// `0..=MAX_WEIGHT`.
///
/// # Examples
///
/// ```
/// use grafo::generate::random_graph;
///
/// let mut rng = fastrand::Rng::with_seed(42);
/// let graph = random_graph(&mut rng, 5, 100);
///
/// assert_eq!(graph.vertex_count(), 5);
/// assert_eq!(graph.edge_count(), 20);
/// ```
pub fn random_graph(rng: &mut fastrand::Rng, vertex_count: u32, edge_count: usize) -> DiGraph<u32, u32> {
    let n = vertex_count as usize;
    let max_edges = n * n.saturating_sub(1);
    let edge_count = edge_count.min(max_edges);

    let mut graph = DiGraph::with_capacity(n, edge_count);

    for vertex in 0..vertex_count {
        graph.add_vertex(vertex).expect("fresh vertex label");
    }

    if edge_count * 2 > max_edges {
        // Dense graphs would waste most of the samples on rejections, choose
        // from all candidate pairs instead.
        let mut candidates = (0..vertex_count)
            .flat_map(|u| (0..vertex_count).filter(move |&v| v != u).map(move |v| (u, v)))
            .collect::<Vec<_>>();

        rng.shuffle(&mut candidates);

        for (from, to) in candidates.into_iter().take(edge_count) {
            graph
                .add_edge(from, to, rng.u32(0..=MAX_WEIGHT))
                .expect("candidate pairs are distinct");
        }
    } else {
        while graph.edge_count() < edge_count {
            let from = rng.u32(0..vertex_count);
            let to = rng.u32(0..vertex_count);

            if from != to && !graph.contains_edge(&from, &to) {
                graph
                    .add_edge(from, to, rng.u32(0..=MAX_WEIGHT))
                    .expect("edge checked to be new");
            }
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "random graph generated"
    );

    graph
}

use tracing::{debug, trace};

use crate::{
    common::{FxIndexSet, Matrix},
    core::{weight::Weight, EdgeSet, GraphBase, VertexSet},
};

use super::{AllPairs, Cost, Step};

pub fn floyd_warshall<G, F>(graph: &G, mut observer: F) -> AllPairs<G::Vertex, G::Weight>
where
    G: VertexSet + EdgeSet + GraphBase,
    G::Weight: Weight,
    F: FnMut(Step<'_, G::Vertex, G::Weight>),
{
    let vertices = graph.vertices().cloned().collect::<FxIndexSet<_>>();
    let n = vertices.len();

    let mut cost = Matrix::new(n, Cost::Unreachable);
    let mut pred = Matrix::new(n, None);

    for i in 0..n {
        cost[(i, i)] = Cost::Finite(<G::Weight as Weight>::zero());
    }

    for edge in graph.edges() {
        let (Some(i), Some(j)) = (
            vertices.get_index_of(edge.origin),
            vertices.get_index_of(edge.destination),
        ) else {
            continue;
        };

        // Trivial walks cost zero, self-loops do not change that.
        if i == j {
            continue;
        }

        cost[(i, j)] = Cost::Finite(edge.weight.clone());
        pred[(i, j)] = Some(i);

        if !graph.is_directed() {
            cost[(j, i)] = Cost::Finite(edge.weight.clone());
            pred[(j, i)] = Some(j);
        }
    }

    let zero = Cost::Finite(<G::Weight as Weight>::zero());
    let mut negative_cycle = false;

    for (k, vertex) in vertices.iter().enumerate() {
        for i in 0..n {
            if cost[(i, k)] == Cost::Unreachable {
                continue;
            }

            for j in 0..n {
                if cost[(k, j)] == Cost::Unreachable {
                    continue;
                }

                let through = cost[(i, k)].concat(&cost[(k, j)]);

                if cost[(i, j)] > through {
                    cost[(i, j)] = through;
                    pred[(i, j)] = pred[(k, j)];
                }
            }
        }

        trace!(k, ?vertex, "intermediate vertex processed");

        observer(Step {
            k,
            vertex,
            cost: &cost,
            pred: &pred,
        });

        // Unsigned costs cannot form a negative cycle. Once a diagonal entry
        // is negative the result is settled and further relaxation only
        // drives the costs towards overflow.
        if !<G::Weight as Weight>::is_unsigned() && cost.diagonal().any(|c| *c < zero) {
            negative_cycle = true;
            break;
        }
    }

    if negative_cycle {
        debug!("negative cost cycle detected");
    }

    AllPairs {
        vertices,
        cost,
        pred,
        negative_cycle,
    }
}

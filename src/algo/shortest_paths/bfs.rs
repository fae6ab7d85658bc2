use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::core::{marker::Direction, Neighbors, VertexSet};

use super::{Error, ShortestPaths};

pub fn bfs<G>(
    graph: &G,
    source: G::Vertex,
    goal: Option<G::Vertex>,
) -> Result<ShortestPaths<G>, Error>
where
    G: Neighbors + VertexSet,
{
    if !graph.contains_vertex(&source) {
        return Err(Error::UnknownVertex);
    }

    if let Some(ref goal) = goal {
        if !graph.contains_vertex(goal) {
            return Err(Error::UnknownVertex);
        }
    }

    let mut visited = FxHashSet::default();
    let mut dist = FxHashMap::default();
    let mut pred = FxHashMap::default();
    let mut queue = VecDeque::new();

    visited.insert(source.clone());
    dist.insert(source.clone(), 0);
    queue.push_back((source.clone(), 0));

    let mut reached = goal.as_ref() == Some(&source);

    'search: while !reached {
        let Some((vertex, vertex_dist)) = queue.pop_front() else {
            break;
        };

        trace!(?vertex, dist = vertex_dist, "expanding vertex");

        for next in graph.neighbors_directed(&vertex, Direction::Outgoing) {
            if !visited.insert(next.clone()) {
                continue;
            }

            dist.insert(next.clone(), vertex_dist + 1);
            pred.insert(next.clone(), vertex.clone());

            if goal.as_ref() == Some(next) {
                // The goal is discovered, its distance and predecessor are
                // final in breadth-first order.
                reached = true;
                break 'search;
            }

            queue.push_back((next.clone(), vertex_dist + 1));
        }
    }

    if let Some(ref goal) = goal {
        if !reached {
            debug!(?source, ?goal, "goal not reachable from source");
            return Err(Error::GoalNotReached);
        }
    }

    Ok(ShortestPaths { source, dist, pred })
}

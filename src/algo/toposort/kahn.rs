use std::collections::VecDeque;

use tracing::debug;

use crate::core::{marker::Direction, GraphBase, Neighbors, VertexSet};

use super::Error;

pub fn kahn<'a, G>(graph: &'a G) -> KahnIter<'a, G>
where
    G: Neighbors + VertexSet + 'a,
{
    let mut in_deg = Vec::with_capacity(graph.vertex_count());
    let mut queue = VecDeque::new();

    for (i, v) in graph.vertices().enumerate() {
        let deg = graph.degree_directed(v, Direction::Incoming);
        in_deg.push(deg);

        if deg == 0 {
            queue.push_back(i);
        }
    }

    KahnIter {
        graph,
        in_deg,
        queue,
        visited: 0,
        cycle: false,
    }
}

pub struct KahnIter<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    in_deg: Vec<usize>,
    // Vertices are referred to by their position in the enumeration order.
    queue: VecDeque<usize>,
    visited: usize,
    cycle: bool,
}

impl<'a, G> Iterator for KahnIter<'a, G>
where
    G: Neighbors + VertexSet,
{
    type Item = Result<&'a G::Vertex, Error<G::Vertex>>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;

        if let Some(i) = self.queue.pop_front() {
            self.visited += 1;

            let vertex = graph.vertex_at(i).expect("queued vertices exist");

            for n in graph.neighbors_directed(vertex, Direction::Outgoing) {
                let j = graph.vertex_index(n).expect("neighbors exist");
                let deg = &mut self.in_deg[j];
                *deg -= 1;

                if *deg == 0 {
                    self.queue.push_back(j);
                }
            }

            Some(Ok(vertex))
        } else if self.visited != self.in_deg.len() {
            // `self.in_deg.len()` corresponds to vertex count.

            if self.cycle {
                // We discovered a cycle in the previous iteration, but next
                // vertex was still requested.
                None
            } else {
                self.cycle = true;

                // Find a vertex that has a non-zero in degree. It is reachable
                // from a cycle, otherwise its in degree would be reduced to
                // zero. Walking backwards over unvisited predecessors must
                // eventually repeat a vertex, which then lies on a cycle.
                let mut i = self.in_deg.iter().position(|deg| *deg > 0)?;
                let mut seen = vec![false; self.in_deg.len()];

                while !seen[i] {
                    seen[i] = true;

                    let vertex = graph.vertex_at(i)?;
                    i = graph
                        .neighbors_directed(vertex, Direction::Incoming)
                        .filter_map(|n| graph.vertex_index(n))
                        .find(|&j| self.in_deg[j] > 0)?;
                }

                let vertex = graph.vertex_at(i)?.clone();
                debug!(?vertex, "cycle detected");

                Some(Err(Error::Cycle { vertex }))
            }
        } else {
            None
        }
    }
}

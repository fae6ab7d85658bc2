use crate::core::{GraphBase, Neighbors, VertexSet};

use super::{bfs::bfs, Error, ShortestPaths};

pub struct ShortestPathsBuilder<'a, G>
where
    G: GraphBase,
{
    graph: &'a G,
    goal: Option<G::Vertex>,
}

impl<G> ShortestPaths<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> ShortestPathsBuilder<'_, G> {
        ShortestPathsBuilder { graph, goal: None }
    }
}

impl<'a, G> ShortestPathsBuilder<'a, G>
where
    G: GraphBase,
{
    /// Stop the search as soon as the goal is discovered.
    pub fn goal(self, goal: G::Vertex) -> Self {
        Self {
            goal: Some(goal),
            ..self
        }
    }

    pub fn run(self, source: G::Vertex) -> Result<ShortestPaths<G>, Error>
    where
        G: Neighbors + VertexSet,
    {
        bfs(self.graph, source, self.goal)
    }
}

use crate::core::{marker::Directed, GraphBase, Neighbors, VertexSet};

use super::{kahn::kahn, TopoSort};

pub struct TopoSortBuilder<'a, G> {
    graph: &'a G,
}

impl<G> TopoSort<'_, G>
where
    G: GraphBase<EdgeType = Directed>,
{
    pub fn on(graph: &G) -> TopoSortBuilder<'_, G> {
        TopoSortBuilder { graph }
    }
}

impl<'a, G> TopoSortBuilder<'a, G>
where
    G: GraphBase<EdgeType = Directed> + Neighbors + VertexSet,
{
    pub fn run(self) -> TopoSort<'a, G> {
        TopoSort {
            inner: kahn(self.graph),
        }
    }
}

use std::marker::PhantomData;

use crate::core::{
    marker::Directed, weight::Weight, EdgeSet, GraphBase, Label, Neighbors, VertexSet,
};

use super::{critical_path::critical_path, Durations, Error, Schedule};

pub struct ScheduleBuilder<'a, G, W> {
    graph: &'a G,
    ty: PhantomData<fn() -> W>,
}

impl<V, W> Schedule<V, W>
where
    V: Label,
    W: Weight,
{
    #[must_use = "the schedule is computed only after `run` is called"]
    pub fn on<G>(graph: &G) -> ScheduleBuilder<'_, G, W>
    where
        G: GraphBase<Vertex = V, EdgeType = Directed>,
    {
        ScheduleBuilder {
            graph,
            ty: PhantomData,
        }
    }
}

impl<'a, G, W> ScheduleBuilder<'a, G, W>
where
    G: GraphBase<EdgeType = Directed> + VertexSet + EdgeSet + Neighbors,
    W: Weight,
{
    pub fn run<D>(self, durations: D) -> Result<Schedule<G::Vertex, W>, Error<G::Vertex>>
    where
        D: Durations<G::Vertex, W>,
    {
        critical_path(self.graph, durations)
    }
}

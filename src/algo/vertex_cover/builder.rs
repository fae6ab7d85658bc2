use crate::core::{marker::Undirected, EdgeSet, GraphBase, Label, Neighbors, VertexSet};

use super::{
    algo, endpoint_pair::endpoint_pair, max_degree::max_degree, Algo, VertexCover,
};

pub struct VertexCoverBuilder<'a, G, A> {
    graph: &'a G,
    algo: A,
}

impl<V: Label> VertexCover<V> {
    #[must_use = "the cover is computed only after `run` is called"]
    pub fn on<G>(graph: &G) -> VertexCoverBuilder<'_, G, algo::AnyAlgo>
    where
        G: GraphBase<Vertex = V, EdgeType = Undirected>,
    {
        VertexCoverBuilder {
            graph,
            algo: algo::AnyAlgo,
        }
    }
}

impl<'a, G, A> VertexCoverBuilder<'a, G, A>
where
    G: GraphBase<EdgeType = Undirected>,
{
    pub fn endpoint_pair(self) -> VertexCoverBuilder<'a, G, algo::EndpointPair> {
        VertexCoverBuilder {
            graph: self.graph,
            algo: algo::EndpointPair,
        }
    }

    pub fn max_degree(self) -> VertexCoverBuilder<'a, G, algo::MaxDegree> {
        VertexCoverBuilder {
            graph: self.graph,
            algo: algo::MaxDegree,
        }
    }

    pub fn using(self, algo: Algo) -> VertexCoverBuilder<'a, G, algo::SpecificAlgo> {
        VertexCoverBuilder {
            graph: self.graph,
            algo: algo::SpecificAlgo(algo),
        }
    }
}

impl<'a, G> VertexCoverBuilder<'a, G, algo::AnyAlgo>
where
    G: GraphBase<EdgeType = Undirected> + VertexSet + EdgeSet + Neighbors,
{
    pub fn run(self) -> VertexCover<G::Vertex> {
        self.using(Algo::MaxDegree).run()
    }
}

impl<'a, G> VertexCoverBuilder<'a, G, algo::EndpointPair>
where
    G: GraphBase<EdgeType = Undirected> + VertexSet + Neighbors,
{
    pub fn run(self) -> VertexCover<G::Vertex> {
        VertexCover {
            vertices: endpoint_pair(self.graph),
        }
    }
}

impl<'a, G> VertexCoverBuilder<'a, G, algo::MaxDegree>
where
    G: GraphBase<EdgeType = Undirected> + VertexSet + EdgeSet + Neighbors,
{
    pub fn run(self) -> VertexCover<G::Vertex> {
        VertexCover {
            vertices: max_degree(self.graph),
        }
    }
}

impl<'a, G> VertexCoverBuilder<'a, G, algo::SpecificAlgo>
where
    G: GraphBase<EdgeType = Undirected> + VertexSet + EdgeSet + Neighbors,
{
    pub fn run(self) -> VertexCover<G::Vertex> {
        let vertices = match self.algo.0 {
            Algo::EndpointPair => endpoint_pair(self.graph),
            Algo::MaxDegree => max_degree(self.graph),
        };

        VertexCover { vertices }
    }
}

use std::{fmt, marker::PhantomData};

use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::graph::{DiGraph, UnGraph};

use super::testing::Create;

/// Directed graphs over vertices `0..n` with weights drawn from `weight`.
pub fn graph_directed<W: Strategy>(weight: W) -> GraphStrategy<W, DiGraph<u32, W::Value>> {
    GraphStrategy::new(weight)
}

/// Undirected graphs over vertices `0..n` with weights drawn from `weight`.
pub fn graph_undirected<W: Strategy>(weight: W) -> GraphStrategy<W, UnGraph<u32, W::Value>> {
    GraphStrategy::new(weight)
}

pub struct GraphStrategy<W: Strategy, G> {
    weight: W,
    graph: PhantomData<G>,
    params: StrategyParams,
}

// G is phantom data, we should not require Debug bound on it.
impl<W: Strategy, G> fmt::Debug for GraphStrategy<W, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("weight", &self.weight)
            .field("params", &self.params)
            .finish()
    }
}

impl<W: Strategy, G> GraphStrategy<W, G> {
    pub fn new(weight: W) -> Self {
        Self {
            weight,
            graph: PhantomData,
            params: StrategyParams::default(),
        }
    }

    pub fn max_size(self, max_size: usize) -> Self {
        Self {
            params: StrategyParams {
                max_size,
                ..self.params
            },
            ..self
        }
    }

    /// Only edges from lower to higher vertex are generated, so directed
    /// graphs are acyclic and every `0..n` order is topological.
    pub fn acyclic(self) -> Self {
        Self {
            params: StrategyParams {
                acyclic: true,
                ..self.params
            },
            ..self
        }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            params: StrategyParams {
                allow_loops: true,
                ..self.params
            },
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self {
            params: StrategyParams {
                density,
                ..self.params
            },
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct StrategyParams {
    max_size: usize,
    acyclic: bool,
    allow_loops: bool,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 64,
            acyclic: false,
            allow_loops: false,
            density: 1.0,
        }
    }
}

impl<W: Strategy, G: Create<W::Value> + fmt::Debug> Strategy for GraphStrategy<W, G> {
    type Tree = GraphValueTree<W::Tree, G>;
    type Value = G;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f32>() * self.params.density;

        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf

        let mut edges = Vec::new();

        let mut v = 1;
        let mut w = usize::MAX; // -1

        while v < n {
            let r: f32 = runner.rng().gen();
            w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

            if self.params.allow_loops {
                // Using `w > v` instead of `w >= v` to allow loops.
                while w > v && v < n {
                    w -= v;
                    v += 1;
                }
            } else {
                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }
            }

            if v < n {
                let weight = self.weight.new_tree(runner)?;

                // For directed acyclic graph or in half of the cases, pick the
                // vertices such that w < v. In other cases, swap the vertices
                // so that a directed cycle is possible.
                let (s, t) = if self.params.acyclic || runner.rng().gen_bool(0.5) {
                    (w, v)
                } else {
                    (v, w)
                };

                edges.push((s, t, weight));
            }
        }

        Ok(GraphValueTree {
            vertex_count: n,
            edges,
            current: Removed::default(),
            high: None,
            command: Some(Shrink::Vertex(0)),
            graph: PhantomData,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shrink {
    Vertex(usize),
    Edge(usize),
}

#[derive(Debug, Clone, Default)]
struct Removed {
    vertices: FxHashSet<usize>,
    edges: FxHashSet<usize>,
}

/// Shrinks the structure by removing vertices one by one and then edges one
/// by one. Removing a vertex removes its incident edges and relabels the
/// remaining vertices to stay compact.
pub struct GraphValueTree<W: ValueTree, G> {
    vertex_count: usize,
    edges: Vec<(usize, usize, W)>,
    current: Removed,
    high: Option<Removed>,
    command: Option<Shrink>,
    graph: PhantomData<G>,
}

impl<W: ValueTree, G> fmt::Debug for GraphValueTree<W, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphValueTree")
            .field("vertex_count", &self.vertex_count)
            .field("edge_count", &self.edges.len())
            .field("current", &self.current)
            .field("command", &self.command)
            .finish()
    }
}

impl<W: ValueTree, G> GraphValueTree<W, G> {
    fn vertex_exists(&self, v: usize) -> bool {
        !self.current.vertices.contains(&v)
    }

    fn edge_exists(&self, e: usize) -> bool {
        let (src, dst, _) = &self.edges[e];
        self.vertex_exists(*src) && self.vertex_exists(*dst) && !self.current.edges.contains(&e)
    }

    fn next_command(&self, command: Shrink) -> Option<Shrink> {
        match command {
            Shrink::Vertex(v) => ((v + 1)..self.vertex_count)
                .find(|&w| self.vertex_exists(w))
                .map(Shrink::Vertex)
                .or_else(|| {
                    (0..self.edges.len())
                        .find(|&e| self.edge_exists(e))
                        .map(Shrink::Edge)
                }),
            Shrink::Edge(e) => ((e + 1)..self.edges.len())
                .find(|&f| self.edge_exists(f))
                .map(Shrink::Edge),
        }
    }
}

impl<W: ValueTree, G: Create<W::Value> + fmt::Debug> ValueTree for GraphValueTree<W, G> {
    type Value = G;

    fn current(&self) -> Self::Value {
        let mut graph = G::with_capacity(
            self.vertex_count - self.current.vertices.len(),
            self.edges.len(),
        );
        let mut ids = Vec::with_capacity(self.vertex_count);
        let mut next = 0;

        for v in 0..self.vertex_count {
            if self.vertex_exists(v) {
                graph.insert_vertex(next);
                ids.push(Some(next));
                next += 1;
            } else {
                ids.push(None);
            }
        }

        for (e, (src, dst, weight)) in self.edges.iter().enumerate() {
            if !self.current.edges.contains(&e) {
                if let (Some(src), Some(dst)) = (ids[*src], ids[*dst]) {
                    graph.insert_edge(src, dst, weight.current());
                }
            }
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        let command = match self.command {
            Some(Shrink::Vertex(v)) if !self.vertex_exists(v) || v >= self.vertex_count => {
                self.next_command(Shrink::Vertex(v))
            }
            command => command,
        };

        let Some(command) = command else {
            self.command = None;
            return false;
        };

        self.high = Some(self.current.clone());

        match command {
            Shrink::Vertex(v) => {
                self.current.vertices.insert(v);
            }
            Shrink::Edge(e) => {
                self.current.edges.insert(e);
            }
        }

        self.command = self.next_command(command);
        true
    }

    fn complicate(&mut self) -> bool {
        match self.high.take() {
            Some(high) => {
                self.current = high;
                true
            }
            None => false,
        }
    }
}

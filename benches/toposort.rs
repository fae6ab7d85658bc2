mod common;

use common::{grafo_random_directed, petgraph_random_directed, RANDOM_SEED};
use fastrand::Rng;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn grafo_kahn_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = grafo_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| grafo::algo::TopoSort::on(&graph).run().collect::<Vec<_>>());
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn petgraph_toposort_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::toposort(&graph, None));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5])]
fn grafo_schedule_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = grafo_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let durations = grafo::algo::schedule::from_fn(|v: &u32| Some(*v % 17));

    bencher.bench(|| grafo::algo::Schedule::on(&graph).run(&durations));
}

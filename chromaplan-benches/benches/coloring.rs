//! Perturbation and greedy coloring benchmarks.
//!
//! Mirrors one CLI trial: `remove_random_edges` on a fresh copy, then
//! `greedy_color` on graphs damaged to different degrees.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use chromaplan_benches::{
    error::BenchSetupError,
    fixtures::{SEED, perturbed_graph, planar_graph},
    params::{GraphBenchParams, PerturbBenchParams},
};
use chromaplan_core::{greedy_color, remove_random_edges};

/// Vertex target for every graph in this file.
const VERTEX_COUNT: usize = 100_000;

/// Removal probabilities, in percent.
const REMOVAL_PERCENTS: &[u8] = &[0, 10, 50, 90];

fn greedy_color_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("greedy_color");
    group.sample_size(20);

    for &removal_percent in REMOVAL_PERCENTS {
        let params = PerturbBenchParams {
            vertex_count: VERTEX_COUNT,
            removal_percent,
        };
        let graph = perturbed_graph(params)?;
        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            b.iter(|| greedy_color(graph));
        });
    }

    group.finish();
    Ok(())
}

fn remove_random_edges_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("remove_random_edges");
    group.sample_size(20);

    let graph = planar_graph(GraphBenchParams {
        vertex_count: VERTEX_COUNT,
    })?;
    for &removal_percent in REMOVAL_PERCENTS {
        let params = PerturbBenchParams {
            vertex_count: VERTEX_COUNT,
            removal_percent,
        };
        let probability = params.probability();
        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            let mut rng = SmallRng::seed_from_u64(SEED);
            b.iter_batched(
                || graph.clone(),
                |mut copy| remove_random_edges(&mut copy, probability, &mut rng),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
    Ok(())
}

fn greedy_color_bench(c: &mut Criterion) {
    if let Err(err) = greedy_color_impl(c) {
        panic!("greedy_color benchmark setup failed: {err}");
    }
}

fn remove_random_edges_bench(c: &mut Criterion) {
    if let Err(err) = remove_random_edges_impl(c) {
        panic!("remove_random_edges benchmark setup failed: {err}");
    }
}

criterion_group!(benches, greedy_color_bench, remove_random_edges_bench);
criterion_main!(benches);

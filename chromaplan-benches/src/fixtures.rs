//! Seeded graph fixtures shared by the benchmarks.

use chromaplan_core::{Graph, GraphGenerator, remove_random_edges};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    error::BenchSetupError,
    params::{GraphBenchParams, PerturbBenchParams},
};

/// Seed used for every perturbation fixture.
pub const SEED: u64 = 42;

/// Generates the planar graph described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Core`] when the vertex target is below three.
pub fn planar_graph(params: GraphBenchParams) -> Result<Graph, BenchSetupError> {
    Ok(GraphGenerator::new(params.vertex_count)?.generate())
}

/// Generates a planar graph and removes edges from it with a fixed seed.
///
/// # Errors
/// Returns [`BenchSetupError::Core`] when the vertex target is below three.
pub fn perturbed_graph(params: PerturbBenchParams) -> Result<Graph, BenchSetupError> {
    let mut graph = planar_graph(GraphBenchParams {
        vertex_count: params.vertex_count,
    })?;
    let mut rng = SmallRng::seed_from_u64(SEED);
    remove_random_edges(&mut graph, params.probability(), &mut rng);
    Ok(graph)
}

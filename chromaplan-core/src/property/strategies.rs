//! Graph strategies for the property suites.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;
use crate::test_utils::generated_graph;

/// Largest subdivision graph generated per case.
const MAX_GENERATED_VERTICES: usize = 400;
/// Largest random graph generated per case.
const MAX_RANDOM_VERTICES: usize = 48;

/// Target vertex counts for generation.
pub(super) fn target_strategy() -> impl Strategy<Value = usize> {
    3..=MAX_GENERATED_VERTICES
}

/// Subdivision graphs of random size.
pub(super) fn generated_graph_strategy() -> impl Strategy<Value = Graph> {
    target_strategy().prop_map(generated_graph)
}

/// Random simple symmetric graphs built from a seed.
pub(super) fn random_graph_strategy() -> impl Strategy<Value = Graph> {
    any::<u64>().prop_map(|seed| random_graph(&mut SmallRng::seed_from_u64(seed)))
}

/// Either family, so coloring sees dense and planar inputs alike.
pub(super) fn any_graph_strategy() -> impl Strategy<Value = Graph> {
    prop_oneof![generated_graph_strategy(), random_graph_strategy()]
}

/// Adds each vertex pair as an edge with a per-graph probability.
pub(super) fn random_graph(rng: &mut SmallRng) -> Graph {
    let vertex_count = rng.gen_range(0..=MAX_RANDOM_VERTICES);
    let edge_probability: f64 = rng.gen_range(0.0..=0.6);
    let mut graph = Graph::with_vertices(vertex_count);
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                graph.add_edge(source, target);
            }
        }
    }
    graph
}

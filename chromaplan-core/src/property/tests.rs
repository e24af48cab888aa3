//! Proptest runners and targeted rstest cases for the property suites.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rstest::rstest;

use crate::coloring::greedy_color;
use crate::graph::Graph;
use crate::perturb::remove_random_edges;
use crate::test_utils::{generated_graph, suite_proptest_config};

use super::runners::{
    expected_generated_edges, run_coloring_property, run_generation_property,
    run_perturbation_property,
};
use super::strategies::{
    any_graph_strategy, generated_graph_strategy, random_graph, target_strategy,
};

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn generation_structure(target in target_strategy()) {
        run_generation_property(target)?;
    }

    #[test]
    fn perturbation_preserves_symmetry(
        graph in any_graph_strategy(),
        probability in 0.0_f64..1.0,
        seed in any::<u64>(),
    ) {
        run_perturbation_property(&graph, probability, seed)?;
    }

    #[test]
    fn coloring_is_proper_where_assigned(graph in any_graph_strategy()) {
        run_coloring_property(&graph)?;
    }

    #[test]
    fn coloring_survives_perturbation(
        graph in generated_graph_strategy(),
        probability in 0.0_f64..1.0,
        seed in any::<u64>(),
    ) {
        let mut damaged = graph.clone();
        remove_random_edges(&mut damaged, probability, &mut SmallRng::seed_from_u64(seed));
        run_coloring_property(&damaged)?;
    }
}

#[rstest]
#[case::base_target_subdivides_once(3)]
#[case::first_subdivision(4)]
#[case::mid_round(6)]
#[case::round_boundary(7)]
#[case::larger(1_000)]
fn generation_structure_rstest(#[case] target: usize) {
    run_generation_property(target).expect("generation property must hold");
}

#[rstest]
#[case::seed_42(42)]
#[case::seed_999(999)]
#[case::seed_7777(7777)]
fn coloring_property_on_random_graphs(#[case] seed: u64) {
    let graph = random_graph(&mut SmallRng::seed_from_u64(seed));
    run_coloring_property(&graph).expect("coloring property must hold");
}

#[rstest]
fn four_vertex_generation_matches_subdivided_triangle() {
    let graph = generated_graph(4);
    let expected = Graph::from_adjacency(vec![
        vec![1, 2, 3],
        vec![0, 2, 3],
        vec![0, 1, 3],
        vec![0, 1, 2],
    ])
    .expect("fixture ids are in range");
    assert_eq!(graph, expected);
    assert_eq!(graph.edge_count(), expected_generated_edges(4));
}

#[rstest]
fn near_certain_removal_strips_almost_everything() {
    let graph = generated_graph(2_000);
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut remaining = 0_usize;
    for _ in 0..10 {
        let mut damaged = graph.clone();
        remove_random_edges(&mut damaged, 0.999_999, &mut rng);
        remaining += damaged.edge_count();
    }
    // 10 passes over ~6000 edges at one-in-a-million survival.
    assert!(remaining <= 2, "{remaining} edges survived");
}

#[rstest]
fn isolated_vertices_take_the_first_color() {
    let graph = Graph::with_vertices(5);
    let coloring = greedy_color(&graph);
    assert!(coloring.iter_values().all(|(_, value)| value == 1));
}

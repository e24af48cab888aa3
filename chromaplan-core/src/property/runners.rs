//! Property runners shared by the proptest and rstest suites.
//!
//! - **Generation**: target reached exactly (four vertices at minimum), `3n - 6` edges, simple,
//!   symmetric, connected, and every added vertex hangs off three earlier
//!   corners.
//! - **Perturbation**: symmetry survives and removed plus remaining edges
//!   equal the original count.
//! - **Coloring**: one color per vertex and no monochromatic edge between
//!   colored endpoints.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::{
    coloring::greedy_color,
    graph::Graph,
    invariants::{check_simple, check_symmetry, is_connected},
    perturb::remove_random_edges,
    test_utils::generated_graph,
};

/// Vertex count produced for `target`; the base triangle is always
/// subdivided once.
pub(super) fn expected_generated_vertices(target: usize) -> usize {
    target.max(4)
}

/// Edge count of a subdivision graph on `vertex_count` vertices.
pub(super) fn expected_generated_edges(vertex_count: usize) -> usize {
    3 + 3 * (vertex_count - 3)
}

fn fail(message: String) -> TestCaseError {
    TestCaseError::fail(message)
}

pub(super) fn run_generation_property(target: usize) -> TestCaseResult {
    let graph = generated_graph(target);
    let vertices = graph.vertex_count();

    if vertices != expected_generated_vertices(target) {
        return Err(fail(format!(
            "target {target} produced {vertices} vertices"
        )));
    }
    let edges = graph.edge_count();
    if edges != expected_generated_edges(vertices) {
        return Err(fail(format!(
            "{vertices} vertices produced {edges} edges, expected {}",
            expected_generated_edges(vertices)
        )));
    }
    check_simple(&graph).map_err(|err| fail(format!("not simple: {err}")))?;
    check_symmetry(&graph).map_err(|err| fail(format!("not symmetric: {err}")))?;
    if !is_connected(&graph) {
        return Err(fail(format!("{vertices}-vertex graph is disconnected")));
    }
    validate_corner_links(&graph)
}

/// Vertices 0..3 keep at least their two triangle links; every later vertex
/// starts with three links to strictly earlier vertices.
fn validate_corner_links(graph: &Graph) -> TestCaseResult {
    for (vertex, neighbours) in graph.iter() {
        if vertex < 3 {
            if neighbours.len() < 2 {
                return Err(fail(format!(
                    "base vertex {vertex} has degree {}",
                    neighbours.len()
                )));
            }
            continue;
        }
        let corners = neighbours.get(..3).ok_or_else(|| {
            fail(format!(
                "vertex {vertex} has only {} neighbours",
                neighbours.len()
            ))
        })?;
        if corners.iter().any(|&corner| corner >= vertex) {
            return Err(fail(format!("vertex {vertex} starts with {corners:?}")));
        }
        let late = neighbours
            .get(3..)
            .and_then(|rest| rest.iter().find(|&&n| n < vertex));
        if let Some(&late) = late {
            return Err(fail(format!(
                "vertex {vertex} gained earlier neighbour {late} late"
            )));
        }
    }
    Ok(())
}

pub(super) fn run_perturbation_property(
    graph: &Graph,
    probability: f64,
    seed: u64,
) -> TestCaseResult {
    let mut damaged = graph.clone();
    let mut rng = SmallRng::seed_from_u64(seed);
    let removed = remove_random_edges(&mut damaged, probability, &mut rng);
    check_symmetry(&damaged)
        .map_err(|err| fail(format!("asymmetric after removal: {err}")))?;
    if damaged.vertex_count() != graph.vertex_count() {
        return Err(fail("removal changed the vertex count".to_owned()));
    }
    if damaged.edge_count() + removed != graph.edge_count() {
        return Err(fail(format!(
            "removed {removed}, kept {}, started with {}",
            damaged.edge_count(),
            graph.edge_count()
        )));
    }
    Ok(())
}

pub(super) fn run_coloring_property(graph: &Graph) -> TestCaseResult {
    let coloring = greedy_color(graph);
    if coloring.len() != graph.vertex_count() {
        return Err(fail(format!(
            "coloring covers {} of {} vertices",
            coloring.len(),
            graph.vertex_count()
        )));
    }
    if let Some((vertex, value)) = coloring.iter_values().find(|&(_, value)| value > 4) {
        return Err(fail(format!(
            "vertex {vertex} has out-of-range color {value}"
        )));
    }
    let conflicts = coloring.conflicts(graph);
    if !conflicts.is_empty() {
        return Err(fail(format!("monochromatic edges: {conflicts:?}")));
    }
    Ok(())
}

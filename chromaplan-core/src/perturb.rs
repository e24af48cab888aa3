//! Random edge removal for stress-testing the colorer.

use rand::{Rng, distributions::Standard};
use tracing::{debug, instrument};

use crate::graph::Graph;

/// Deletes each undirected edge of `graph` independently with probability
/// `probability`, returning how many edges were removed.
///
/// Vertices are scanned in id order and each neighbour list is re-read after
/// every removal. An edge `(u, v)` with `u <= v` is tried exactly once, while
/// scanning `u`; the mirrored entry met while scanning `v` is skipped. A
/// trial succeeds when a uniform draw from `[0, 1)` is below `probability`,
/// so values at or below zero never remove, values at or above one always
/// remove, and NaN never removes.
///
/// The graph is damaged in place; pass a clone to keep the original.
///
/// # Examples
/// ```
/// use chromaplan_core::{Graph, remove_random_edges};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut graph = Graph::base_triangle();
/// assert_eq!(remove_random_edges(&mut graph, 0.0, &mut rng), 0);
/// assert_eq!(remove_random_edges(&mut graph, 1.0, &mut rng), 3);
/// assert_eq!(graph.edge_count(), 0);
/// ```
#[instrument(
    name = "core.remove_random_edges",
    skip(graph, rng),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn remove_random_edges<R>(graph: &mut Graph, probability: f64, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let mut removed = 0_usize;
    for vertex in 0..graph.vertex_count() {
        let mut index = 0_usize;
        while let Some(&neighbour) = graph.neighbours(vertex).and_then(|list| list.get(index)) {
            if neighbour < vertex {
                index += 1;
                continue;
            }
            let draw: f64 = rng.sample(Standard);
            if draw < probability && graph.remove_edge(vertex, neighbour) {
                removed += 1;
            } else {
                index += 1;
            }
        }
    }
    debug!(removed, remaining = graph.edge_count(), "edge removal finished");
    removed
}

/// Draws a removal probability uniformly from `[0, 1)`.
pub fn sample_removal_probability<R>(rng: &mut R) -> f64
where
    R: Rng + ?Sized,
{
    rng.sample(Standard)
}

//! Triangle detection over a graph snapshot.
//!
//! [`find_new_triangles`] enumerates triangles that have not been returned
//! before, recording each one in a caller-owned [`SeenTriangles`] set so a
//! generation run can sweep the growing graph repeatedly without subdividing
//! the same face twice.

use std::collections::HashSet;

use tracing::{instrument, trace};

use crate::graph::{Graph, VertexId};

/// Three mutually adjacent vertices in ascending id order.
///
/// # Examples
/// ```
/// use chromaplan_core::Triangle;
///
/// let triangle = Triangle::new(4, 1, 2);
/// assert_eq!(triangle.vertices(), [1, 2, 4]);
/// assert_eq!(triangle, Triangle::new(2, 4, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triangle([VertexId; 3]);

impl Triangle {
    /// Builds the canonical triangle for the given corners.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        let mut corners = [a, b, c];
        corners.sort_unstable();
        Self(corners)
    }

    /// Corners in ascending order.
    #[must_use]
    pub const fn vertices(self) -> [VertexId; 3] {
        self.0
    }
}

/// Triangles already handed out during one generation run.
#[derive(Debug, Clone, Default)]
pub struct SeenTriangles {
    keys: HashSet<Triangle>,
}

impl SeenTriangles {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `triangle`, returning `true` if it had not been seen.
    pub fn insert(&mut self, triangle: Triangle) -> bool {
        self.keys.insert(triangle)
    }

    /// Returns `true` if `triangle` was recorded earlier.
    #[must_use]
    pub fn contains(&self, triangle: Triangle) -> bool {
        self.keys.contains(&triangle)
    }

    /// Number of recorded triangles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Returns every triangle in `graph` that is absent from `seen`, inserting
/// each one into `seen` as it is emitted.
///
/// A triangle `{u, v, w}` is found from its lowest corner: for each `u`, each
/// neighbour `v > u` in `u`'s list order, and each neighbour `w > v` in `v`'s
/// list order, it is a triangle when `w` is also adjacent to `u`. Output
/// follows exactly that nesting, which generation relies on when it stops
/// part way through a round.
///
/// # Examples
/// ```
/// use chromaplan_core::{Graph, SeenTriangles, Triangle, find_new_triangles};
///
/// let graph = Graph::base_triangle();
/// let mut seen = SeenTriangles::new();
/// assert_eq!(find_new_triangles(&graph, &mut seen), vec![Triangle::new(0, 1, 2)]);
/// assert!(find_new_triangles(&graph, &mut seen).is_empty());
/// ```
#[instrument(
    name = "core.find_triangles",
    skip(graph, seen),
    fields(vertices = graph.vertex_count(), seen = seen.len()),
)]
pub fn find_new_triangles(graph: &Graph, seen: &mut SeenTriangles) -> Vec<Triangle> {
    let mut found = Vec::new();
    for (u, u_neighbours) in graph.iter() {
        for &v in u_neighbours.iter().filter(|&&v| u < v) {
            let v_neighbours = graph.neighbours(v).unwrap_or_default();
            for &w in v_neighbours.iter().filter(|&&w| v < w) {
                if !u_neighbours.contains(&w) {
                    continue;
                }
                let triangle = Triangle([u, v, w]);
                if seen.insert(triangle) {
                    found.push(triangle);
                }
            }
        }
    }
    trace!(found = found.len(), "triangle sweep finished");
    found
}

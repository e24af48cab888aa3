//! Structural invariant checks for [`Graph`].
//!
//! Generated graphs are simple, connected and symmetric by construction.
//! Graphs loaded from disk or damaged by perturbation are not guaranteed to
//! be, so these checks let tests and the CLI audit a graph without
//! reimplementing traversal logic.

use std::collections::{HashSet, VecDeque};

use thiserror::Error;
use tracing::{Level, debug, trace};

use crate::graph::{Graph, VertexId};

/// Reports the first structural violation found in a [`Graph`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GraphInvariantViolation {
    /// A directed entry is missing its counterpart.
    #[error("edge {origin}->{target} is missing the reverse link")]
    MissingBacklink {
        /// Vertex that lists `target`.
        origin: VertexId,
        /// Vertex whose list lacks `origin`.
        target: VertexId,
    },
    /// A vertex lists itself.
    #[error("vertex {vertex} has a self loop")]
    SelfLoop {
        /// The looping vertex.
        vertex: VertexId,
    },
    /// A vertex lists the same neighbour more than once.
    #[error("vertex {vertex} lists neighbour {neighbour} more than once")]
    DuplicateNeighbour {
        /// Vertex owning the duplicated entry.
        vertex: VertexId,
        /// The repeated neighbour.
        neighbour: VertexId,
    },
}

/// Verifies every entry `v` in `u`'s list has `u` in `v`'s list.
///
/// # Errors
/// Returns [`GraphInvariantViolation::MissingBacklink`] for the first
/// one-way entry in vertex order.
///
/// # Examples
/// ```
/// use chromaplan_core::{Graph, invariants::check_symmetry};
///
/// assert!(check_symmetry(&Graph::base_triangle()).is_ok());
/// let lopsided = Graph::from_adjacency(vec![vec![1], vec![]])?;
/// assert!(check_symmetry(&lopsided).is_err());
/// # Ok::<(), chromaplan_core::GraphError>(())
/// ```
pub fn check_symmetry(graph: &Graph) -> Result<(), GraphInvariantViolation> {
    if tracing::enabled!(Level::TRACE) {
        trace!(edges = graph.edge_count(), "checking backlinks");
    }
    for (origin, neighbours) in graph.iter() {
        for &target in neighbours {
            if !graph.contains_edge(target, origin) {
                debug!(origin, target, "missing backlink");
                return Err(GraphInvariantViolation::MissingBacklink { origin, target });
            }
        }
    }
    Ok(())
}

/// Verifies the graph has no self loops and no repeated neighbour entries.
///
/// # Errors
/// Returns the first [`GraphInvariantViolation::SelfLoop`] or
/// [`GraphInvariantViolation::DuplicateNeighbour`] in vertex order.
pub fn check_simple(graph: &Graph) -> Result<(), GraphInvariantViolation> {
    let mut seen = HashSet::new();
    for (vertex, neighbours) in graph.iter() {
        seen.clear();
        for &neighbour in neighbours {
            if neighbour == vertex {
                return Err(GraphInvariantViolation::SelfLoop { vertex });
            }
            if !seen.insert(neighbour) {
                return Err(GraphInvariantViolation::DuplicateNeighbour { vertex, neighbour });
            }
        }
    }
    Ok(())
}

/// Returns `true` when every vertex is reachable from vertex `0`.
///
/// The empty graph is treated as connected.
#[must_use]
pub fn is_connected(graph: &Graph) -> bool {
    let count = graph.vertex_count();
    if count == 0 {
        return true;
    }

    let mut visited = vec![false; count];
    let mut queue = VecDeque::from([0]);
    if let Some(slot) = visited.get_mut(0) {
        *slot = true;
    }
    let mut reached = 1_usize;

    while let Some(vertex) = queue.pop_front() {
        for &neighbour in graph.neighbours(vertex).unwrap_or_default() {
            if let Some(slot) = visited.get_mut(neighbour) {
                if !*slot {
                    *slot = true;
                    reached += 1;
                    queue.push_back(neighbour);
                }
            }
        }
    }

    reached == count
}

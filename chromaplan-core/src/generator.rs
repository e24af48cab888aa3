//! Maximal planar graph generation by repeated triangle subdivision.
//!
//! Generation starts from the base triangle and sweeps the current graph for
//! unseen triangles once per round. Each triangle found receives one new
//! vertex linked to its three corners, and generation stops the moment the
//! vertex count reaches the target, even part way through a round. The
//! target is only checked after an append, so a target of three still
//! yields the once-subdivided triangle.

use std::ops::ControlFlow;

use tracing::{debug, info, instrument, warn};

use crate::{
    Result,
    error::ChromaplanError,
    graph::Graph,
    triangle::{SeenTriangles, find_new_triangles},
};

const BASE_VERTEX_COUNT: usize = 3;

/// Snapshot handed to the round observer before each subdivision round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundProgress {
    /// Zero-based round index.
    pub round: usize,
    /// Vertex count at the start of the round.
    pub vertex_count: usize,
    /// Unseen triangles found by this round's sweep.
    pub triangles: usize,
}

/// Builds subdivision graphs of a fixed target size.
///
/// # Examples
/// ```
/// use chromaplan_core::GraphGenerator;
///
/// let graph = GraphGenerator::new(4)?.generate();
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.neighbours(3), Some(&[0, 1, 2][..]));
/// # Ok::<(), chromaplan_core::ChromaplanError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphGenerator {
    target_vertex_count: usize,
}

impl GraphGenerator {
    /// Creates a generator that stops once `target_vertex_count` vertices
    /// exist, after subdividing the base triangle at least once.
    ///
    /// # Errors
    /// Returns [`ChromaplanError::InvalidTargetVertexCount`] when the target
    /// is below the three vertices of the base triangle.
    pub fn new(target_vertex_count: usize) -> Result<Self> {
        if target_vertex_count < BASE_VERTEX_COUNT {
            return Err(ChromaplanError::InvalidTargetVertexCount {
                got: target_vertex_count,
            });
        }
        Ok(Self {
            target_vertex_count,
        })
    }

    /// Returns the configured target.
    #[must_use]
    pub fn target_vertex_count(&self) -> usize {
        self.target_vertex_count
    }

    /// Generates the graph without observing rounds.
    #[must_use]
    pub fn generate(&self) -> Graph {
        self.generate_with(|_| ControlFlow::Continue(()))
    }

    /// Generates the graph, calling `on_round` after each sweep and before
    /// any of its triangles are subdivided.
    ///
    /// Returning [`ControlFlow::Break`] stops generation at that round
    /// boundary and yields the graph built so far.
    ///
    /// # Examples
    /// ```
    /// use std::ops::ControlFlow;
    /// use chromaplan_core::GraphGenerator;
    ///
    /// let graph = GraphGenerator::new(1_000)?.generate_with(|progress| {
    ///     if progress.round == 2 {
    ///         ControlFlow::Break(())
    ///     } else {
    ///         ControlFlow::Continue(())
    ///     }
    /// });
    /// // Round 0 adds one vertex, round 1 adds three.
    /// assert_eq!(graph.vertex_count(), 7);
    /// # Ok::<(), chromaplan_core::ChromaplanError>(())
    /// ```
    #[instrument(
        name = "core.generate",
        skip(self, on_round),
        fields(target = self.target_vertex_count),
    )]
    pub fn generate_with<F>(&self, mut on_round: F) -> Graph
    where
        F: FnMut(RoundProgress) -> ControlFlow<()>,
    {
        let mut graph = Graph::base_triangle();
        let mut seen = SeenTriangles::new();
        let mut round = 0_usize;

        // The base triangle is always subdivided at least once, so the
        // target is only compared after a vertex has been appended.
        loop {
            let triangles = find_new_triangles(&graph, &mut seen);
            let progress = RoundProgress {
                round,
                vertex_count: graph.vertex_count(),
                triangles: triangles.len(),
            };
            debug!(
                round,
                vertices = progress.vertex_count,
                triangles = progress.triangles,
                "subdivision round"
            );
            if on_round(progress).is_break() {
                info!(round, vertices = graph.vertex_count(), "generation stopped by observer");
                return graph;
            }
            if triangles.is_empty() {
                warn!(
                    round,
                    vertices = graph.vertex_count(),
                    "no unseen triangles left; stopping below target"
                );
                return graph;
            }

            for triangle in triangles {
                graph.push_vertex(&triangle.vertices());
                if graph.vertex_count() >= self.target_vertex_count {
                    info!(
                        vertices = graph.vertex_count(),
                        edges = graph.edge_count(),
                        rounds = round + 1,
                        "generation completed"
                    );
                    return graph;
                }
            }
            round += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(2)]
    fn rejects_targets_below_base(#[case] target: usize) {
        assert_eq!(
            GraphGenerator::new(target),
            Err(ChromaplanError::InvalidTargetVertexCount { got: target })
        );
    }

    #[rstest]
    fn target_three_still_subdivides_the_base_triangle() {
        let graph = GraphGenerator::new(3).expect("valid target").generate();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.neighbours(3), Some(&[0, 1, 2][..]));
        assert_eq!(graph.edge_count(), 6);
    }

    #[rstest]
    fn observer_runs_before_the_first_subdivision_for_target_three() {
        let mut rounds = Vec::new();
        let graph = GraphGenerator::new(3)
            .expect("valid target")
            .generate_with(|progress| {
                rounds.push(progress);
                ControlFlow::Continue(())
            });
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(
            rounds,
            vec![RoundProgress {
                round: 0,
                vertex_count: 3,
                triangles: 1,
            }]
        );
    }

    #[rstest]
    fn stops_mid_round() {
        // Round 1 finds three triangles; only the first two are subdivided.
        let graph = GraphGenerator::new(6).expect("valid target").generate();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.neighbours(4), Some(&[0, 1, 3][..]));
        assert_eq!(graph.neighbours(5), Some(&[0, 2, 3][..]));
        assert_eq!(graph.degree(1), 4);
        assert_eq!(graph.degree(2), 4);
    }

    #[rstest]
    fn observer_sees_every_round() {
        let mut rounds = Vec::new();
        let graph = GraphGenerator::new(13)
            .expect("valid target")
            .generate_with(|progress| {
                rounds.push(progress);
                ControlFlow::Continue(())
            });
        assert_eq!(graph.vertex_count(), 13);
        let triangle_counts: Vec<_> = rounds.iter().map(|p| p.triangles).collect();
        assert_eq!(triangle_counts, vec![1, 3, 9]);
        let vertex_counts: Vec<_> = rounds.iter().map(|p| p.vertex_count).collect();
        assert_eq!(vertex_counts, vec![3, 4, 7]);
    }
}

//! Undirected adjacency-list graph.
//!
//! Vertices are dense zero-based ids with no gaps. Each vertex owns an
//! ordered list of neighbour ids, and an undirected edge `(u, v)` is stored
//! as `v` in `u`'s list together with `u` in `v`'s list. Every mutator on
//! [`Graph`] keeps both halves in step; adjacency loaded from elsewhere is
//! accepted as-is and can be audited with [`crate::invariants`].

use crate::error::GraphError;

/// Dense vertex identifier.
pub type VertexId = usize;

/// Undirected graph stored as one neighbour list per vertex.
///
/// # Examples
/// ```
/// use chromaplan_core::Graph;
///
/// let graph = Graph::base_triangle();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.neighbours(0), Some(&[1, 2][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<VertexId>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    ///
    /// # Examples
    /// ```
    /// use chromaplan_core::Graph;
    ///
    /// let graph = Graph::with_vertices(4);
    /// assert_eq!(graph.vertex_count(), 4);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Returns the complete graph on three vertices, the seed of generation.
    #[must_use]
    pub fn base_triangle() -> Self {
        Self {
            adjacency: vec![vec![1, 2], vec![0, 2], vec![0, 1]],
        }
    }

    /// Wraps raw adjacency lists without reordering them.
    ///
    /// Symmetry and simplicity are not enforced; only neighbour ids are
    /// bounds-checked so later traversals cannot index past the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::NeighbourOutOfRange`] when any list names a
    /// vertex id that does not exist.
    ///
    /// # Examples
    /// ```
    /// use chromaplan_core::{Graph, GraphError};
    ///
    /// let graph = Graph::from_adjacency(vec![vec![1], vec![0]])?;
    /// assert_eq!(graph.edge_count(), 1);
    ///
    /// let err = Graph::from_adjacency(vec![vec![3]]).unwrap_err();
    /// assert!(matches!(err, GraphError::NeighbourOutOfRange { neighbour: 3, .. }));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn from_adjacency(adjacency: Vec<Vec<VertexId>>) -> Result<Self, GraphError> {
        let vertex_count = adjacency.len();
        for (vertex, neighbours) in adjacency.iter().enumerate() {
            if let Some(&neighbour) = neighbours.iter().find(|&&n| n >= vertex_count) {
                return Err(GraphError::NeighbourOutOfRange {
                    vertex,
                    neighbour,
                    vertex_count,
                });
            }
        }
        Ok(Self { adjacency })
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges, counted as half the total list length.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Neighbours of `vertex` in insertion order, or `None` if it does not
    /// exist.
    #[must_use]
    pub fn neighbours(&self, vertex: VertexId) -> Option<&[VertexId]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Degree of `vertex`, or `0` when it does not exist.
    #[must_use]
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(vertex).map_or(0, Vec::len)
    }

    /// Returns `true` when `target` appears in `source`'s list.
    #[must_use]
    pub fn contains_edge(&self, source: VertexId, target: VertexId) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|neighbours| neighbours.contains(&target))
    }

    /// Borrow the raw adjacency lists.
    #[must_use]
    pub fn adjacency(&self) -> &[Vec<VertexId>] {
        &self.adjacency
    }

    /// Consume the graph and return its adjacency lists.
    #[must_use]
    pub fn into_adjacency(self) -> Vec<Vec<VertexId>> {
        self.adjacency
    }

    /// Iterates `(vertex, neighbours)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[VertexId])> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(vertex, neighbours)| (vertex, neighbours.as_slice()))
    }

    /// Appends a vertex at the next free id, linked to each of `neighbours`.
    ///
    /// The new vertex's list is exactly `neighbours` in the given order and
    /// each neighbour gains the new id at the end of its own list. Ids that
    /// do not exist yet are skipped.
    ///
    /// # Examples
    /// ```
    /// use chromaplan_core::Graph;
    ///
    /// let mut graph = Graph::base_triangle();
    /// let id = graph.push_vertex(&[0, 1, 2]);
    /// assert_eq!(id, 3);
    /// assert_eq!(graph.neighbours(3), Some(&[0, 1, 2][..]));
    /// assert_eq!(graph.neighbours(0), Some(&[1, 2, 3][..]));
    /// ```
    pub fn push_vertex(&mut self, neighbours: &[VertexId]) -> VertexId {
        let id = self.adjacency.len();
        let mut own = Vec::with_capacity(neighbours.len());
        for &neighbour in neighbours {
            if let Some(list) = self.adjacency.get_mut(neighbour) {
                list.push(id);
                own.push(neighbour);
            }
        }
        self.adjacency.push(own);
        id
    }

    /// Adds the undirected edge `(source, target)`.
    ///
    /// Returns `false` without touching the graph when either endpoint is
    /// missing. Parallel edges are not rejected.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> bool {
        let len = self.adjacency.len();
        if source >= len || target >= len {
            return false;
        }
        if let Some(list) = self.adjacency.get_mut(source) {
            list.push(target);
        }
        if source != target {
            if let Some(list) = self.adjacency.get_mut(target) {
                list.push(source);
            }
        }
        true
    }

    /// Removes one occurrence of the undirected edge `(source, target)`.
    ///
    /// The first `target` entry is removed from `source`'s list and, for
    /// non-loop edges, the first `source` entry from `target`'s list.
    /// Returns `true` when the forward entry existed.
    pub fn remove_edge(&mut self, source: VertexId, target: VertexId) -> bool {
        if !remove_first(self.adjacency.get_mut(source), target) {
            return false;
        }
        if source != target {
            remove_first(self.adjacency.get_mut(target), source);
        }
        true
    }
}

fn remove_first(list: Option<&mut Vec<VertexId>>, value: VertexId) -> bool {
    let Some(list) = list else {
        return false;
    };
    match list.iter().position(|&entry| entry == value) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn base_triangle_is_complete() {
        let graph = Graph::base_triangle();
        for (vertex, neighbours) in graph.iter() {
            assert_eq!(neighbours.len(), 2, "vertex {vertex}");
            assert!(!neighbours.contains(&vertex));
        }
    }

    #[rstest]
    fn push_vertex_skips_missing_neighbours() {
        let mut graph = Graph::with_vertices(2);
        let id = graph.push_vertex(&[0, 7]);
        assert_eq!(id, 2);
        assert_eq!(graph.neighbours(2), Some(&[0][..]));
        assert_eq!(graph.neighbours(0), Some(&[2][..]));
        assert_eq!(graph.edge_count(), 1);
    }

    #[rstest]
    fn remove_edge_drops_both_directions() {
        let mut graph = Graph::base_triangle();
        assert!(graph.remove_edge(0, 2));
        assert_eq!(graph.neighbours(0), Some(&[1][..]));
        assert_eq!(graph.neighbours(2), Some(&[1][..]));
        assert!(!graph.remove_edge(0, 2));
    }

    #[rstest]
    #[case::missing_source(5, 0)]
    #[case::missing_target(0, 5)]
    fn add_edge_rejects_missing_endpoints(#[case] source: usize, #[case] target: usize) {
        let mut graph = Graph::with_vertices(2);
        assert!(!graph.add_edge(source, target));
        assert_eq!(graph.edge_count(), 0);
    }

    #[rstest]
    fn remove_edge_on_self_loop_removes_single_entry() {
        let mut graph = Graph::with_vertices(1);
        assert!(graph.add_edge(0, 0));
        assert_eq!(graph.neighbours(0), Some(&[0][..]));
        assert!(graph.remove_edge(0, 0));
        assert_eq!(graph.degree(0), 0);
    }

    #[rstest]
    fn from_adjacency_preserves_order() {
        let raw = vec![vec![2, 1], vec![0], vec![0]];
        let graph = Graph::from_adjacency(raw.clone()).expect("ids are in range");
        assert_eq!(graph.into_adjacency(), raw);
    }
}

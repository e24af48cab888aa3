//! Single-pass greedy four-coloring.
//!
//! Vertices are visited in ascending id order and each takes the lowest of
//! four colors not already held by a colored neighbour. There is no
//! backtracking: a vertex whose earlier neighbours already use all four
//! colors stays [`Color::Uncolored`], and that value is the only failure
//! signal.

use std::fmt;

use tracing::{info, instrument, warn};

use crate::graph::{Graph, VertexId};

/// Color assigned to a vertex.
///
/// # Examples
/// ```
/// use chromaplan_core::Color;
///
/// assert_eq!(Color::Uncolored.value(), 0);
/// assert_eq!(Color::PALETTE.map(Color::value), [1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Color {
    /// No color in the palette was free when the vertex was visited.
    #[default]
    Uncolored,
    /// Color `1`.
    One,
    /// Color `2`.
    Two,
    /// Color `3`.
    Three,
    /// Color `4`.
    Four,
}

impl Color {
    /// The four usable colors in preference order.
    pub const PALETTE: [Self; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Numeric label, `0` for [`Color::Uncolored`] and `1..=4` otherwise.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Uncolored => 0,
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Returns `true` unless this is [`Color::Uncolored`].
    #[must_use]
    pub const fn is_colored(self) -> bool {
        !matches!(self, Self::Uncolored)
    }

    const fn mask(self) -> u8 {
        match self {
            Self::Uncolored => 0,
            Self::One => 0b0001,
            Self::Two => 0b0010,
            Self::Three => 0b0100,
            Self::Four => 0b1000,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// One color per vertex, indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<Color>,
}

impl Coloring {
    /// Wraps explicit per-vertex colors.
    #[must_use]
    pub fn from_colors(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Colors in vertex order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Color of `vertex`, or `None` if it is out of range.
    #[must_use]
    pub fn get(&self, vertex: VertexId) -> Option<Color> {
        self.colors.get(vertex).copied()
    }

    /// Number of vertices covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` for the coloring of an empty graph.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of vertices left uncolored.
    #[must_use]
    pub fn uncolored_count(&self) -> usize {
        self.colors.iter().filter(|color| !color.is_colored()).count()
    }

    /// Returns `true` when every vertex received a palette color.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(|color| color.is_colored())
    }

    /// Edges `(u, v)` with `u < v` whose endpoints share a palette color.
    ///
    /// Uncolored endpoints never conflict.
    #[must_use]
    pub fn conflicts(&self, graph: &Graph) -> Vec<(VertexId, VertexId)> {
        let mut conflicts = Vec::new();
        for (vertex, neighbours) in graph.iter() {
            let Some(color) = self.get(vertex).filter(|c| c.is_colored()) else {
                continue;
            };
            for &neighbour in neighbours.iter().filter(|&&n| vertex < n) {
                if self.get(neighbour) == Some(color) {
                    conflicts.push((vertex, neighbour));
                }
            }
        }
        conflicts
    }

    /// `(vertex, numeric color)` pairs in vertex order.
    pub fn iter_values(&self) -> impl Iterator<Item = (VertexId, u8)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(vertex, color)| (vertex, color.value()))
    }
}

/// Colors `graph` greedily in vertex id order.
///
/// Only neighbours that already hold a color constrain a vertex, which in
/// id order means its lower-numbered neighbours.
///
/// # Examples
/// ```
/// use chromaplan_core::{Color, Graph, greedy_color};
///
/// let coloring = greedy_color(&Graph::base_triangle());
/// assert_eq!(coloring.colors(), &[Color::One, Color::Two, Color::Three]);
/// ```
#[instrument(
    name = "core.greedy_color",
    skip(graph),
    fields(vertices = graph.vertex_count()),
)]
pub fn greedy_color(graph: &Graph) -> Coloring {
    let mut colors = vec![Color::Uncolored; graph.vertex_count()];
    for (vertex, neighbours) in graph.iter() {
        let used = neighbours
            .iter()
            .filter_map(|&neighbour| colors.get(neighbour))
            .fold(0_u8, |mask, color| mask | color.mask());
        let chosen = Color::PALETTE
            .into_iter()
            .find(|color| used & color.mask() == 0)
            .unwrap_or(Color::Uncolored);
        if let Some(slot) = colors.get_mut(vertex) {
            *slot = chosen;
        }
    }

    let coloring = Coloring { colors };
    let uncolored = coloring.uncolored_count();
    if uncolored > 0 {
        warn!(uncolored, "greedy pass left vertices without a color");
    }
    info!(vertices = coloring.len(), uncolored, "coloring completed");
    coloring
}

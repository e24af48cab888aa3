//! Error types for the chromaplan core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while constructing a [`crate::Graph`] from raw adjacency
/// lists.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A neighbour id pointed past the end of the vertex sequence.
    #[error("vertex {vertex} lists neighbour {neighbour} but the graph has {vertex_count} vertices")]
    NeighbourOutOfRange {
        /// Vertex whose adjacency list holds the bad id.
        vertex: usize,
        /// The out-of-range neighbour id.
        neighbour: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A neighbour id pointed past the end of the vertex sequence.
        NeighbourOutOfRange => NeighbourOutOfRange { .. } => "GRAPH_NEIGHBOUR_OUT_OF_RANGE",
    }
}

/// Error type produced when configuring generation or perturbation trials.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ChromaplanError {
    /// Generation must start from the base triangle, so fewer than three
    /// vertices cannot be requested.
    #[error("target vertex count must be at least 3 (got {got})")]
    InvalidTargetVertexCount {
        /// The rejected target.
        got: usize,
    },
    /// At least one perturbation trial must be requested.
    #[error("trial count must be at least 1 (got {got})")]
    InvalidTrialCount {
        /// The rejected trial count.
        got: usize,
    },
    /// A graph could not be assembled from its adjacency lists.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`ChromaplanError`] variants.
    enum ChromaplanErrorCode for ChromaplanError {
        /// Generation target below the base triangle.
        InvalidTargetVertexCount => InvalidTargetVertexCount { .. } => "CHROMAPLAN_INVALID_TARGET_VERTEX_COUNT",
        /// Zero perturbation trials requested.
        InvalidTrialCount => InvalidTrialCount { .. } => "CHROMAPLAN_INVALID_TRIAL_COUNT",
        /// A graph could not be assembled from its adjacency lists.
        GraphFailure => Graph { .. } => "CHROMAPLAN_GRAPH_FAILURE",
    }
}

impl ChromaplanError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated while
    /// assembling a graph.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ChromaplanError>;

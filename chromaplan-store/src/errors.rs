use std::{io, path::PathBuf};

use chromaplan_core::{GraphError, VertexId};
use thiserror::Error;

/// Errors raised while reading or writing stored graphs and colorings.
///
/// Every variant names the file involved. A file that simply does not exist
/// is not an error for [`crate::GraphStore::load`]; it is reported as
/// `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum GraphStoreError {
    /// Opening, reading or writing the file failed.
    #[error("i/o error on `{path}`: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The JSON document was not a list of integer lists.
    #[error("invalid JSON graph in `{path}`: {source}")]
    Json {
        /// File being decoded or encoded.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// A non-blank edge-list line was not of the form `<u>-<v>`.
    #[error("malformed edge on line {line} of `{path}`: `{content}`")]
    MalformedEdge {
        /// File being decoded.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Offending line.
        content: String,
    },
    /// An edge-list id implied more vertices than the file can describe.
    #[error("vertex id {id} on line {line} of `{path}` is not below {limit}")]
    VertexIdTooLarge {
        /// File being decoded.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Largest endpoint on the line.
        id: VertexId,
        /// Exclusive bound derived from the edge count.
        limit: usize,
    },
    /// The decoded adjacency referenced a vertex that does not exist.
    #[error("invalid graph in `{path}`: {source}")]
    InvalidGraph {
        /// File being decoded.
        path: PathBuf,
        /// Structural error from the core graph.
        #[source]
        source: GraphError,
    },
}

impl GraphStoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// File the error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. }
            | Self::Json { path, .. }
            | Self::MalformedEdge { path, .. }
            | Self::VertexIdTooLarge { path, .. }
            | Self::InvalidGraph { path, .. } => path,
        }
    }
}

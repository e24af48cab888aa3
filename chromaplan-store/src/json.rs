//! JSON adjacency-list format.
//!
//! A graph is stored as an array with one array of neighbour ids per
//! vertex, pretty-printed. Neighbour order survives a round trip.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use chromaplan_core::{Graph, VertexId};
use tracing::{debug, instrument};

use crate::errors::GraphStoreError;

/// Reads a JSON adjacency list from `path`.
///
/// # Errors
/// Returns [`GraphStoreError::Io`] when the file cannot be opened,
/// [`GraphStoreError::Json`] when it is not a list of unsigned integer
/// lists, and [`GraphStoreError::InvalidGraph`] when a neighbour id is out of
/// range.
#[instrument(name = "store.json.read", err, fields(path = %path.display()))]
pub fn read_graph(path: &Path) -> Result<Graph, GraphStoreError> {
    let file = File::open(path).map_err(|source| GraphStoreError::io(path, source))?;
    from_reader(BufReader::new(file), path)
}

/// Decodes a JSON adjacency list from `reader`; `path` is used for error
/// reporting only.
///
/// # Errors
/// See [`read_graph`].
///
/// # Examples
/// ```
/// use std::path::Path;
/// use chromaplan_store::json;
///
/// let graph = json::from_reader(&b"[[1,2],[0,2],[0,1]]"[..], Path::new("inline"))?;
/// assert_eq!(graph.edge_count(), 3);
/// # Ok::<(), chromaplan_store::GraphStoreError>(())
/// ```
pub fn from_reader<R: Read>(reader: R, path: &Path) -> Result<Graph, GraphStoreError> {
    let adjacency: Vec<Vec<VertexId>> =
        serde_json::from_reader(reader).map_err(|source| GraphStoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let graph = Graph::from_adjacency(adjacency).map_err(|source| {
        GraphStoreError::InvalidGraph {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(vertices = graph.vertex_count(), "decoded JSON graph");
    Ok(graph)
}

/// Writes `graph` to `path` as pretty-printed JSON, replacing any existing
/// file.
///
/// # Errors
/// Returns [`GraphStoreError::Io`] when the file cannot be created or
/// flushed and [`GraphStoreError::Json`] when encoding fails.
#[instrument(
    name = "store.json.write",
    err,
    skip(graph),
    fields(path = %path.display(), vertices = graph.vertex_count()),
)]
pub fn write_graph(path: &Path, graph: &Graph) -> Result<(), GraphStoreError> {
    let file = File::create(path).map_err(|source| GraphStoreError::io(path, source))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, graph.adjacency()).map_err(|source| {
        GraphStoreError::Json {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer
        .flush()
        .map_err(|source| GraphStoreError::io(path, source))
}

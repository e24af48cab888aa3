//! Plain-text edge-list format.
//!
//! Each undirected edge is one `<u>-<v>` line written from its lower
//! endpoint, with no header. The vertex count is not stored: loading takes
//! the largest id seen plus one, so trailing isolated vertices are lost.
//!
//! Each edge touches at most two vertices, so a file with `e` edges names at
//! most `2e` non-isolated vertices. Ids are rejected once the implied vertex
//! count exceeds that by more than [`ISOLATED_VERTEX_ALLOWANCE`], which keeps
//! a single stray line from sizing the adjacency to the whole id space.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use chromaplan_core::{Graph, VertexId};
use tracing::{debug, instrument};

use crate::errors::GraphStoreError;

/// Isolated vertices tolerated on top of the two endpoints per edge.
pub const ISOLATED_VERTEX_ALLOWANCE: usize = 1024;

/// Reads an edge list from `path`.
///
/// # Errors
/// Returns [`GraphStoreError::Io`] when the file cannot be read and
/// [`GraphStoreError::MalformedEdge`] for a non-blank line that is not two
/// unsigned integers joined by `-`. Returns
/// [`GraphStoreError::VertexIdTooLarge`] when an id lies outside the bound
/// described in the module docs.
#[instrument(name = "store.edges.read", err, fields(path = %path.display()))]
pub fn read_graph(path: &Path) -> Result<Graph, GraphStoreError> {
    let file = File::open(path).map_err(|source| GraphStoreError::io(path, source))?;
    from_reader(BufReader::new(file), path)
}

/// Decodes an edge list from `reader`; `path` is used for error reporting
/// only.
///
/// # Errors
/// See [`read_graph`].
///
/// # Examples
/// ```
/// use std::path::Path;
/// use chromaplan_store::edge_list;
///
/// let graph = edge_list::from_reader(&b"0-1\n\n1-3\n"[..], Path::new("inline"))?;
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.neighbours(1), Some(&[0, 3][..]));
/// assert_eq!(graph.degree(2), 0);
/// # Ok::<(), chromaplan_store::GraphStoreError>(())
/// ```
pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Graph, GraphStoreError> {
    let mut edges = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| GraphStoreError::io(path, source))?;
        if line.trim().is_empty() {
            continue;
        }
        let edge = parse_edge(&line).ok_or_else(|| GraphStoreError::MalformedEdge {
            path: path.to_path_buf(),
            line: index + 1,
            content: line.clone(),
        })?;
        edges.push((index + 1, edge));
    }

    let limit = vertex_limit(edges.len());
    let mut vertex_count = 0;
    for &(line, (u, v)) in &edges {
        let id = u.max(v);
        if id >= limit {
            return Err(GraphStoreError::VertexIdTooLarge {
                path: path.to_path_buf(),
                line,
                id,
                limit,
            });
        }
        vertex_count = vertex_count.max(id + 1);
    }
    let mut graph = Graph::with_vertices(vertex_count);
    for (_, (u, v)) in edges {
        graph.add_edge(u, v);
    }
    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "decoded edge list"
    );
    Ok(graph)
}

/// Exclusive upper bound on vertex ids for a file holding `edges` edges.
fn vertex_limit(edges: usize) -> usize {
    edges
        .saturating_mul(2)
        .saturating_add(ISOLATED_VERTEX_ALLOWANCE)
}

fn parse_edge(line: &str) -> Option<(VertexId, VertexId)> {
    let (u, v) = line.trim().split_once('-')?;
    Some((u.trim().parse().ok()?, v.trim().parse().ok()?))
}

/// Writes every undirected edge of `graph` to `path` once, replacing any
/// existing file.
///
/// # Errors
/// Returns [`GraphStoreError::Io`] when the file cannot be written.
#[instrument(
    name = "store.edges.write",
    err,
    skip(graph),
    fields(path = %path.display(), edges = graph.edge_count()),
)]
pub fn write_graph(path: &Path, graph: &Graph) -> Result<(), GraphStoreError> {
    let file = File::create(path).map_err(|source| GraphStoreError::io(path, source))?;
    let mut writer = BufWriter::new(file);
    to_writer(graph, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| GraphStoreError::io(path, source))
}

/// Encodes `graph` as an edge list into `writer`.
///
/// # Errors
/// Propagates write failures from `writer`.
pub fn to_writer<W: Write>(graph: &Graph, mut writer: W) -> std::io::Result<()> {
    for (vertex, neighbours) in graph.iter() {
        for &neighbour in neighbours.iter().filter(|&&n| vertex < n) {
            writeln!(writer, "{vertex}-{neighbour}")?;
        }
    }
    Ok(())
}

//! Coloring output file.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use chromaplan_core::Coloring;
use tracing::instrument;

use crate::errors::GraphStoreError;

/// Writes one `<vertex> - <color>` line per vertex to `path`, replacing any
/// existing file. Uncolored vertices are written as `0`.
///
/// # Errors
/// Returns [`GraphStoreError::Io`] when the file cannot be written.
#[instrument(
    name = "store.coloring.write",
    err,
    skip(coloring),
    fields(path = %path.display(), vertices = coloring.len()),
)]
pub fn write_coloring(path: &Path, coloring: &Coloring) -> Result<(), GraphStoreError> {
    let file = File::create(path).map_err(|source| GraphStoreError::io(path, source))?;
    let mut writer = BufWriter::new(file);
    to_writer(coloring, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|source| GraphStoreError::io(path, source))
}

/// Encodes `coloring` into `writer`.
///
/// # Errors
/// Propagates write failures from `writer`.
///
/// # Examples
/// ```
/// use chromaplan_core::{Graph, greedy_color};
/// use chromaplan_store::coloring;
///
/// let mut out = Vec::new();
/// coloring::to_writer(&greedy_color(&Graph::base_triangle()), &mut out)?;
/// assert_eq!(String::from_utf8_lossy(&out), "0 - 1\n1 - 2\n2 - 3\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn to_writer<W: Write>(coloring: &Coloring, mut writer: W) -> io::Result<()> {
    for (vertex, color) in coloring.iter_values() {
        writeln!(writer, "{vertex} - {color}")?;
    }
    Ok(())
}

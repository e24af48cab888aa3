use std::path::{Path, PathBuf};

use chromaplan_core::{Coloring, Graph};
use tracing::{info, instrument};

use crate::{coloring, edge_list, errors::GraphStoreError, json};

/// On-disk format a graph was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// Pretty-printed JSON adjacency list.
    Json,
    /// `<u>-<v>` edge list.
    EdgeList,
}

impl GraphFormat {
    /// Short label used in logs and summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::EdgeList => "edge-list",
        }
    }
}

/// A graph together with the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedGraph {
    /// Decoded graph.
    pub graph: Graph,
    /// Format that was read.
    pub format: GraphFormat,
    /// File that was read.
    pub path: PathBuf,
}

/// Pair of graph files kept in sync: a JSON adjacency list and an edge list.
///
/// # Examples
/// ```
/// use chromaplan_core::Graph;
/// use chromaplan_store::{GraphFormat, GraphStore};
///
/// let dir = tempfile::tempdir()?;
/// let store = GraphStore::new(dir.path().join("graph.json"), dir.path().join("graph.txt"));
/// assert!(store.load()?.is_none());
///
/// store.save(&Graph::base_triangle())?;
/// let loaded = store.load()?.expect("graph was just saved");
/// assert_eq!(loaded.format, GraphFormat::Json);
/// assert_eq!(loaded.graph, Graph::base_triangle());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStore {
    json_path: PathBuf,
    edge_list_path: PathBuf,
}

impl GraphStore {
    /// Creates a store over the two given paths. Nothing is touched on disk.
    #[must_use]
    pub fn new(json_path: impl Into<PathBuf>, edge_list_path: impl Into<PathBuf>) -> Self {
        Self {
            json_path: json_path.into(),
            edge_list_path: edge_list_path.into(),
        }
    }

    /// Path of the JSON file.
    #[must_use]
    pub fn json_path(&self) -> &Path {
        &self.json_path
    }

    /// Path of the edge-list file.
    #[must_use]
    pub fn edge_list_path(&self) -> &Path {
        &self.edge_list_path
    }

    /// Loads the stored graph, preferring JSON over the edge list.
    ///
    /// Returns `Ok(None)` when neither file exists. A file that exists but
    /// cannot be decoded is an error; the other format is not tried.
    ///
    /// # Errors
    /// Returns [`GraphStoreError`] when the chosen file cannot be read or
    /// decoded.
    #[instrument(
        name = "store.load",
        err,
        skip(self),
        fields(json = %self.json_path.display(), edges = %self.edge_list_path.display()),
    )]
    pub fn load(&self) -> Result<Option<LoadedGraph>, GraphStoreError> {
        let (format, path) = if exists(&self.json_path)? {
            (GraphFormat::Json, &self.json_path)
        } else if exists(&self.edge_list_path)? {
            (GraphFormat::EdgeList, &self.edge_list_path)
        } else {
            info!("no stored graph found");
            return Ok(None);
        };

        let graph = match format {
            GraphFormat::Json => json::read_graph(path)?,
            GraphFormat::EdgeList => edge_list::read_graph(path)?,
        };
        info!(
            format = format.label(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph loaded"
        );
        Ok(Some(LoadedGraph {
            graph,
            format,
            path: path.clone(),
        }))
    }

    /// Writes `graph` to both files, replacing their contents.
    ///
    /// # Errors
    /// Returns [`GraphStoreError`] from whichever write fails first.
    #[instrument(name = "store.save", err, skip(self, graph), fields(vertices = graph.vertex_count()))]
    pub fn save(&self, graph: &Graph) -> Result<(), GraphStoreError> {
        edge_list::write_graph(&self.edge_list_path, graph)?;
        json::write_graph(&self.json_path, graph)?;
        info!(
            json = %self.json_path.display(),
            edges = %self.edge_list_path.display(),
            "graph saved"
        );
        Ok(())
    }

    /// Writes `coloring` to `path`.
    ///
    /// # Errors
    /// Returns [`GraphStoreError::Io`] when the file cannot be written.
    pub fn save_coloring(&self, path: &Path, coloring: &Coloring) -> Result<(), GraphStoreError> {
        coloring::write_coloring(path, coloring)?;
        info!(path = %path.display(), "coloring saved");
        Ok(())
    }
}

fn exists(path: &Path) -> Result<bool, GraphStoreError> {
    path.try_exists()
        .map_err(|source| GraphStoreError::io(path, source))
}

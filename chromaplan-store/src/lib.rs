//! File persistence for chromaplan graphs and colorings.
//!
//! Graphs are stored in two interchangeable formats: a pretty-printed JSON
//! adjacency list and a plain-text edge list. Colorings are written as one
//! `vertex - color` line per vertex.

pub mod coloring;
pub mod edge_list;
mod errors;
pub mod json;
mod store;

pub use errors::GraphStoreError;
pub use store::{GraphFormat, GraphStore, LoadedGraph};

#[cfg(test)]
mod tests;

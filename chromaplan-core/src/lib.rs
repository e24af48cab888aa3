//! Chromaplan core library.
//!
//! Builds maximal planar graphs by repeated triangle subdivision, damages
//! them by random edge removal, and colors them with a single-pass greedy
//! four-color heuristic whose running time is the quantity being
//! benchmarked.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod coloring;
mod error;
mod generator;
mod graph;
pub mod invariants;
mod perturb;
mod triangle;
mod trial;

pub use crate::{
    coloring::{Color, Coloring, greedy_color},
    error::{ChromaplanError, ChromaplanErrorCode, GraphError, GraphErrorCode, Result},
    generator::{GraphGenerator, RoundProgress},
    graph::{Graph, VertexId},
    invariants::GraphInvariantViolation,
    perturb::{remove_random_edges, sample_removal_probability},
    triangle::{SeenTriangles, Triangle, find_new_triangles},
    trial::{RemovalProbability, TrialConfig, TrialOutcome, TrialReport, run_trials},
};

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

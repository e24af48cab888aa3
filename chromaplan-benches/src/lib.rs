//! Benchmark support crate for chromaplan.
//!
//! Provides seeded graph fixtures and parameter types used by the Criterion
//! benchmarks for generation, triangle sweeps, perturbation and greedy
//! coloring.

pub mod error;
pub mod fixtures;
pub mod params;

//! Support library for the chromaplan CLI binary.
//!
//! Exposes the command pipeline and logging setup so integration tests and
//! doctests can drive a run without spawning a subprocess.

pub mod cli;
pub mod logging;

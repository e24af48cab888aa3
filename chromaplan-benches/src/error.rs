//! Benchmark setup error type.
//!
//! Lets fixture builders propagate failures with `?` so each bench can
//! report a setup problem in one place.

use chromaplan_core::ChromaplanError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator or trial configuration was rejected.
    #[error("core configuration failed: {0}")]
    Core(#[from] ChromaplanError),
}

//! Shared test utilities used across chromaplan crates.
//!
//! - [`tracing::RecordingLayer`] captures spans and events so tests can
//!   assert instrumentation.
//! - [`profile::ProptestRunProfile`] reads the environment overrides every
//!   property suite honours.

pub mod profile;
pub mod tracing;

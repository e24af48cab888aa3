//! Shared test utilities for `chromaplan-core`.

use chromaplan_test_support::profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{generator::GraphGenerator, graph::Graph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps property suites aligned on the same `PROGTEST_CASES` and
/// `CHROMAPLAN_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Generates a subdivision graph, panicking on an invalid target.
#[must_use]
pub(crate) fn generated_graph(target: usize) -> Graph {
    match GraphGenerator::new(target) {
        Ok(generator) => generator.generate(),
        Err(err) => panic!("invalid generation target {target}: {err}"),
    }
}

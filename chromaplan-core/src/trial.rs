//! Timed perturbation trials.
//!
//! Each trial copies the input graph, removes random edges from the copy and
//! times [`greedy_color`] on the damaged graph. The input graph is only ever
//! read.

use std::{
    num::NonZeroUsize,
    time::{Duration, Instant},
};

use rand::Rng;
use tracing::{info, instrument};

use crate::{
    Result,
    coloring::greedy_color,
    error::ChromaplanError,
    graph::Graph,
    perturb::{remove_random_edges, sample_removal_probability},
};

/// How each trial picks its removal probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemovalProbability {
    /// Use the same probability for every trial.
    Fixed(f64),
    /// Draw a fresh probability from `[0, 1)` for every trial.
    Sampled,
}

impl RemovalProbability {
    fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        match self {
            Self::Fixed(probability) => probability,
            Self::Sampled => sample_removal_probability(rng),
        }
    }
}

/// Validated trial settings.
///
/// # Examples
/// ```
/// use chromaplan_core::{RemovalProbability, TrialConfig};
///
/// let config = TrialConfig::new(3, RemovalProbability::Fixed(0.25))?;
/// assert_eq!(config.trials().get(), 3);
/// assert!(TrialConfig::new(0, RemovalProbability::Sampled).is_err());
/// # Ok::<(), chromaplan_core::ChromaplanError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialConfig {
    trials: NonZeroUsize,
    probability: RemovalProbability,
}

impl TrialConfig {
    /// Validates the trial count.
    ///
    /// # Errors
    /// Returns [`ChromaplanError::InvalidTrialCount`] when `trials` is zero.
    pub fn new(trials: usize, probability: RemovalProbability) -> Result<Self> {
        let trials =
            NonZeroUsize::new(trials).ok_or(ChromaplanError::InvalidTrialCount { got: trials })?;
        Ok(Self {
            trials,
            probability,
        })
    }

    /// Number of trials to run.
    #[must_use]
    pub fn trials(&self) -> NonZeroUsize {
        self.trials
    }

    /// Probability policy.
    #[must_use]
    pub fn probability(&self) -> RemovalProbability {
        self.probability
    }
}

/// Measurements from one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    /// Probability used for this trial.
    pub removal_probability: f64,
    /// Edges removed from the copy.
    pub removed_edges: usize,
    /// Vertices the colorer left uncolored.
    pub uncolored: usize,
    /// Wall-clock time spent coloring the damaged copy.
    pub elapsed: Duration,
}

/// Outcomes of every trial in run order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialReport {
    outcomes: Vec<TrialOutcome>,
}

impl TrialReport {
    /// Per-trial outcomes.
    #[must_use]
    pub fn outcomes(&self) -> &[TrialOutcome] {
        &self.outcomes
    }

    /// Mean coloring time across trials, zero for an empty report.
    #[must_use]
    pub fn average_elapsed(&self) -> Duration {
        let total: Duration = self.outcomes.iter().map(|outcome| outcome.elapsed).sum();
        u32::try_from(self.outcomes.len())
            .ok()
            .and_then(|count| total.checked_div(count))
            .unwrap_or_default()
    }
}

/// Runs every configured trial against copies of `graph`.
#[instrument(
    name = "core.run_trials",
    skip(graph, config, rng),
    fields(vertices = graph.vertex_count(), trials = config.trials.get()),
)]
pub fn run_trials<R>(graph: &Graph, config: &TrialConfig, rng: &mut R) -> TrialReport
where
    R: Rng + ?Sized,
{
    let mut outcomes = Vec::with_capacity(config.trials.get());
    for trial in 0..config.trials.get() {
        let removal_probability = config.probability.resolve(rng);
        let mut damaged = graph.clone();
        let removed_edges = remove_random_edges(&mut damaged, removal_probability, rng);

        let started = Instant::now();
        let coloring = greedy_color(&damaged);
        let elapsed = started.elapsed();

        let outcome = TrialOutcome {
            removal_probability,
            removed_edges,
            uncolored: coloring.uncolored_count(),
            elapsed,
        };
        info!(
            trial,
            removal_probability,
            removed_edges,
            uncolored = outcome.uncolored,
            elapsed_secs = elapsed.as_secs_f64(),
            "trial completed"
        );
        outcomes.push(outcome);
    }
    TrialReport { outcomes }
}

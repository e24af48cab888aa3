//! Benchmark parameter types.

use std::fmt;

/// Parameters for a benchmark over a freshly generated graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Target vertex count handed to the generator.
    pub vertex_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}

/// Parameters for a benchmark over a perturbed graph.
#[derive(Clone, Copy, Debug)]
pub struct PerturbBenchParams {
    /// Target vertex count handed to the generator.
    pub vertex_count: usize,
    /// Edge-removal probability, in percent to keep benchmark ids short.
    pub removal_percent: u8,
}

impl PerturbBenchParams {
    /// Removal probability as a fraction.
    #[must_use]
    pub fn probability(&self) -> f64 {
        f64::from(self.removal_percent) / 100.0
    }
}

impl fmt::Display for PerturbBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}%", self.vertex_count, self.removal_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn ids_are_compact() {
        assert_eq!(GraphBenchParams { vertex_count: 1_000 }.to_string(), "n=1000");
        let params = PerturbBenchParams {
            vertex_count: 500,
            removal_percent: 25,
        };
        assert_eq!(params.to_string(), "n=500,p=25%");
        assert!((params.probability() - 0.25).abs() < f64::EPSILON);
    }
}

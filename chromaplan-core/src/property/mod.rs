//! Property-based suites for generation, perturbation and coloring.
//!
//! Strategies build either subdivision graphs of random size or random
//! simple graphs from a seeded RNG; the runners assert the structural
//! properties each stage must preserve.

mod runners;
mod strategies;
mod tests;

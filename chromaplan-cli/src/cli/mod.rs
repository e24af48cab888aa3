//! Command-line interface for generating, perturbing and coloring planar
//! graphs.
//!
//! The single `run` command loads a stored graph or generates a fresh one,
//! times the greedy colorer on randomly damaged copies and writes the
//! coloring of the undamaged graph.

mod commands;

pub use commands::{
    Cli, CliError, Command, DEFAULT_VERTICES, GraphSource, RunCommand, RunSummary,
    render_summary, run_cli,
};

//! Binary entry point for chromaplan.
//!
//! Installs the tracing subscriber, runs the parsed command and prints its
//! summary. Any failure is logged once with its stable error code (or the
//! file involved, for store failures) and turns into a non-zero exit status.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use chromaplan_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }
    match execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_failure(&err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("run failed")?;
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut out).context("could not print run summary")?;
    out.flush().context("could not flush stdout")
}

fn log_failure(err: &anyhow::Error) {
    let message = field::display(format!("{err:#}"));
    match err.downcast_ref::<CliError>() {
        Some(CliError::Core(core)) => error!(
            error = message,
            code = core.code().as_str(),
            graph_code = core.graph_code().map(|code| code.as_str()),
            "chromaplan failed"
        ),
        Some(CliError::Store(store)) => error!(
            error = message,
            path = %store.path().display(),
            "chromaplan failed"
        ),
        None => error!(error = message, "chromaplan failed"),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is not available until logging is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("chromaplan: could not initialise logging: {err}");
}

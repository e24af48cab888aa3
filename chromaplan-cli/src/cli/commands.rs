//! Command implementations and argument parsing for the chromaplan CLI.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chromaplan_core::{
    ChromaplanError, Graph, GraphGenerator, RemovalProbability, TrialConfig, TrialReport,
    greedy_color, invariants, run_trials,
};
use chromaplan_store::{GraphFormat, GraphStore, GraphStoreError};
use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

/// Vertex target used when no stored graph is available.
pub const DEFAULT_VERTICES: usize = 10_000_000;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "chromaplan",
    about = "Generate planar graphs and benchmark greedy four-coloring."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load or generate a graph, run perturbation trials and write a coloring.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Vertex count to generate when no stored graph can be loaded.
    #[arg(long, default_value_t = DEFAULT_VERTICES)]
    pub vertices: usize,

    /// JSON adjacency-list file, read first and rewritten after generation.
    #[arg(long = "graph-json", default_value = "graph.json")]
    pub graph_json: PathBuf,

    /// Edge-list file, read when the JSON file is absent.
    #[arg(long = "graph-edges", default_value = "graph.txt")]
    pub graph_edges: PathBuf,

    /// Destination for the coloring of the unperturbed graph.
    #[arg(long, default_value = "output.txt")]
    pub output: PathBuf,

    /// Number of perturbation trials to time.
    #[arg(long, default_value_t = 1)]
    pub trials: usize,

    /// Fixed edge-removal probability; each trial draws one from `[0, 1)`
    /// when omitted.
    #[arg(long = "removal-probability", value_parser = parse_probability)]
    pub removal_probability: Option<f64>,

    /// Seed for reproducible runs.
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_probability(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("`{raw}` is not a number: {err}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("`{raw}` is not a finite probability"))
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Saving a graph or coloring failed.
    #[error(transparent)]
    Store(#[from] GraphStoreError),
    /// Core configuration was rejected.
    #[error(transparent)]
    Core(#[from] ChromaplanError),
}

/// Where the run's graph came from.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphSource {
    /// Read from a stored file.
    Loaded {
        /// Format that was read.
        format: GraphFormat,
        /// File that was read.
        path: PathBuf,
    },
    /// Generated during this run and saved to both files.
    Generated {
        /// Wall-clock generation time.
        elapsed: Duration,
    },
}

/// Summarises the outcome of a `run` command.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Origin of the graph.
    pub source: GraphSource,
    /// Vertices in the unperturbed graph.
    pub vertices: usize,
    /// Undirected edges in the unperturbed graph.
    pub edges: usize,
    /// Per-trial measurements.
    pub report: TrialReport,
    /// Vertices the final coloring left uncolored.
    pub uncolored: usize,
    /// Coloring file that was written.
    pub output: PathBuf,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when configuration is invalid or files cannot be
/// written.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use chromaplan_cli::cli::{Cli, Command, GraphSource, RunCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = tempfile::tempdir()?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         vertices: 20,
///         graph_json: dir.path().join("graph.json"),
///         graph_edges: dir.path().join("graph.txt"),
///         output: dir.path().join("output.txt"),
///         trials: 2,
///         removal_probability: Some(0.5),
///         seed: Some(7),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert!(matches!(summary.source, GraphSource::Generated { .. }));
/// assert_eq!(summary.vertices, 20);
/// assert_eq!(summary.report.outcomes().len(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<RunSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(trials = command.trials, seeded = command.seed.is_some()),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunSummary, CliError> {
    let generator = GraphGenerator::new(command.vertices)?;
    let probability = command
        .removal_probability
        .map_or(RemovalProbability::Sampled, RemovalProbability::Fixed);
    let config = TrialConfig::new(command.trials, probability)?;
    let mut rng = seeded_rng(command.seed);

    let store = GraphStore::new(&command.graph_json, &command.graph_edges);
    let (graph, source) = obtain_graph(&store, &generator)?;

    let report = run_trials(&graph, &config, &mut rng);
    info!(
        average_secs = report.average_elapsed().as_secs_f64(),
        "trials completed"
    );

    let coloring = greedy_color(&graph);
    store.save_coloring(&command.output, &coloring)?;

    Ok(RunSummary {
        source,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        report,
        uncolored: coloring.uncolored_count(),
        output: command.output,
    })
}

pub(super) fn seeded_rng(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64)
}

/// Loads the stored graph, or generates and saves a new one when nothing
/// usable is stored.
#[instrument(
    name = "cli.obtain_graph",
    err,
    skip(store, generator),
    fields(source = field::Empty),
)]
pub(super) fn obtain_graph(
    store: &GraphStore,
    generator: &GraphGenerator,
) -> Result<(Graph, GraphSource), CliError> {
    let span = Span::current();
    match store.load() {
        Ok(Some(loaded)) => {
            span.record("source", field::display(loaded.format.label()));
            if let Err(violation) = invariants::check_symmetry(&loaded.graph) {
                warn!(%violation, "stored graph is not symmetric");
            }
            let source = GraphSource::Loaded {
                format: loaded.format,
                path: loaded.path,
            };
            return Ok((loaded.graph, source));
        }
        Ok(None) => {}
        Err(err) => warn!(error = %err, "stored graph unreadable; generating a new one"),
    }

    span.record("source", field::display("generated"));
    let started = Instant::now();
    let graph = generator.generate();
    let elapsed = started.elapsed();
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        elapsed_secs = elapsed.as_secs_f64(),
        "graph generated"
    );
    store.save(&graph)?;
    Ok((graph, GraphSource::Generated { elapsed }))
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::time::Duration;
/// # use chromaplan_cli::cli::{GraphSource, RunSummary, render_summary};
/// # use chromaplan_core::{Graph, RemovalProbability, TrialConfig, run_trials};
/// # use rand::{SeedableRng, rngs::SmallRng};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let config = TrialConfig::new(1, RemovalProbability::Fixed(0.0))?;
/// let report = run_trials(&Graph::base_triangle(), &config, &mut SmallRng::seed_from_u64(1));
/// let summary = RunSummary {
///     source: GraphSource::Generated { elapsed: Duration::from_millis(5) },
///     vertices: 3,
///     edges: 3,
///     report,
///     uncolored: 0,
///     output: "output.txt".into(),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("graph: generated in 0.005000s\n"));
/// assert!(text.contains("vertices: 3\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &RunSummary, mut writer: impl Write) -> io::Result<()> {
    match &summary.source {
        GraphSource::Loaded { format, path } => writeln!(
            writer,
            "graph: loaded {} from {}",
            format.label(),
            path.display()
        )?,
        GraphSource::Generated { elapsed } => {
            writeln!(writer, "graph: generated in {:.6}s", elapsed.as_secs_f64())?;
        }
    }
    writeln!(writer, "vertices: {}", summary.vertices)?;
    writeln!(writer, "edges: {}", summary.edges)?;
    for (index, outcome) in summary.report.outcomes().iter().enumerate() {
        writeln!(
            writer,
            "trial {}: removal probability {:.6}, removed {} edges, {} uncolored, {:.6}s",
            index + 1,
            outcome.removal_probability,
            outcome.removed_edges,
            outcome.uncolored,
            outcome.elapsed.as_secs_f64()
        )?;
    }
    writeln!(
        writer,
        "average coloring time: {:.6}s",
        summary.report.average_elapsed().as_secs_f64()
    )?;
    writeln!(writer, "uncolored: {}", summary.uncolored)?;
    writeln!(writer, "coloring written to {}", summary.output.display())?;
    Ok(())
}

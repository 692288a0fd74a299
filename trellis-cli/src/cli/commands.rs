//! Command implementations and argument parsing for the trellis CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use trellis_core::{
    BernoulliParams, Directedness, GeneratorError, Graph, GraphError, GraphSource, SimpleGraph,
    Stability, spec,
};
use trellis_providers_adjacency::{AdjacencyGraph, Simple};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "trellis", about = "Generate and inspect trellis graphs.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Draw a Bernoulli random graph and summarise it.
    Bernoulli(BernoulliCommand),
}

/// Options accepted by the `bernoulli` command.
#[derive(Debug, Args, Clone)]
pub struct BernoulliCommand {
    /// Number of vertices, labelled `0..order`.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub order: usize,

    /// Probability that any candidate edge is present, in `[0, 1)`.
    #[arg(long)]
    pub probability: f64,

    /// Draw ordered pairs instead of unordered ones.
    #[arg(long)]
    pub directed: bool,

    /// Fix the edge set on first use instead of redrawing per traversal.
    #[arg(long)]
    pub stable: bool,

    /// Seed for a reproducible draw.
    #[arg(long)]
    pub seed: Option<u64>,

    /// List every edge after the summary.
    #[arg(long)]
    pub edges: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generator parameters were rejected.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// The generated edges could not seed the graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Stable code of the underlying library error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Generator(err) => err.code().as_str(),
            Self::Graph(err) => err.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Whether the graph is directed.
    pub directedness: Directedness,
    /// Number of vertices.
    pub order: usize,
    /// Number of edges.
    pub size: usize,
    /// Edge density; `NaN` below two vertices.
    pub density: f64,
    /// Sorted endpoint pairs, when requested.
    pub edges: Option<Vec<(usize, usize)>>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the parameters are invalid or the graph cannot
/// be built.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use trellis_cli::cli::{BernoulliCommand, Cli, Command, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Bernoulli(BernoulliCommand {
///         order: 10,
///         probability: 0.5,
///         directed: false,
///         stable: true,
///         seed: Some(7),
///         edges: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.order, 10);
/// assert!(summary.size <= 45);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Bernoulli(command) => {
            Span::current().record("command", field::display("bernoulli"));
            run_bernoulli(&command)
        }
    }
}

#[instrument(
    name = "cli.bernoulli",
    err,
    skip(command),
    fields(
        order = command.order,
        probability = command.probability,
        directed = command.directed,
        stable = command.stable,
        seed = field::Empty,
    ),
)]
pub(super) fn run_bernoulli(command: &BernoulliCommand) -> Result<ExecutionSummary, CliError> {
    let directedness = if command.directed {
        Directedness::Directed
    } else {
        Directedness::Undirected
    };
    let stability = if command.stable {
        Stability::Stable
    } else {
        Stability::Unstable
    };
    let mut params = BernoulliParams::new(command.order, command.probability)?
        .with_directedness(directedness)
        .with_stability(stability);
    if let Some(seed) = command.seed {
        Span::current().record("seed", seed);
        params = params.with_rng_seed(seed);
    }

    let base = spec();
    let base = if command.directed { base.directed() } else { base };
    let graph: Simple<AdjacencyGraph<usize>> = base
        .using(params.build())
        .create(AdjacencyGraph::from_simple_spec)?;

    let summary = ExecutionSummary {
        directedness,
        order: graph.order(),
        size: graph.size(),
        density: graph.density(),
        edges: command.edges.then(|| sorted_pairs(&graph)),
    };
    info!(
        order = summary.order,
        size = summary.size,
        density = summary.density,
        "bernoulli command completed"
    );
    Ok(summary)
}

fn sorted_pairs<G: SimpleGraph<usize>>(graph: &G) -> Vec<(usize, usize)> {
    let mut pairs: Vec<_> = graph
        .edges()
        .map(|edge| {
            let (&u, &v) = edge.both();
            if graph.directedness().is_directed() {
                (u, v)
            } else {
                (u.min(v), u.max(v))
            }
        })
        .collect();
    pairs.sort_unstable();
    pairs
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use trellis_cli::cli::{ExecutionSummary, render_summary};
/// # use trellis_core::Directedness;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     directedness: Directedness::Undirected,
///     order: 3,
///     size: 1,
///     density: 1.0 / 3.0,
///     edges: Some(vec![(0, 2)]),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("0\t2\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "graph: {}", summary.directedness)?;
    writeln!(writer, "order: {}", summary.order)?;
    writeln!(writer, "size: {}", summary.size)?;
    writeln!(writer, "density: {:.4}", summary.density)?;
    for (u, v) in summary.edges.iter().flatten() {
        writeln!(writer, "{u}\t{v}")?;
    }
    Ok(())
}

//! Command implementations and argument parsing for the randgraph CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use rand::{Rng, RngCore, SeedableRng, rngs::SmallRng};
use randgraph_core::{
    Graph, GraphConfigBuilder, GraphError, GraphRandomizer, ListError, ListRandomizer, seeded,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_NODES: usize = 8;
const DEFAULT_COMPONENTS: usize = 1;
const DEFAULT_LIST_LENGTH: usize = 10;
const DEFAULT_LIST_MIN: i64 = 0;
const DEFAULT_LIST_MAX: i64 = 100;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "randgraph",
    about = "Generate random graphs and value lists for testing."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a random graph and print it as an edge list.
    Graph(GraphCommand),
    /// Generate a random list of integers.
    List(ListCommand),
}

/// Options accepted by the `graph` command.
#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct GraphCommand {
    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Number of edges; defaults to the node count plus ten percent.
    #[arg(long)]
    pub edges: Option<usize>,

    /// Number of weakly connected components.
    #[arg(long, default_value_t = DEFAULT_COMPONENTS)]
    pub components: usize,

    /// Number of strongly connected blocks (directed graphs only).
    #[arg(long = "strong-blocks")]
    pub strong_blocks: Option<usize>,

    /// Generate an undirected graph.
    #[arg(long)]
    pub undirected: bool,

    /// Allow self-loops.
    #[arg(long)]
    pub loops: bool,

    /// Generate a directed acyclic graph.
    #[arg(long, conflicts_with_all = ["undirected", "loops", "strong_blocks"])]
    pub dag: bool,

    /// Seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Options accepted by the `list` command.
#[derive(Debug, Args, Clone, PartialEq, Eq)]
pub struct ListCommand {
    /// Number of values.
    #[arg(long, default_value_t = DEFAULT_LIST_LENGTH)]
    pub length: usize,

    /// Smallest value that may be drawn.
    #[arg(long, default_value_t = DEFAULT_LIST_MIN, allow_negative_numbers = true)]
    pub min: i64,

    /// Largest value that may be drawn.
    #[arg(long, default_value_t = DEFAULT_LIST_MAX, allow_negative_numbers = true)]
    pub max: i64,

    /// Make every value different.
    #[arg(long)]
    pub unique: bool,

    /// Use exactly this many different values.
    #[arg(long, conflicts_with = "unique")]
    pub distinct: Option<usize>,

    /// Seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The value range of the `list` command is empty.
    #[error("value range is empty: min {min} exceeds max {max}")]
    EmptyRange {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },
    /// Graph configuration or generation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// List generation failed.
    #[error(transparent)]
    List(#[from] ListError),
}

impl CliError {
    /// Stable code of the wrapped library error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::EmptyRange { .. } => None,
            Self::Graph(err) => Some(err.code().as_str()),
            Self::List(err) => Some(err.code().as_str()),
        }
    }
}

/// Result of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Generated graph.
    Graph(Graph),
    /// Generated values.
    List(Vec<i64>),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the parameters are invalid or generation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randgraph_cli::cli::{Cli, Command, CommandOutput, GraphCommand, run_cli};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Graph(GraphCommand {
///         nodes: 6,
///         edges: Some(7),
///         components: 1,
///         strong_blocks: None,
///         undirected: false,
///         loops: false,
///         dag: false,
///         seed: Some(42),
///     }),
/// };
/// let CommandOutput::Graph(graph) = run_cli(cli)? else {
///     unreachable!("graph command yields a graph");
/// };
/// assert_eq!(graph.edge_count(), 7);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Graph(command) => {
            span.record("command", field::display("graph"));
            run_graph(command).map(CommandOutput::Graph)
        }
        Command::List(command) => {
            span.record("command", field::display("list"));
            run_list(command).map(CommandOutput::List)
        }
    }
}

#[instrument(
    name = "cli.graph",
    err,
    skip(command),
    fields(
        nodes = command.nodes,
        components = command.components,
        seeded = command.seed.is_some()
    ),
)]
pub(super) fn run_graph(command: GraphCommand) -> Result<Graph, CliError> {
    let mut builder = GraphConfigBuilder::new()
        .with_nodes(command.nodes)
        .with_components(command.components)
        .with_directed(!command.undirected)
        .with_loops(command.loops);
    if let Some(edges) = command.edges {
        builder = builder.with_edges(edges);
    }
    if let Some(strong_blocks) = command.strong_blocks {
        builder = builder.with_strong_blocks(strong_blocks);
    }
    if command.dag {
        builder = builder.dag();
    }
    let config = builder.build()?;

    let mut randomizer = match command.seed {
        Some(seed) => GraphRandomizer::from_seed(config, seed),
        None => GraphRandomizer::from_entropy(config),
    };
    let graph = randomizer.generate()?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph generated"
    );
    Ok(graph)
}

#[instrument(
    name = "cli.list",
    err,
    skip(command),
    fields(
        length = command.length,
        min = command.min,
        max = command.max
    ),
)]
pub(super) fn run_list(command: ListCommand) -> Result<Vec<i64>, CliError> {
    let ListCommand {
        length,
        min,
        max,
        unique,
        distinct,
        seed,
    } = command;
    if min > max {
        return Err(CliError::EmptyRange { min, max });
    }

    let mut order = seed.map_or_else(SmallRng::from_entropy, seeded);
    let mut values = SmallRng::seed_from_u64(order.next_u64());
    let mut randomizer =
        ListRandomizer::new(move || values.gen_range(min..=max)).with_length(length);
    randomizer = match distinct {
        Some(distinct) => randomizer.with_distinct(distinct),
        None => randomizer.with_unique(unique),
    };
    let list = randomizer.generate(&mut order)?;
    info!(length = list.len(), "list generated");
    Ok(list)
}

/// Renders `output` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_output(output: &CommandOutput, writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Graph(graph) => render_graph(graph, writer),
        CommandOutput::List(values) => render_list(values, writer),
    }
}

/// Writes `graph` as a header line `nodes edges` followed by one
/// `source target` line per edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use randgraph_cli::cli::render_graph;
/// # use randgraph_core::{Edge, Graph};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::new(3, true, vec![Edge::new(1, 0), Edge::new(2, 1)]);
/// let mut buffer = Vec::new();
/// render_graph(&graph, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "3 2\n1 0\n2 1\n");
/// # Ok(())
/// # }
/// ```
pub fn render_graph(graph: &Graph, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "{} {}", graph.node_count(), graph.edge_count())?;
    for edge in graph.edges() {
        writeln!(writer, "{} {}", edge.source, edge.target)?;
    }
    Ok(())
}

/// Writes `values` on one space-separated line.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_list(values: &[i64], mut writer: impl Write) -> io::Result<()> {
    let mut separator = "";
    for value in values {
        write!(writer, "{separator}{value}")?;
        separator = " ";
    }
    writeln!(writer)
}

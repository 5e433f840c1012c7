//! Command-line interface for the randgraph generators.
//!
//! The `graph` command prints a random graph as an edge list and the `list`
//! command prints a random list of integers. Both accept `--seed` for
//! reproducible output.

mod commands;

pub use commands::{
    Cli, CliError, Command, CommandOutput, GraphCommand, ListCommand, render_graph, render_list,
    render_output, run_cli,
};

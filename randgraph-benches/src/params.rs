//! Benchmark parameter types.

use std::fmt;

use randgraph_core::{GraphConfig, GraphConfigBuilder, GraphError};

/// Parameters for one graph generation benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Edge target per node.
    pub edges_per_node: usize,
    /// Number of weakly connected components.
    pub components: usize,
}

impl GenerationBenchParams {
    /// Total edge target.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.node_count.saturating_mul(self.edges_per_node)
    }

    /// Builds the generator configuration for these parameters.
    ///
    /// # Errors
    /// Returns [`GraphError`] when the parameters do not describe a valid
    /// graph.
    pub fn config(&self) -> Result<GraphConfig, GraphError> {
        GraphConfigBuilder::new()
            .with_nodes(self.node_count)
            .with_edges(self.edge_count())
            .with_components(self.components)
            .build()
    }
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},m={},c={}",
            self.node_count,
            self.edge_count(),
            self.components
        )
    }
}

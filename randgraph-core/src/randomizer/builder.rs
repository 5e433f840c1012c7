//! Builder utilities for configuring the graph randomizer.
//!
//! Accumulates option values, validates them, and resolves defaults into an
//! immutable [`GraphConfig`].

use tracing::warn;

use crate::{Result, error::GraphError};

use super::config::{GraphConfig, GraphShape};

const DEFAULT_NODES: usize = 8;
const DEFAULT_COMPONENTS: usize = 1;

/// Default edge target: ten percent more edges than nodes, rounded down.
const fn default_edges(nodes: usize) -> usize {
    nodes.saturating_mul(11) / 10
}

/// Configures and constructs [`GraphConfig`] values.
///
/// # Examples
/// ```
/// use randgraph_core::GraphConfigBuilder;
///
/// let config = GraphConfigBuilder::new()
///     .with_nodes(6)
///     .with_edges(7)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(config.nodes(), 6);
/// assert_eq!(config.edges(), 7);
/// assert_eq!(config.strong_blocks(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfigBuilder {
    nodes: usize,
    edges: Option<usize>,
    components: usize,
    strong_blocks: Option<usize>,
    directed: bool,
    allow_loops: bool,
    shape: GraphShape,
}

impl Default for GraphConfigBuilder {
    fn default() -> Self {
        Self {
            nodes: DEFAULT_NODES,
            edges: None,
            components: DEFAULT_COMPONENTS,
            strong_blocks: None,
            directed: true,
            allow_loops: false,
            shape: GraphShape::Basic,
        }
    }
}

impl GraphConfigBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::GraphConfigBuilder;
    ///
    /// let builder = GraphConfigBuilder::new();
    /// assert_eq!(builder.nodes(), 8);
    /// assert!(builder.directed());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node count.
    #[must_use]
    pub fn with_nodes(mut self, nodes: usize) -> Self {
        self.nodes = nodes;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Sets an explicit edge target. Without one the target is derived as
    /// `nodes * 11 / 10`.
    #[must_use]
    pub fn with_edges(mut self, edges: usize) -> Self {
        self.edges = Some(edges);
        self
    }

    /// Returns the explicit edge target, if one is set.
    #[must_use]
    pub fn edges(&self) -> Option<usize> {
        self.edges
    }

    /// Drops an explicit edge target so the derived default applies again.
    #[must_use]
    pub fn with_default_edges(mut self) -> Self {
        self.edges = None;
        self
    }

    /// Sets the number of weakly connected components.
    #[must_use]
    pub fn with_components(mut self, components: usize) -> Self {
        self.components = components;
        self
    }

    /// Returns the configured component count.
    #[must_use]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Requests an explicit number of strongly connected blocks.
    ///
    /// Requesting a count also makes the filler keep every extra edge
    /// pointing from a higher node id to a lower one, so no cycle spans two
    /// blocks.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::GraphConfigBuilder;
    ///
    /// let config = GraphConfigBuilder::new()
    ///     .with_nodes(10)
    ///     .with_edges(20)
    ///     .with_strong_blocks(3)
    ///     .build()
    ///     .expect("configuration is valid");
    /// assert_eq!(config.strong_blocks(), 3);
    /// assert!(config.enforces_block_order());
    /// ```
    #[must_use]
    pub fn with_strong_blocks(mut self, strong_blocks: usize) -> Self {
        self.strong_blocks = Some(strong_blocks);
        self
    }

    /// Returns the requested strong-block count, if any.
    #[must_use]
    pub fn strong_blocks(&self) -> Option<usize> {
        self.strong_blocks
    }

    /// Chooses directed or undirected edges.
    #[must_use]
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Returns whether the builder currently asks for directed edges.
    #[must_use]
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Allows or forbids self-loops.
    #[must_use]
    pub fn with_loops(mut self, allow_loops: bool) -> Self {
        self.allow_loops = allow_loops;
        self
    }

    /// Returns whether self-loops are currently allowed.
    #[must_use]
    pub fn allow_loops(&self) -> bool {
        self.allow_loops
    }

    /// Requests a directed acyclic graph.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{GraphConfigBuilder, GraphShape};
    ///
    /// let config = GraphConfigBuilder::new()
    ///     .with_nodes(5)
    ///     .with_directed(false)
    ///     .dag()
    ///     .build()
    ///     .expect("configuration is valid");
    /// assert_eq!(config.shape(), GraphShape::Dag);
    /// assert!(config.directed());
    /// assert_eq!(config.strong_blocks(), 5);
    /// ```
    #[must_use]
    pub fn dag(mut self) -> Self {
        self.shape = GraphShape::Dag;
        self
    }

    /// Requests a bipartite graph split by `ratio`.
    ///
    /// The ratio is validated and kept on the resulting configuration, but
    /// generation does not honour it yet.
    #[must_use]
    pub fn bipartite(mut self, ratio: f32) -> Self {
        self.shape = GraphShape::Bipartite { ratio };
        self
    }

    /// Returns the currently selected shape.
    #[must_use]
    pub fn shape(&self) -> GraphShape {
        self.shape
    }

    /// Validates the options and resolves defaults into a [`GraphConfig`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidNodeCount`] for zero nodes,
    /// [`GraphError::InvalidComponentCount`] for zero components,
    /// [`GraphError::StrongBlocksOutOfRange`] when a requested strong-block
    /// count is zero or exceeds the node count,
    /// [`GraphError::ComponentsExceedStrongBlocks`] when there are more
    /// components than resolved strong blocks, and
    /// [`GraphError::InvalidBipartiteRatio`] for ratios outside `(0, 1)`.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{GraphConfigBuilder, GraphError};
    ///
    /// let err = GraphConfigBuilder::new()
    ///     .with_nodes(4)
    ///     .with_strong_blocks(5)
    ///     .build()
    ///     .expect_err("more blocks than nodes");
    /// assert!(matches!(err, GraphError::StrongBlocksOutOfRange { .. }));
    /// ```
    pub fn build(self) -> Result<GraphConfig> {
        let nodes = self.nodes;
        if nodes == 0 {
            return Err(GraphError::InvalidNodeCount { got: nodes });
        }
        if self.components == 0 {
            return Err(GraphError::InvalidComponentCount {
                got: self.components,
            });
        }
        if let Some(strong_blocks) = self.strong_blocks {
            if strong_blocks == 0 || strong_blocks > nodes {
                return Err(GraphError::StrongBlocksOutOfRange {
                    strong_blocks,
                    nodes,
                });
            }
        }
        if let GraphShape::Bipartite { ratio } = self.shape {
            if !(ratio > 0.0 && ratio < 1.0) {
                return Err(GraphError::InvalidBipartiteRatio { ratio });
            }
            warn!(
                ratio,
                "bipartite shape is accepted but does not shape generation yet"
            );
        }

        let is_dag = matches!(self.shape, GraphShape::Dag);
        let directed = self.directed || is_dag;
        let strong_blocks = match self.strong_blocks {
            Some(requested) if directed && !is_dag => requested,
            _ => nodes,
        };
        if self.components > strong_blocks {
            return Err(GraphError::ComponentsExceedStrongBlocks {
                components: self.components,
                strong_blocks,
            });
        }

        Ok(GraphConfig {
            nodes,
            edges: self.edges.unwrap_or_else(|| default_edges(nodes)),
            components: self.components,
            strong_blocks,
            strong_blocks_requested: self.strong_blocks.is_some(),
            directed,
            allow_loops: self.allow_loops && !is_dag,
            shape: self.shape,
        })
    }
}

//! Resolved generation parameters.

/// Structural family of the generated graph.
///
/// # Examples
/// ```
/// use randgraph_core::GraphShape;
///
/// let shape = GraphShape::default();
/// assert_eq!(shape, GraphShape::Basic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GraphShape {
    /// No structural restriction beyond the configured counts.
    #[default]
    Basic,
    /// Directed acyclic graph: every node is its own strong block and
    /// every edge runs from a higher node id to a lower one.
    Dag,
    /// Two-sided graph split by `ratio`. Accepted and validated, but the
    /// generator does not consult it yet.
    Bipartite {
        /// Fraction of nodes placed on the first side.
        ratio: f32,
    },
}

/// Validated, fully defaulted configuration for one family of graphs.
///
/// Built by [`crate::GraphConfigBuilder::build`]; immutable afterwards and
/// reusable across any number of generation runs.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    pub(super) nodes: usize,
    pub(super) edges: usize,
    pub(super) components: usize,
    pub(super) strong_blocks: usize,
    pub(super) strong_blocks_requested: bool,
    pub(super) directed: bool,
    pub(super) allow_loops: bool,
    pub(super) shape: GraphShape,
}

/// Largest per-node edge rate granted to a single strong block.
const MAX_BLOCK_EDGE_RATE: usize = 2;

impl GraphConfig {
    /// Number of nodes in every generated graph.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Edge count every generated graph must reach.
    #[must_use]
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Number of weakly connected components.
    #[must_use]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Number of strong blocks after defaulting.
    #[must_use]
    pub fn strong_blocks(&self) -> usize {
        self.strong_blocks
    }

    /// Whether the caller asked for an explicit strong-block count.
    #[must_use]
    pub fn strong_blocks_requested(&self) -> bool {
        self.strong_blocks_requested
    }

    /// Whether edges are directed.
    #[must_use]
    pub fn directed(&self) -> bool {
        self.directed
    }

    /// Whether self-loops may be generated.
    #[must_use]
    pub fn allow_loops(&self) -> bool {
        self.allow_loops
    }

    /// Structural family requested by the caller.
    #[must_use]
    pub fn shape(&self) -> GraphShape {
        self.shape
    }

    /// Whether filler edges must point from higher to lower node ids so no
    /// cycle forms across strong blocks.
    #[must_use]
    pub fn enforces_block_order(&self) -> bool {
        self.strong_blocks_requested || matches!(self.shape, GraphShape::Dag)
    }

    /// Edge budget handed to a strong block of `block_len` nodes.
    ///
    /// The block receives its share of the global edge rate, capped at two
    /// edges per node.
    pub(super) fn block_edge_budget(&self, block_len: usize) -> usize {
        let proportional = block_len.saturating_mul(self.edges) / self.nodes.max(1);
        proportional.min(block_len.saturating_mul(MAX_BLOCK_EDGE_RATE))
    }
}

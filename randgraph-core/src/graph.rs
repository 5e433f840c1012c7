//! Output value produced by the graph randomizer.

use crate::registry::EdgeRegistry;

/// A single edge of a generated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    /// Node the edge leaves.
    pub source: usize,
    /// Node the edge enters.
    pub target: usize,
}

impl Edge {
    /// Creates an edge from `source` to `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Returns `true` when the edge starts and ends at the same node.
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Generated graph: a node count and an edge list over `[0, node_count)`.
///
/// Edges are listed in ascending `(source, target)` order.
///
/// # Examples
/// ```
/// use randgraph_core::{Edge, Graph};
///
/// let graph = Graph::new(3, true, vec![Edge::new(0, 1), Edge::new(1, 2)]);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    directed: bool,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph value from explicit parts.
    #[must_use]
    pub fn new(node_count: usize, directed: bool, edges: Vec<Edge>) -> Self {
        Self {
            node_count,
            directed,
            edges,
        }
    }

    pub(crate) fn from_registry(node_count: usize, registry: EdgeRegistry) -> Self {
        let directed = registry.is_directed();
        let edges = registry
            .into_edges()
            .into_iter()
            .map(|(source, target)| Edge::new(source, target))
            .collect();
        Self::new(node_count, directed, edges)
    }

    /// Number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the edges should be read as directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the edge list.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Consumes the graph and returns its edge list.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}

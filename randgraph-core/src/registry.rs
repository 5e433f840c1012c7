//! Duplicate-rejecting edge set used while a graph is being generated.

use std::collections::BTreeSet;

/// Canonical set of edges accumulated during one generation run.
///
/// In undirected mode `(u, v)` and `(v, u)` denote the same edge and only the
/// first orientation added is kept. The registry never removes edges and
/// applies no self-loop policy; callers decide which pairs to offer.
///
/// # Examples
/// ```
/// use randgraph_core::EdgeRegistry;
///
/// let mut registry = EdgeRegistry::new(false);
/// assert!(registry.try_add(1, 2));
/// assert!(!registry.try_add(2, 1));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRegistry {
    directed: bool,
    edges: BTreeSet<(usize, usize)>,
}

impl EdgeRegistry {
    /// Creates an empty registry with directed or undirected semantics.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            edges: BTreeSet::new(),
        }
    }

    /// Returns whether `(u, v)` and `(v, u)` are distinct edges.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Inserts `source -> target` unless the canonical edge already exists.
    ///
    /// Returns `true` when the edge was inserted.
    pub fn try_add(&mut self, source: usize, target: usize) -> bool {
        if self.contains(source, target) {
            return false;
        }
        self.edges.insert((source, target))
    }

    /// Returns whether the canonical edge for `(source, target)` is present.
    #[must_use]
    pub fn contains(&self, source: usize, target: usize) -> bool {
        self.edges.contains(&(source, target))
            || (!self.directed && self.edges.contains(&(target, source)))
    }

    /// Number of edges stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no edge has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over stored edges in ascending `(source, target)` order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    /// Consumes the registry, yielding its edges in ascending order.
    #[must_use]
    pub fn into_edges(self) -> Vec<(usize, usize)> {
        self.edges.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_registry_rejects_exact_duplicate() {
        let mut registry = EdgeRegistry::new(true);
        assert!(registry.try_add(1, 2));
        assert!(!registry.try_add(1, 2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn directed_registry_keeps_both_orientations() {
        let mut registry = EdgeRegistry::new(true);
        assert!(registry.try_add(1, 2));
        assert!(registry.try_add(2, 1));
        assert_eq!(registry.into_edges(), vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn undirected_registry_rejects_reverse_pair() {
        let mut registry = EdgeRegistry::new(false);
        assert!(registry.try_add(1, 2));
        assert!(!registry.try_add(2, 1));
        assert!(registry.contains(2, 1));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn self_loops_are_left_to_callers() {
        let mut registry = EdgeRegistry::new(false);
        assert!(registry.try_add(3, 3));
        assert!(!registry.try_add(3, 3));
        assert!(!registry.is_empty());
    }
}

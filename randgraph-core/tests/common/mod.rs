#![allow(
    dead_code,
    reason = "each integration test uses a subset of the helpers"
)]

use std::collections::BTreeSet;
use std::env;

use proptest::test_runner::Config as ProptestConfig;
use randgraph_core::{Graph, UniformSource};

/// Source that always returns the lowest admissible value.
pub struct ZeroSource;

impl UniformSource for ZeroSource {
    fn below(&mut self, _upper: usize) -> usize {
        0
    }
}

/// Builds a proptest configuration honouring `PROPTEST_CASES`.
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default_cases);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn adjacency(graph: &Graph, undirected: bool) -> Vec<Vec<usize>> {
    let mut adjacency = vec![Vec::new(); graph.node_count()];
    for edge in graph.edges() {
        adjacency[edge.source].push(edge.target);
        if undirected {
            adjacency[edge.target].push(edge.source);
        }
    }
    adjacency
}

fn reach(adjacency: &[Vec<usize>], start: usize) -> BTreeSet<usize> {
    let mut seen = BTreeSet::from([start]);
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        for &next in &adjacency[node] {
            if seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen
}

/// Reachability closure: `closure[u]` holds every node reachable from `u`.
#[must_use]
pub fn reachability_closure(graph: &Graph) -> Vec<BTreeSet<usize>> {
    let adjacency = adjacency(graph, false);
    (0..graph.node_count())
        .map(|node| reach(&adjacency, node))
        .collect()
}

/// Number of strongly connected components, derived from the closure.
#[must_use]
pub fn strong_component_count(graph: &Graph) -> usize {
    let closure = reachability_closure(graph);
    let classes: BTreeSet<BTreeSet<usize>> = (0..graph.node_count())
        .map(|node| {
            closure[node]
                .iter()
                .copied()
                .filter(|&other| closure[other].contains(&node))
                .collect()
        })
        .collect();
    classes.len()
}

/// Number of components when edge direction is ignored.
#[must_use]
pub fn weak_component_count(graph: &Graph) -> usize {
    let adjacency = adjacency(graph, true);
    let mut assigned = vec![false; graph.node_count()];
    let mut count = 0;
    for node in 0..graph.node_count() {
        if assigned[node] {
            continue;
        }
        count += 1;
        for member in reach(&adjacency, node) {
            assigned[member] = true;
        }
    }
    count
}

/// Whether no edge appears twice, in either orientation when `undirected`.
#[must_use]
pub fn edges_are_distinct(graph: &Graph, undirected: bool) -> bool {
    let mut seen = BTreeSet::new();
    graph.edges().iter().all(|edge| {
        let key = if undirected {
            (edge.source.min(edge.target), edge.source.max(edge.target))
        } else {
            (edge.source, edge.target)
        };
        seen.insert(key)
    })
}

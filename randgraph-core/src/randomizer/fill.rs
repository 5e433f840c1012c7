//! Leftover edge filling once the structural edges are in place.

use crate::{
    registry::EdgeRegistry,
    rng::{UniformSource, shuffle},
};

use super::{condense::Condensation, config::GraphConfig};

/// Graphs up to this many nodes draw filler edges from the exhaustive pair
/// pool; larger graphs sample pairs.
pub(super) const EXHAUSTIVE_NODE_LIMIT: usize = 1_000;

/// Sampling attempts granted per requested edge in sampled mode.
const SAMPLED_ATTEMPTS_PER_EDGE: usize = 10;

/// Strategy used to propose filler candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FillMode {
    /// Walk every ordered pair once in shuffled order.
    Exhaustive,
    /// Draw pairs at random within a component, up to `max_attempts` times.
    Sampled {
        /// Upper bound on proposals.
        max_attempts: usize,
    },
}

impl FillMode {
    pub(super) fn for_config(config: &GraphConfig) -> Self {
        if config.nodes() <= EXHAUSTIVE_NODE_LIMIT {
            Self::Exhaustive
        } else {
            Self::Sampled {
                max_attempts: config.edges().saturating_mul(SAMPLED_ATTEMPTS_PER_EDGE),
            }
        }
    }
}

/// Adds filler edges until the registry holds `config.edges()` edges or the
/// candidate supply runs out. Returns the number of candidates proposed.
pub(super) fn fill_remaining<S: UniformSource + ?Sized>(
    config: &GraphConfig,
    condensation: &Condensation,
    registry: &mut EdgeRegistry,
    source: &mut S,
) -> usize {
    let mut filler = Filler {
        config,
        condensation,
        registry,
    };
    match FillMode::for_config(config) {
        FillMode::Exhaustive => filler.exhaustive(source),
        FillMode::Sampled { max_attempts } => filler.sampled(source, max_attempts),
    }
}

struct Filler<'a> {
    config: &'a GraphConfig,
    condensation: &'a Condensation,
    registry: &'a mut EdgeRegistry,
}

impl Filler<'_> {
    fn satisfied(&self) -> bool {
        self.registry.len() >= self.config.edges()
    }

    fn exhaustive<S: UniformSource + ?Sized>(&mut self, source: &mut S) -> usize {
        if self.satisfied() {
            return 0;
        }
        let nodes = self.config.nodes();
        let mut pool: Vec<(usize, usize)> = (0..nodes)
            .flat_map(|from| (0..nodes).map(move |to| (from, to)))
            .collect();
        shuffle(source, &mut pool);

        let mut proposed = 0;
        for (from, to) in pool {
            if self.satisfied() {
                break;
            }
            proposed += 1;
            self.offer(from, to);
        }
        proposed
    }

    fn sampled<S: UniformSource + ?Sized>(&mut self, source: &mut S, max_attempts: usize) -> usize {
        let nodes = self.config.nodes();
        let mut proposed = 0;
        while !self.satisfied() && proposed < max_attempts {
            proposed += 1;
            let from = source.below(nodes);
            let component = &self.condensation.members[self.condensation.component_of[from]];
            let to = component[source.below(component.len())];
            self.offer(from, to);
        }
        proposed
    }

    /// Inserts the candidate when it respects the loop, ordering, component
    /// and uniqueness rules. Returns whether an edge was added.
    fn offer(&mut self, from: usize, to: usize) -> bool {
        if from == to && !self.config.allow_loops() {
            return false;
        }
        let (from, to) = if self.config.enforces_block_order() && from < to {
            (to, from)
        } else {
            (from, to)
        };
        if !self.condensation.same_component(from, to) {
            return false;
        }
        self.registry.try_add(from, to)
    }
}

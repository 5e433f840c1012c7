//! Grouping strong blocks into weakly connected components.

use crate::{Result, composition::random_composition, registry::EdgeRegistry, rng::UniformSource};

/// Node membership of each weakly connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Condensation {
    /// Node ids of each component, in block order.
    pub(super) members: Vec<Vec<usize>>,
    /// Component index of every node.
    pub(super) component_of: Vec<usize>,
}

impl Condensation {
    pub(super) fn same_component(&self, left: usize, right: usize) -> bool {
        self.component_of.get(left) == self.component_of.get(right)
    }
}

/// Groups consecutive runs of `blocks` into `components` components and
/// links the blocks of each run with a random tree.
///
/// Block `j` of a run (counting from zero) picks its parent among the run's
/// blocks `[j / 3, j - 1]`, which keeps early blocks from collecting most of
/// the children. The tree edge runs from a random node of the child block to
/// a random node of the parent block.
pub(super) fn merge_blocks<S: UniformSource + ?Sized>(
    blocks: &[Vec<usize>],
    components: usize,
    registry: &mut EdgeRegistry,
    source: &mut S,
) -> Result<Condensation> {
    let sizes = random_composition(source, components, blocks.len())?;

    let mut members = Vec::with_capacity(components);
    let node_count = blocks.iter().map(Vec::len).sum();
    let mut component_of = vec![0; node_count];
    let mut start = 0;
    for (component, size) in sizes.into_iter().enumerate() {
        let run = &blocks[start..start + size];
        for (child, child_block) in run.iter().enumerate().skip(1) {
            let parent_block = &run[source.between(child / 3, child - 1)];
            let from = child_block[source.below(child_block.len())];
            let to = parent_block[source.below(parent_block.len())];
            registry.try_add(from, to);
        }

        let nodes: Vec<usize> = run.iter().flatten().copied().collect();
        for &node in &nodes {
            component_of[node] = component;
        }
        members.push(nodes);
        start += size;
    }

    Ok(Condensation {
        members,
        component_of,
    })
}

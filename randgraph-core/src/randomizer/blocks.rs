//! Strong-block partitioning and per-block cycle construction.

use crate::{Result, composition::random_composition, registry::EdgeRegistry, rng::UniformSource};

/// Splits `[0, nodes)` into `count` contiguous, ascending blocks of random
/// sizes.
pub(super) fn partition_blocks<S: UniformSource + ?Sized>(
    source: &mut S,
    nodes: usize,
    count: usize,
) -> Result<Vec<Vec<usize>>> {
    let sizes = random_composition(source, count, nodes)?;
    let mut next = 0;
    Ok(sizes
        .into_iter()
        .map(|size| {
            let block = (next..next + size).collect();
            next += size;
            block
        })
        .collect())
}

/// Makes `block` strongly connected by covering it with randomised cycles.
///
/// Vertices are consumed left to right. Each new chain `block[begin..=end]`
/// is spliced into the already covered prefix through two edges: one from a
/// random covered vertex into the chain head, one from the chain tail to a
/// random covered vertex. Since the prefix is strongly connected, so is the
/// prefix plus the chain.
///
/// Whether a chain keeps growing is random until the remaining budget runs
/// low, at which point every remaining vertex joins the current chain; one
/// long cycle is the cheapest cover.
///
/// Returns the number of edges attempted. Splice edges that already existed
/// are still counted, so the result bounds the work done rather than the
/// edges inserted.
pub(super) fn connect_block<S: UniformSource + ?Sized>(
    block: &[usize],
    budget: usize,
    registry: &mut EdgeRegistry,
    source: &mut S,
) -> usize {
    let len = block.len();
    if len <= 1 {
        return 0;
    }

    let mut used = 0;
    let mut pos = 0;
    while pos + 1 < len {
        pos += 1;
        let begin = pos;
        let entry = block[source.below(begin)];
        let exit = block[source.below(begin)];

        while pos + 1 < len
            && (source.below(len) > pos || budget.saturating_sub(used) <= len - begin + 1)
        {
            pos += 1;
        }

        for window in block[begin..=pos].windows(2) {
            registry.try_add(window[0], window[1]);
            used += 1;
        }
        registry.try_add(entry, block[begin]);
        registry.try_add(block[pos], exit);
        used += 2;
    }
    used
}

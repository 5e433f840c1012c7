//! Random compositions of an integer into positive parts.

use crate::{Result, error::GraphError, rng::UniformSource};

/// Splits `sum` into `count` positive parts that add up to exactly `sum`.
///
/// Uses a stars-and-bars construction: `count - 1` cut points are drawn
/// uniformly from `[0, sum - count]`, a final cut is pinned at
/// `sum - count`, and the sorted cuts are turned into gaps.
///
/// # Errors
/// Returns [`GraphError::InvalidComposition`] when `count` is zero or
/// `sum < count`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_core::random_composition;
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let parts = random_composition(&mut rng, 4, 20).expect("composition exists");
/// assert_eq!(parts.len(), 4);
/// assert_eq!(parts.iter().sum::<usize>(), 20);
/// assert!(parts.iter().all(|&part| part >= 1));
/// ```
pub fn random_composition<S: UniformSource + ?Sized>(
    source: &mut S,
    count: usize,
    sum: usize,
) -> Result<Vec<usize>> {
    if count == 0 || sum < count {
        return Err(GraphError::InvalidComposition { count, sum });
    }

    let slack = sum - count;
    let mut cuts: Vec<usize> = (1..count).map(|_| source.below(slack + 1)).collect();
    cuts.push(slack);
    cuts.sort_unstable();

    let mut previous = 0;
    let parts = cuts
        .into_iter()
        .map(|cut| {
            let part = 1 + cut - previous;
            previous = cut;
            part
        })
        .collect();
    Ok(parts)
}

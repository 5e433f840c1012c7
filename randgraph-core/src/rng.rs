//! Uniform integer sources used by the generators.
//!
//! Every random decision made by the randomizers goes through
//! [`UniformSource`], so tests can substitute a deterministic source and
//! concurrent generations can each own an independent generator.

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Source of uniformly distributed integers.
///
/// A blanket implementation covers every [`rand::Rng`], so `SmallRng`,
/// `StdRng` and `thread_rng()` can be passed wherever a source is expected.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_core::UniformSource;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let value = rng.below(10);
/// assert!(value < 10);
/// let bounded = rng.between(3, 5);
/// assert!((3..=5).contains(&bounded));
/// ```
pub trait UniformSource {
    /// Returns a value in `[0, upper)`, or `0` when `upper` is zero.
    fn below(&mut self, upper: usize) -> usize;

    /// Returns a value in `[low, high]`. Returns `low` when `high < low`.
    fn between(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        low + self.below(high - low + 1)
    }
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn below(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.gen_range(0..upper)
    }
}

/// Shuffles `items` in place with a Fisher-Yates pass driven by `source`.
pub fn shuffle<T, S: UniformSource + ?Sized>(source: &mut S, items: &mut [T]) {
    for upper in (1..items.len()).rev() {
        let pick = source.below(upper + 1);
        items.swap(upper, pick);
    }
}

/// Builds the reproducible generator used for seeded runs.
#[must_use]
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

//! Companion generator for randomised value lists.
//!
//! Values come from a caller-supplied engine closure; the randomizer only
//! controls length, uniqueness and how many distinct values appear.

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::instrument;

use crate::{
    error::ListError,
    rng::{UniformSource, shuffle},
};

const DEFAULT_LENGTH: usize = 10;

/// Engine draws allowed per distinct value before giving up.
const DRAWS_PER_DISTINCT_VALUE: usize = 64;

/// Generates lists of values drawn from an engine closure.
///
/// # Examples
/// ```
/// use rand::{Rng, SeedableRng, rngs::SmallRng};
/// use randgraph_core::ListRandomizer;
///
/// let mut values = SmallRng::seed_from_u64(1);
/// let mut order = SmallRng::seed_from_u64(2);
/// let mut randomizer = ListRandomizer::new(move || values.gen_range(0..100_u32))
///     .with_length(6)
///     .with_distinct(2);
/// let list = randomizer.generate(&mut order).expect("two distinct values exist");
/// assert_eq!(list.len(), 6);
/// let mut distinct = list.clone();
/// distinct.sort_unstable();
/// distinct.dedup();
/// assert_eq!(distinct.len(), 2);
/// ```
pub struct ListRandomizer<T, F> {
    engine: F,
    length: usize,
    unique: bool,
    distinct: Option<usize>,
    _value: PhantomData<fn() -> T>,
}

impl<T, F> ListRandomizer<T, F>
where
    T: Clone + Eq + Hash,
    F: FnMut() -> T,
{
    /// Creates a randomizer producing ten values from `engine`.
    #[must_use]
    pub fn new(engine: F) -> Self {
        Self {
            engine,
            length: DEFAULT_LENGTH,
            unique: false,
            distinct: None,
            _value: PhantomData,
        }
    }

    /// Sets the number of values per list.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Requires every value in the list to differ. Clears any explicit
    /// distinct count.
    #[must_use]
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self.distinct = None;
        self
    }

    /// Requires exactly `distinct` different values, repeated to fill the
    /// list.
    #[must_use]
    pub fn with_distinct(mut self, distinct: usize) -> Self {
        self.unique = true;
        self.distinct = Some(distinct);
        self
    }

    /// Returns the configured list length.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct values the next list will contain, if fixed.
    #[must_use]
    pub fn distinct(&self) -> Option<usize> {
        match self.distinct {
            Some(distinct) => Some(distinct),
            None if self.unique => Some(self.length),
            None => None,
        }
    }

    /// Generates a list, shuffling it with `source`.
    ///
    /// # Errors
    /// Returns [`ListError::DistinctExceedsLength`] when more distinct values
    /// are requested than the list can hold, and
    /// [`ListError::DistinctValuesExhausted`] when the engine keeps repeating
    /// values it already produced.
    #[instrument(
        name = "list.generate",
        err,
        skip(self, source),
        fields(length = self.length, distinct = self.distinct()),
    )]
    pub fn generate<S: UniformSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Vec<T>, ListError> {
        let distinct = self.distinct().filter(|&distinct| distinct > 0);
        let mut values = Vec::with_capacity(self.length);

        if let Some(distinct) = distinct {
            if distinct > self.length {
                return Err(ListError::DistinctExceedsLength {
                    distinct,
                    length: self.length,
                });
            }
            let pool = self.draw_distinct(distinct)?;
            values.extend(pool.iter().cloned());
            while values.len() < self.length {
                values.push(pool[source.below(pool.len())].clone());
            }
        } else {
            values.extend((0..self.length).map(|_| (self.engine)()));
        }

        shuffle(source, &mut values);
        Ok(values)
    }

    fn draw_distinct(&mut self, distinct: usize) -> Result<Vec<T>, ListError> {
        let max_attempts = distinct.saturating_mul(DRAWS_PER_DISTINCT_VALUE);
        let mut seen = HashSet::with_capacity(distinct);
        let mut pool = Vec::with_capacity(distinct);
        let mut attempts = 0;
        while pool.len() < distinct {
            if attempts == max_attempts {
                return Err(ListError::DistinctValuesExhausted {
                    distinct,
                    found: pool.len(),
                    attempts,
                });
            }
            attempts += 1;
            let value = (self.engine)();
            if seen.insert(value.clone()) {
                pool.push(value);
            }
        }
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    fn counter() -> impl FnMut() -> u32 {
        let mut next = 0;
        move || {
            next += 1;
            next
        }
    }

    #[test]
    fn default_list_has_ten_engine_values() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut randomizer = ListRandomizer::new(counter());
        let mut list = randomizer
            .generate(&mut rng)
            .expect("plain lists never fail");
        list.sort_unstable();
        assert_eq!(list, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn unique_lists_never_repeat() {
        let mut values = SmallRng::seed_from_u64(8);
        let mut rng = SmallRng::seed_from_u64(9);
        let mut randomizer = ListRandomizer::new(move || values.gen_range(0..40_u32))
            .with_length(25)
            .with_unique(true);
        let list = randomizer
            .generate(&mut rng)
            .expect("40 candidates cover 25 values");
        let distinct: HashSet<u32> = list.iter().copied().collect();
        assert_eq!(list.len(), 25);
        assert_eq!(distinct.len(), 25);
    }

    #[rstest]
    #[case(12, 1)]
    #[case(12, 5)]
    #[case(5, 5)]
    fn distinct_count_is_exact(#[case] length: usize, #[case] distinct: usize) {
        let mut rng = SmallRng::seed_from_u64(21);
        let mut randomizer = ListRandomizer::new(counter())
            .with_length(length)
            .with_distinct(distinct);
        let list = randomizer
            .generate(&mut rng)
            .expect("counter never repeats");
        let seen: HashSet<u32> = list.iter().copied().collect();
        assert_eq!(list.len(), length);
        assert_eq!(seen.len(), distinct);
    }

    #[test]
    fn rejects_more_distinct_values_than_slots() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut randomizer = ListRandomizer::new(counter())
            .with_length(3)
            .with_distinct(4);
        let err = randomizer
            .generate(&mut rng)
            .expect_err("4 values cannot fit 3 slots");
        assert_eq!(
            err,
            ListError::DistinctExceedsLength {
                distinct: 4,
                length: 3,
            }
        );
    }

    #[test]
    fn repetitive_engine_is_reported() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut randomizer = ListRandomizer::new(|| 7_u8)
            .with_length(4)
            .with_unique(true);
        let err = randomizer
            .generate(&mut rng)
            .expect_err("engine yields one value");
        assert_eq!(err.code().as_str(), "LIST_DISTINCT_VALUES_EXHAUSTED");
        assert!(matches!(
            err,
            ListError::DistinctValuesExhausted {
                distinct: 4,
                found: 1,
                attempts: 256,
            }
        ));
    }

    #[test]
    fn unique_flag_clears_explicit_distinct_count() {
        let randomizer = ListRandomizer::new(counter())
            .with_length(6)
            .with_distinct(2)
            .with_unique(false);
        assert_eq!(randomizer.distinct(), None);
        assert_eq!(randomizer.length(), 6);
    }
}

//! Eager cache: F(1)..=F(L) precomputed once and then read-only.

use num_bigint::BigUint;
use num_traits::One;

use crate::memory_budget::value_bytes;

/// Immutable table of Fibonacci values for indices `1..=limit`.
///
/// Built single-threaded by [`EagerCache::build`]; there is no way to mutate
/// it afterwards, so shared references can be read from any thread.
#[derive(Debug)]
pub struct EagerCache {
    /// `values[i - 1]` holds F(i).
    values: Box<[BigUint]>,
}

impl EagerCache {
    /// Populate the cache for `1..=len` with the additive recurrence.
    ///
    /// `len` must be at least 2; callers validate the configured limit first.
    pub(crate) fn build(len: usize) -> Self {
        debug_assert!(len >= 2, "eager cache needs both base cases");

        let mut values: Vec<BigUint> = Vec::with_capacity(len);
        values.push(BigUint::one());
        values.push(BigUint::one());
        for i in 2..len {
            let next = &values[i - 1] + &values[i - 2];
            values.push(next);
        }

        Self {
            values: values.into_boxed_slice(),
        }
    }

    /// Highest cached index (L).
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.values.len() as u64
    }

    /// Look up F(n) for `1 <= n <= limit`.
    #[must_use]
    pub fn get(&self, n: u64) -> Option<&BigUint> {
        let idx = usize::try_from(n.checked_sub(1)?).ok()?;
        self.values.get(idx)
    }

    /// The two highest entries, F(L-1) and F(L).
    #[must_use]
    pub fn boundary(&self) -> (&BigUint, &BigUint) {
        let len = self.values.len();
        (&self.values[len - 2], &self.values[len - 1])
    }

    /// Bytes of digit storage held by all cached values.
    #[must_use]
    pub fn digit_bytes(&self) -> usize {
        self.values.iter().map(value_bytes).sum()
    }
}

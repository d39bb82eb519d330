//! Call-local extension cache for indices beyond the eager range.
//!
//! Seeded from the eager cache boundary and stepped forward one index at a
//! time. Only the two highest entries are kept, since the recurrence never
//! reads further back; rotation reuses both digit buffers.

use num_bigint::BigUint;

use crate::eager::EagerCache;

/// Sliding window over F(index - 1) and F(index), starting at `L + 2`.
pub(crate) struct ExtensionCache {
    index: u64,
    prev: BigUint,
    current: BigUint,
}

impl ExtensionCache {
    /// Seed F(L+1) = F(L) + F(L-1) and F(L+2) = F(L+1) + F(L).
    pub(crate) fn seeded(eager: &EagerCache) -> Self {
        let limit = eager.limit();
        let (before_last, last) = eager.boundary();
        let prev = last + before_last;
        let current = &prev + last;

        Self {
            index: limit + 2,
            prev,
            current,
        }
    }

    /// Highest index held.
    pub(crate) fn index(&self) -> u64 {
        self.index
    }

    /// Step forward until the window's highest index reaches `n`.
    pub(crate) fn extend_to(&mut self, n: u64) {
        while self.index < n {
            // prev <- F(i-1) + F(i) = F(i+1), then swap so current is the newest.
            self.prev += &self.current;
            std::mem::swap(&mut self.prev, &mut self.current);
            self.index += 1;
        }
    }

    /// Consume the cache, returning F(n) for `n` inside the window.
    ///
    /// After `extend_to(n)` with `n > L` the window always holds `n`: either
    /// as its highest entry, or as F(L+1) just below the seeded F(L+2).
    pub(crate) fn into_value(self, n: u64) -> BigUint {
        debug_assert!(n == self.index || n == self.index - 1, "F({n}) left the window");
        if n == self.index {
            self.current
        } else {
            self.prev
        }
    }
}

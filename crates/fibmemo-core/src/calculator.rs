//! The memoized calculator and its error type.
//!
//! `MemoizedCalculator` answers from the eager cache for `n <= L` and from a
//! fresh, call-local `ExtensionCache` for `n > L`. Nothing is mutated after
//! construction, so one instance can be shared across threads without locks.

use std::borrow::Cow;
use std::time::Instant;

use num_bigint::BigUint;
use tracing::{debug, info};

use crate::constants::{DEFAULT_EAGER_LIMIT, MIN_EAGER_LIMIT};
use crate::eager::EagerCache;
use crate::extension::ExtensionCache;
use crate::memory_budget::MemoryEstimate;
use crate::options::CalculatorOptions;

/// Error type for Fibonacci lookups and calculator construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The requested index is missing or not positive. The message is meant
    /// to be shown to the caller as is.
    #[error("{0}")]
    InvalidArgument(String),

    /// The calculator could not be built with the given options.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Check a requested index and turn it into a cache index.
///
/// # Errors
///
/// Returns [`FibError::InvalidArgument`] if `n` is absent or not positive.
pub fn validate(n: Option<i64>) -> Result<u64, FibError> {
    let n = n.ok_or_else(|| FibError::InvalidArgument("Argument must be provided".into()))?;
    u64::try_from(n)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| FibError::InvalidArgument(format!("Argument must be positive, but is: {n}")))
}

/// Two-tier memoized Fibonacci calculator.
///
/// A value of this type only exists once the eager cache is fully populated,
/// which makes "initializing" and "ready" distinct at the type level.
#[derive(Debug)]
pub struct MemoizedCalculator {
    eager: EagerCache,
}

impl MemoizedCalculator {
    /// Build a calculator with the default eager limit.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new() -> Self {
        Self::build(DEFAULT_EAGER_LIMIT as usize)
    }

    /// Build a calculator from explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`FibError::Config`] if the eager limit is below
    /// [`MIN_EAGER_LIMIT`], not addressable on this platform, or its
    /// estimated footprint exceeds `memory_limit`.
    pub fn with_options(opts: &CalculatorOptions) -> Result<Self, FibError> {
        let limit = opts.eager_limit;
        if limit < MIN_EAGER_LIMIT {
            return Err(FibError::Config(format!(
                "eager limit must be at least {MIN_EAGER_LIMIT}, but is: {limit}"
            )));
        }
        let len = usize::try_from(limit)
            .map_err(|_| FibError::Config(format!("eager limit {limit} is too large")))?;

        let estimate = MemoryEstimate::estimate(limit);
        if !estimate.fits_in(opts.memory_limit) {
            return Err(FibError::Config(format!(
                "eager cache for limit {limit} needs about {} MB, above the {} MB limit",
                estimate.total_bytes / (1024 * 1024),
                opts.memory_limit.unwrap_or(0) / (1024 * 1024)
            )));
        }

        Ok(Self::build(len))
    }

    fn build(len: usize) -> Self {
        let start = Instant::now();
        let eager = EagerCache::build(len);
        info!(
            limit = eager.limit(),
            digit_bytes = eager.digit_bytes(),
            elapsed = ?start.elapsed(),
            "eager cache ready"
        );
        Self { eager }
    }

    /// Highest index served from the eager cache (L).
    #[must_use]
    pub fn eager_limit(&self) -> u64 {
        self.eager.limit()
    }

    /// Read-only access to the eager cache.
    #[must_use]
    pub fn eager_cache(&self) -> &EagerCache {
        &self.eager
    }

    /// Compute F(n) for a requested, not yet validated index.
    ///
    /// Values inside the eager range are borrowed from the cache; values
    /// beyond it are computed on this call and owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`FibError::InvalidArgument`] if `n` is absent or not positive.
    pub fn fibonacci(&self, n: Option<i64>) -> Result<Cow<'_, BigUint>, FibError> {
        let n = validate(n)?;
        Ok(self.fibonacci_at(n))
    }

    /// Compute F(n) for an index already known to be positive.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn fibonacci_at(&self, n: u64) -> Cow<'_, BigUint> {
        assert!(n >= 1, "Fibonacci index must be positive");
        match self.eager.get(n) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(self.extend(n)),
        }
    }

    /// Recompute from the eager boundary up to `n > L`.
    fn extend(&self, n: u64) -> BigUint {
        let mut ext = ExtensionCache::seeded(&self.eager);
        debug!(
            n,
            limit = self.eager.limit(),
            steps = n.saturating_sub(ext.index()),
            "extending beyond eager cache"
        );
        ext.extend_to(n);
        ext.into_value(n)
    }
}

impl Default for MemoizedCalculator {
    fn default() -> Self {
        Self::new()
    }
}

//! # fibmemo-core
//!
//! Memoized arbitrary-precision Fibonacci calculator.
//!
//! F(1)..=F(L) are precomputed once into an immutable eager cache; indices
//! beyond L are recomputed per call from the cache boundary, so long-term
//! memory stays bounded while any positive index can still be answered.

pub mod calculator;
pub mod constants;
pub mod eager;
pub(crate) mod extension;
pub mod memory_budget;
pub mod options;

use std::sync::OnceLock;

// Re-exports
pub use calculator::{validate, FibError, MemoizedCalculator};
pub use constants::{exit_codes, DEFAULT_EAGER_LIMIT, MIN_EAGER_LIMIT};
pub use eager::EagerCache;
pub use memory_budget::{parse_memory_limit, MemoryEstimate};
pub use options::CalculatorOptions;

use num_bigint::BigUint;

static SHARED: OnceLock<MemoizedCalculator> = OnceLock::new();

/// Process-wide calculator with the default eager limit.
///
/// Built on first use; concurrent first callers block until the eager cache
/// is complete, and all of them receive the same instance.
#[must_use]
pub fn shared() -> &'static MemoizedCalculator {
    SHARED.get_or_init(MemoizedCalculator::new)
}

/// Compute F(n) with the process-wide calculator.
///
/// This is a convenience function for simple use cases. Services that need a
/// different eager limit should build their own [`MemoizedCalculator`].
///
/// # Example
/// ```
/// assert_eq!(fibmemo_core::fibonacci(Some(10)).unwrap().to_string(), "55");
/// assert!(fibmemo_core::fibonacci(Some(0)).is_err());
/// ```
///
/// # Errors
///
/// Returns [`FibError::InvalidArgument`] if `n` is absent or not positive.
pub fn fibonacci(n: Option<i64>) -> Result<BigUint, FibError> {
    shared().fibonacci(n).map(std::borrow::Cow::into_owned)
}

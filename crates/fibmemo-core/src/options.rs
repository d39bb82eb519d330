//! Calculator construction options.

use crate::constants::DEFAULT_EAGER_LIMIT;

/// Options for building a [`MemoizedCalculator`](crate::MemoizedCalculator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorOptions {
    /// Highest index precomputed into the eager cache (L).
    pub eager_limit: u64,
    /// Upper bound in bytes for the eager cache footprint (`None` = unlimited).
    pub memory_limit: Option<usize>,
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            eager_limit: DEFAULT_EAGER_LIMIT,
            memory_limit: None,
        }
    }
}

impl CalculatorOptions {
    /// Options with the given eager limit and no memory limit.
    #[must_use]
    pub fn with_eager_limit(eager_limit: u64) -> Self {
        Self {
            eager_limit,
            ..Self::default()
        }
    }

    /// Normalize options: a zero eager limit or zero memory limit means "use the default".
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.eager_limit == 0 {
            self.eager_limit = DEFAULT_EAGER_LIMIT;
        }
        if self.memory_limit == Some(0) {
            self.memory_limit = None;
        }
        self
    }
}

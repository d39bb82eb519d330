//! Constants for the eager cache and process exit codes.

/// Default number of indices precomputed at construction (F(1)..=F(10000)).
///
/// Raising this to 100,000 costs roughly 0.5 GB, since the size of F(i)
/// grows linearly with i.
pub const DEFAULT_EAGER_LIMIT: u64 = 10_000;

/// Smallest accepted eager limit.
///
/// The boundary seeds read F(L) and F(L-1), and the eager range must cover
/// both base cases F(1) and F(2).
pub const MIN_EAGER_LIMIT: u64 = 3;

/// log2 of the golden ratio: F(n) takes about `n * LOG2_PHI` bits.
pub const LOG2_PHI: f64 = 0.694_241_913_630_617;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(93) is the largest Fibonacci number that fits in `u64`; the table is an
/// independent reference for the low end of the eager cache.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes for the service binary.
pub mod exit_codes {
    /// Generic error (bind failure, runtime error).
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration, including a calculator that could not be built.
    pub const ERROR_CONFIG: i32 = 4;
}

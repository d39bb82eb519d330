//! Shared fixtures for the workspace-level integration tests.
//!
//! Reference values live in `tests/testdata/fibonacci_golden.json`, indexed
//! with F(1) = F(2) = 1.

use std::str::FromStr;

use num_bigint::BigUint;
use serde::Deserialize;

/// Contents of the golden file.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    /// Free-form description of the data set.
    pub description: String,
    /// Reference entries.
    pub values: Vec<GoldenEntry>,
}

/// One reference value: either exact, or a prefix/suffix/digit-count summary.
#[derive(Debug, Deserialize)]
pub struct GoldenEntry {
    /// Index.
    pub n: u64,
    /// Exact decimal value.
    #[serde(default)]
    pub fib: Option<String>,
    /// Leading decimal digits.
    #[serde(default)]
    pub fib_prefix: Option<String>,
    /// Trailing decimal digits.
    #[serde(default)]
    pub fib_suffix: Option<String>,
    /// Number of decimal digits.
    #[serde(default)]
    pub fib_digits: Option<usize>,
}

impl GoldenEntry {
    /// Exact value, if the entry carries one.
    #[must_use]
    pub fn exact(&self) -> Option<BigUint> {
        self.fib.as_deref().and_then(|s| BigUint::from_str(s).ok())
    }

    /// Check a decimal rendering against whatever the entry records.
    #[must_use]
    pub fn matches(&self, decimal: &str) -> bool {
        self.fib.as_deref().map_or(true, |f| f == decimal)
            && self.fib_prefix.as_deref().map_or(true, |p| decimal.starts_with(p))
            && self.fib_suffix.as_deref().map_or(true, |s| decimal.ends_with(s))
            && self.fib_digits.map_or(true, |d| d == decimal.len())
    }
}

/// Load the golden file from the workspace root.
///
/// # Panics
///
/// Panics if the file is missing or malformed.
#[must_use]
pub fn load_golden() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

/// Look up the entry for index `n`.
///
/// # Panics
///
/// Panics if the golden file has no entry for `n`.
#[must_use]
pub fn golden_entry(data: &GoldenData, n: u64) -> &GoldenEntry {
    data.values
        .iter()
        .find(|e| e.n == n)
        .unwrap_or_else(|| panic!("no golden entry for n={n}"))
}

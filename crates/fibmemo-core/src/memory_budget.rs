//! Memory budget estimation for the eager cache.

use num_bigint::BigUint;

use crate::constants::LOG2_PHI;

/// Memory estimate for an eager cache holding F(1)..=F(limit).
#[derive(Debug, Clone)]
pub struct MemoryEstimate {
    /// Bytes of digit storage across all cached values.
    pub digit_bytes: usize,
    /// Bytes of fixed per-entry overhead (the `BigUint` headers in the slice).
    pub overhead_bytes: usize,
    /// Total estimated memory (in bytes).
    pub total_bytes: usize,
}

impl MemoryEstimate {
    /// Estimate the eager cache footprint for the given limit.
    ///
    /// F(i) has about `i * log2(phi)` bits, so the digit storage grows
    /// quadratically with the limit: sum(i * log2(phi) / 8) over 1..=limit.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn estimate(limit: u64) -> Self {
        let n = limit as f64;
        let total_bits = LOG2_PHI * n * (n + 1.0) / 2.0;
        let entries = usize::try_from(limit).unwrap_or(usize::MAX);
        // Each value rounds up to a whole 64-bit limb. Float-to-int casts saturate.
        let digit_bytes =
            ((total_bits / 8.0).ceil() as usize).saturating_add(entries.saturating_mul(4));
        let overhead_bytes = entries.saturating_mul(std::mem::size_of::<BigUint>());

        Self {
            digit_bytes,
            overhead_bytes,
            total_bytes: digit_bytes.saturating_add(overhead_bytes),
        }
    }

    /// Check if the eager cache fits within the given memory limit.
    ///
    /// `None` means unlimited (always fits).
    #[must_use]
    pub fn fits_in(&self, limit: Option<usize>) -> bool {
        match limit {
            None => true,
            Some(l) => self.total_bytes <= l,
        }
    }
}

/// Bytes of digit storage held by a single value.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn value_bytes(value: &BigUint) -> usize {
    (value.bits().div_ceil(64) * 8) as usize
}

/// Parse a memory limit string (e.g., "2G", "512M", "1024K").
///
/// An empty string means unlimited and yields `None`.
///
/// # Errors
///
/// Returns an error string if the format is invalid or the number cannot be parsed.
pub fn parse_memory_limit(s: &str) -> Result<Option<usize>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('B') {
        (n, 1)
    } else {
        (s, 1)
    };

    let value: usize = num_str
        .trim()
        .parse()
        .map_err(|e| format!("invalid memory limit {s:?}: {e}"))?;
    value
        .checked_mul(multiplier)
        .map(Some)
        .ok_or_else(|| format!("memory limit {s:?} overflows usize"))
}

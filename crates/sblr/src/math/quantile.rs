//! Quantile estimation.
//!
//! This module provides the order-statistic quantile used both to seed the
//! per-sector heights and to aggregate implied heights during relaxation.
//! Linear interpolation between adjacent order statistics matches the
//! standard definition used by scientific computing libraries.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Quantile
// ============================================================================

/// The `q`-quantile of `values`, with linear interpolation between order
/// statistics.
///
/// The slice is sorted in place; callers pass a scratch buffer. `q` is
/// expected in [0, 1]: `q = 0` yields the minimum, `q = 1` the maximum and
/// `q = 0.5` the median. An empty slice yields zero.
pub fn quantile<T: Float>(values: &mut [T], q: T) -> T {
    let n = values.len();
    if n == 0 {
        return T::zero();
    }

    values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
    if n == 1 {
        return values[0];
    }

    // Fractional rank q*(n-1), split into base index and remainder.
    let rank = q * T::from(n - 1).unwrap();
    let base = rank.floor();
    let index = base.to_usize().unwrap_or(0);
    if index + 1 >= n {
        return values[n - 1];
    }

    values[index] + (rank - base) * (values[index + 1] - values[index])
}

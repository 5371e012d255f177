//! Sorting and order statistics.
//!
//! ## Purpose
//!
//! This module provides the ordering primitives behind median and mode:
//! a total-order-tolerant ascending sort and the middle of a sorted buffer.
//!
//! ## Design notes
//!
//! * **Algorithm**: Full stable sort (O(n log n)); ties keep their input order.
//! * **Formula**: Even length averages the two central values.
//!
//! ## Invariants
//!
//! * Callers pass finite values; incomparable pairs are treated as equal.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

/// Sort `vals` ascending in place.
#[inline]
pub fn sort_ascending<T: Float>(vals: &mut [T]) {
    vals.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
}

/// Middle value of an already sorted, non-empty slice.
///
/// Returns zero for an empty slice.
#[inline]
pub fn median_of_sorted<T: Float>(sorted: &[T]) -> T {
    let n = sorted.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    if n % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / T::from(2.0).unwrap()
    } else {
        sorted[mid]
    }
}

/// Collapse a sorted slice into `(value, run_length)` pairs.
pub fn runs<T: Float>(sorted: &[T]) -> impl Iterator<Item = (T, usize)> + '_ {
    let mut i = 0;
    core::iter::from_fn(move || {
        let &v = sorted.get(i)?;
        let start = i;
        i += 1;
        while i < sorted.len() && sorted[i] == v {
            i += 1;
        }
        Some((v, i - start))
    })
}

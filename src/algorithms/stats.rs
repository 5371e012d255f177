//! Descriptive statistics over labelled data points.
//!
//! ## Purpose
//!
//! This module computes the summary values a statistics lesson displays for
//! a small data set: central tendency (mean, median, mode), spread
//! (variance, standard deviation), and a fixed-width frequency histogram.
//!
//! ## Design notes
//!
//! * **Stateless**: Every function reads its input slice and returns a fresh value.
//! * **Sorting**: Median and mode sort a copy of the values; the input is untouched.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Multi-modal**: `mode` returns every value tied for the highest frequency.
//! * **Bucketing**: Histogram buckets start at `0, w, 2w, …` up to and
//!   including `range_max`; a value lands in bucket `floor(value / w)`.
//!
//! ## Invariants
//!
//! * For non-empty input, `min <= mean <= max`.
//! * `median` is invariant under permutation of the input.
//! * `mode` is empty only for empty input.
//!
//! ## Non-goals
//!
//! * This module does not compute sample (n - 1) statistics.
//! * This module does not clamp values into the histogram range.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::order::{median_of_sorted, runs, sort_ascending};
use crate::primitives::errors::KernelError;
use crate::primitives::point::DataPoint;

/// Default histogram bucket width.
pub const DEFAULT_BUCKET_WIDTH: f64 = 10.0;

/// Default start of the last histogram bucket.
pub const DEFAULT_RANGE_MAX: f64 = 100.0;

// ============================================================================
// Central Tendency
// ============================================================================

/// Arithmetic mean of the point values.
pub fn mean<T: Float>(points: &[DataPoint<T>]) -> Result<T, KernelError> {
    Validator::validate_points(points)?;
    Ok(bounded_mean(points))
}

/// Median of the point values.
///
/// Even-sized inputs average the two central values.
pub fn median<T: Float>(points: &[DataPoint<T>]) -> Result<T, KernelError> {
    Validator::validate_points(points)?;

    let sorted = sorted_values(points);
    Ok(median_of_sorted(&sorted))
}

/// Every value whose frequency equals the maximum frequency, ascending.
///
/// Returns an empty vector only for empty input.
pub fn mode<T: Float>(points: &[DataPoint<T>]) -> Result<Vec<T>, KernelError> {
    if points.is_empty() {
        return Ok(Vec::new());
    }
    Validator::validate_points(points)?;

    let sorted = sorted_values(points);
    let max_freq = runs(&sorted).map(|(_, n)| n).max().unwrap_or(0);

    Ok(runs(&sorted)
        .filter(|&(_, n)| n == max_freq)
        .map(|(v, _)| v)
        .collect())
}

// ============================================================================
// Spread
// ============================================================================

/// Population variance of the point values.
///
/// Fails with [`KernelError::InvalidNumericValue`] when the variance of
/// finite inputs is too large to represent.
pub fn variance<T: Float>(points: &[DataPoint<T>]) -> Result<T, KernelError> {
    Validator::validate_points(points)?;

    let (scale, ratio) = scaled_spread(points);
    let four = T::from(4.0).unwrap();
    let var = (scale * scale) * (four * ratio);
    Validator::validate_result(var, "variance")?;
    Ok(var)
}

/// Population standard deviation of the point values.
///
/// Computed from rescaled deviations, so it stays finite whenever the
/// result itself is representable.
pub fn standard_deviation<T: Float>(points: &[DataPoint<T>]) -> Result<T, KernelError> {
    Validator::validate_points(points)?;

    let (scale, ratio) = scaled_spread(points);
    let two = T::from(2.0).unwrap();
    let sd = scale * (two * ratio.sqrt());
    Validator::validate_result(sd, "standard deviation")?;
    Ok(sd)
}

// ============================================================================
// Histogram
// ============================================================================

/// Bucketing parameters for [`histogram`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistogramConfig<T> {
    /// Width of every bucket.
    pub bucket_width: T,
    /// Lower edge of the last bucket.
    pub range_max: T,
}

impl<T: Float> Default for HistogramConfig<T> {
    fn default() -> Self {
        Self {
            bucket_width: T::from(DEFAULT_BUCKET_WIDTH).unwrap(),
            range_max: T::from(DEFAULT_RANGE_MAX).unwrap(),
        }
    }
}

impl<T: Float> HistogramConfig<T> {
    /// Default configuration: width 10 over `[0, 100]`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bucket width.
    pub fn bucket_width(mut self, width: T) -> Self {
        self.bucket_width = width;
        self
    }

    /// Set the lower edge of the last bucket.
    pub fn range_max(mut self, range_max: T) -> Self {
        self.range_max = range_max;
        self
    }

    /// Number of buckets: `floor(range_max / bucket_width) + 1`.
    fn bucket_count(&self) -> Option<usize> {
        (self.range_max / self.bucket_width)
            .floor()
            .to_usize()
            .and_then(|n| n.checked_add(1))
    }
}

/// One non-empty histogram bucket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistogramBucket<T> {
    /// Display label, e.g. `"40-49"`.
    pub label: String,
    /// Inclusive lower edge.
    pub lower: T,
    /// Exclusive upper edge.
    pub upper: T,
    /// Number of points in `[lower, upper)`.
    pub count: usize,
}

/// Count points into fixed-width buckets.
///
/// Buckets start at `0, w, 2w, …` up to and including `range_max`, so with
/// the defaults the last bucket is `100-109`. Bucket membership is
/// `floor(value / w)`. Values below zero or past the last bucket are
/// dropped without error. Zero-count buckets are omitted; the result is in
/// ascending bucket order.
pub fn histogram<T: Float>(
    points: &[DataPoint<T>],
    config: &HistogramConfig<T>,
) -> Result<Vec<HistogramBucket<T>>, KernelError> {
    Validator::validate_histogram(config.bucket_width, config.range_max)?;
    if points.is_empty() {
        return Ok(Vec::new());
    }
    Validator::validate_points(points)?;

    let width = config.bucket_width;
    let n_buckets = config.bucket_count().unwrap_or(usize::MAX);

    let mut indices: Vec<usize> = points
        .iter()
        .filter(|p| p.value >= T::zero())
        .filter_map(|p| (p.value / width).floor().to_usize())
        .filter(|&idx| idx < n_buckets)
        .collect();
    if indices.len() < points.len() {
        log::trace!(
            "histogram dropped {} out-of-range values",
            points.len() - indices.len()
        );
    }
    indices.sort_unstable();

    let mut buckets: Vec<HistogramBucket<T>> = Vec::new();
    for idx in indices {
        match buckets.last_mut() {
            Some(b) if b.lower == bucket_lower(idx, width) => b.count += 1,
            _ => {
                let lower = bucket_lower(idx, width);
                buckets.push(HistogramBucket {
                    label: bucket_label(lower, width),
                    lower,
                    upper: lower + width,
                    count: 1,
                });
            }
        }
    }

    Ok(buckets)
}

// ============================================================================
// Helpers
// ============================================================================

/// Mean of validated, non-empty points, clamped to `[min, max]`.
///
/// Falls back to a running mean over pre-divided terms when the plain sum
/// overflows; each step then stays between the previous mean and the value.
fn bounded_mean<T: Float>(points: &[DataPoint<T>]) -> T {
    let sum = points.iter().fold(T::zero(), |acc, p| acc + p.value);
    let raw = if sum.is_finite() {
        sum / T::from(points.len()).unwrap()
    } else {
        points.iter().enumerate().fold(T::zero(), |m, (i, p)| {
            let k = T::from(i + 1).unwrap();
            m + (p.value / k - m / k)
        })
    };

    let (lo, hi) = points
        .iter()
        .fold((T::infinity(), T::neg_infinity()), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        });
    raw.max(lo).min(hi)
}

/// Half-deviations `x/2 - m/2` reduced to `(scale, mean((h / scale)²))`,
/// with `scale = max |h|`. Population variance is `4 · scale² · ratio`.
fn scaled_spread<T: Float>(points: &[DataPoint<T>]) -> (T, T) {
    let m = bounded_mean(points);
    let half = T::from(0.5).unwrap();
    let dev = |p: &DataPoint<T>| p.value * half - m * half;

    let scale = points.iter().fold(T::zero(), |acc, p| acc.max(dev(p).abs()));
    if scale == T::zero() {
        return (T::zero(), T::zero());
    }

    let ss = points.iter().fold(T::zero(), |acc, p| {
        let r = dev(p) / scale;
        acc + r * r
    });
    (scale, ss / T::from(points.len()).unwrap())
}

fn sorted_values<T: Float>(points: &[DataPoint<T>]) -> Vec<T> {
    let mut vals: Vec<T> = points.iter().map(|p| p.value).collect();
    sort_ascending(&mut vals);
    vals
}

#[inline]
fn bucket_lower<T: Float>(idx: usize, width: T) -> T {
    T::from(idx).unwrap() * width
}

/// Integral buckets read as inclusive integer ranges (`"40-49"`); others
/// show their half-open edges (`"0.5-1"`).
fn bucket_label<T: Float>(lower: T, width: T) -> String {
    let lo = lower.to_f64().unwrap_or(f64::NAN);
    let w = width.to_f64().unwrap_or(f64::NAN);
    if lo.fract() == 0.0 && w.fract() == 0.0 {
        format!("{}-{}", lo, lo + w - 1.0)
    } else {
        format!("{}-{}", lo, lo + w)
    }
}

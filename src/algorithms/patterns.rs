//! Random data-set generators for interactive lessons.
//!
//! ## Purpose
//!
//! This module produces the data sets behind the "shuffle", "animate", and
//! "reset" controls, and the noisy samples around a line used by the
//! least-squares lesson.
//!
//! ## Design notes
//!
//! * **Injectable randomness**: Every generator takes the caller's
//!   `rand::Rng`, so a seeded generator reproduces a data set exactly.
//! * **Fresh output**: Inputs are read, never mutated; ids are preserved.
//!
//! ## Key concepts
//!
//! * **Lesson range**: Shuffled and jittered values are clamped to `[0, 100]`.
//!
//! ## Non-goals
//!
//! * These are teaching shapes, not statistically exact distributions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::KernelError;
use crate::primitives::point::DataPoint;

/// Smallest value a shuffled or jittered point may take.
pub const VALUE_MIN: f64 = 0.0;

/// Largest value a shuffled or jittered point may take.
pub const VALUE_MAX: f64 = 100.0;

// ============================================================================
// Data Patterns
// ============================================================================

/// Shape of a shuffled data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataPattern {
    /// Centered on 50, spread ±20.
    #[default]
    NormalLike,

    /// Two clusters, `[20, 40)` and `[60, 80)`.
    Bimodal,

    /// Flat over `[0, 100)`.
    Uniform,

    /// Bunched toward zero: `u² · 100`.
    Skewed,
}

impl DataPattern {
    /// Every pattern, in declaration order.
    pub const ALL: [DataPattern; 4] = [
        DataPattern::NormalLike,
        DataPattern::Bimodal,
        DataPattern::Uniform,
        DataPattern::Skewed,
    ];

    /// Pick a pattern uniformly at random.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Draw one raw (unclamped, unrounded) value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.random();
        match self {
            Self::NormalLike => 50.0 + (u - 0.5) * 40.0,
            Self::Bimodal => {
                let v: f64 = rng.random();
                if u > 0.5 { 20.0 + v * 20.0 } else { 60.0 + v * 20.0 }
            }
            Self::Uniform => u * 100.0,
            Self::Skewed => u * u * 100.0,
        }
    }
}

/// Replace every value with a whole number drawn from `pattern`, clamped
/// to the lesson range.
pub fn randomize<T: Float, R: Rng + ?Sized>(
    points: &[DataPoint<T>],
    pattern: DataPattern,
    rng: &mut R,
) -> Vec<DataPoint<T>> {
    points
        .iter()
        .map(|p| {
            let v = pattern.sample(rng).floor().clamp(VALUE_MIN, VALUE_MAX);
            DataPoint::new(p.id, T::from(v).unwrap())
        })
        .collect()
}

/// Nudge every value by a uniform amount in `[-step/2, step/2)`, clamped to
/// the lesson range.
pub fn jitter<T: Float, R: Rng + ?Sized>(
    points: &[DataPoint<T>],
    step: T,
    rng: &mut R,
) -> Result<Vec<DataPoint<T>>, KernelError> {
    Validator::validate_non_negative(step, "step")?;

    let (lo, hi) = (T::from(VALUE_MIN).unwrap(), T::from(VALUE_MAX).unwrap());
    let half = T::from(0.5).unwrap();
    Ok(points
        .iter()
        .map(|p| {
            let u = T::from(rng.random::<f64>()).unwrap();
            let v = (p.value + (u - half) * step).max(lo).min(hi);
            DataPoint::new(p.id, v)
        })
        .collect())
}

/// Set every value to `value`, keeping ids.
pub fn reset<T: Copy>(points: &[DataPoint<T>], value: T) -> Vec<DataPoint<T>> {
    points.iter().map(|p| DataPoint::new(p.id, value)).collect()
}

// ============================================================================
// Noisy Line Samples
// ============================================================================

/// One sample around a known line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinePoint<T> {
    /// Abscissa.
    pub x: T,
    /// Observed (noisy) value.
    pub y: T,
    /// Noiseless value `slope · x + intercept`.
    pub true_y: T,
}

/// Sample `count` points at `x = 0, 1, …` around `slope · x + intercept`.
///
/// Each observation adds `(u - 0.5) · noise · 4` for uniform `u ∈ [0, 1)`,
/// so the error is bounded by `±2 · noise`.
pub fn noisy_line<T: Float, R: Rng + ?Sized>(
    slope: T,
    intercept: T,
    noise: T,
    count: usize,
    rng: &mut R,
) -> Result<Vec<LinePoint<T>>, KernelError> {
    Validator::validate_scalar(slope, "slope")?;
    Validator::validate_scalar(intercept, "intercept")?;
    Validator::validate_non_negative(noise, "noise")?;

    let (half, four) = (T::from(0.5).unwrap(), T::from(4.0).unwrap());
    Ok((0..count)
        .map(|i| {
            let x = T::from(i).unwrap();
            let true_y = slope * x + intercept;
            let u = T::from(rng.random::<f64>()).unwrap();
            LinePoint {
                x,
                y: true_y + (u - half) * noise * four,
                true_y,
            }
        })
        .collect())
}

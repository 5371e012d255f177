//! Fit-quality metrics for regression lessons.
//!
//! ## Purpose
//!
//! This module measures how far predictions sit from observations: signed
//! residuals, their squared and absolute reductions, and the toy likelihood
//! figures shown next to the least-squares fit.
//!
//! ## Design notes
//!
//! * **Plain reductions**: Sums accumulate left to right.
//! * **Toy likelihood**: `log_likelihood_proxy(sse) = -sse / 100` and
//!   `likelihood_proxy(sse) = exp(-sse / 200)`; fixed scale constants, not a
//!   fitted noise model.
//!
//! ## Invariants
//!
//! * `residuals[i] = observed[i] - predicted[i]`.
//! * SSE, MAE, MSE, and RMSE are non-negative.
//!
//! ## Non-goals
//!
//! * This module does not fit regression parameters.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::KernelError;

/// Scale of the log-likelihood proxy: `-sse / LOG_LIKELIHOOD_SCALE`.
pub const LOG_LIKELIHOOD_SCALE: f64 = 100.0;

/// Scale of the likelihood proxy: `exp(-sse / LIKELIHOOD_SCALE)`.
pub const LIKELIHOOD_SCALE: f64 = 200.0;

// ============================================================================
// Residuals
// ============================================================================

/// Element-wise `observed - predicted`.
///
/// Non-finite inputs are rejected with [`KernelError::InvalidNumericValue`].
pub fn residuals<T: Float>(observed: &[T], predicted: &[T]) -> Result<Vec<T>, KernelError> {
    Validator::validate_lengths(observed.len(), predicted.len())?;
    Validator::validate_finite_values(observed, "observed")?;
    Validator::validate_finite_values(predicted, "predicted")?;

    Ok(observed
        .iter()
        .zip(predicted)
        .map(|(&o, &p)| o - p)
        .collect())
}

/// Predictions of the line `slope · x + intercept` at each `x`.
pub fn linear_predictions<T: Float>(xs: &[T], slope: T, intercept: T) -> Vec<T> {
    xs.iter().map(|&x| slope * x + intercept).collect()
}

// ============================================================================
// Reductions
// ============================================================================

/// Sum of squared residuals. Zero for empty input.
pub fn sum_squared_error<T: Float>(residuals: &[T]) -> T {
    residuals.iter().fold(T::zero(), |acc, &r| acc + r * r)
}

/// Mean of absolute residuals.
pub fn mean_absolute_error<T: Float>(residuals: &[T]) -> Result<T, KernelError> {
    Validator::validate_non_empty(residuals)?;

    let sum = residuals.iter().fold(T::zero(), |acc, &r| acc + r.abs());
    Ok(sum / T::from(residuals.len()).unwrap())
}

/// Mean of squared residuals.
pub fn mean_squared_error<T: Float>(residuals: &[T]) -> Result<T, KernelError> {
    Validator::validate_non_empty(residuals)?;
    Ok(sum_squared_error(residuals) / T::from(residuals.len()).unwrap())
}

/// Square root of [`mean_squared_error`].
pub fn root_mean_squared_error<T: Float>(residuals: &[T]) -> Result<T, KernelError> {
    mean_squared_error(residuals).map(Float::sqrt)
}

// ============================================================================
// Likelihood Proxies
// ============================================================================

/// Toy log-likelihood: `-sse / 100`.
#[inline]
pub fn log_likelihood_proxy<T: Float>(sse: T) -> T {
    -sse / T::from(LOG_LIKELIHOOD_SCALE).unwrap()
}

/// Toy likelihood: `exp(-sse / 200)`, in `(0, 1]` for non-negative `sse`.
#[inline]
pub fn likelihood_proxy<T: Float>(sse: T) -> T {
    (-sse / T::from(LIKELIHOOD_SCALE).unwrap()).exp()
}

//! Input validation for kernel parameters and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions every kernel runs before
//! computing. It checks requirements such as non-empty inputs, finite
//! values, matching lengths, compatible matrix shapes, and scalar domains.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//! * **Quiet**: Rejections are reported at `debug` level through `log`.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free (apart from logging).
//!
//! ## Non-goals
//!
//! * This module does not clamp, sort, or otherwise repair inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use log::debug;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KernelError;
use crate::primitives::matrix::{MatrixOp, Shape};
use crate::primitives::point::DataPoint;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for kernel inputs.
///
/// All methods return `Result<(), KernelError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Collection Validation
    // ========================================================================

    /// Validate a data-point collection: non-empty, all values finite.
    pub fn validate_points<T: Float>(points: &[DataPoint<T>]) -> Result<(), KernelError> {
        if points.is_empty() {
            debug!("rejecting empty data-point collection");
            return Err(KernelError::EmptyInput);
        }

        for p in points {
            if !p.value.is_finite() {
                debug!("rejecting non-finite value for point id {}", p.id);
                return Err(KernelError::InvalidNumericValue(format!(
                    "point id {} has value {}",
                    p.id,
                    p.value.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that every value in a sequence is finite.
    ///
    /// Empty sequences pass; callers that need data check emptiness first.
    pub fn validate_finite_values<T: Float>(values: &[T], name: &str) -> Result<(), KernelError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                debug!("rejecting non-finite {}[{}]", name, i);
                return Err(KernelError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that a sequence is non-empty.
    pub fn validate_non_empty<T>(values: &[T]) -> Result<(), KernelError> {
        if values.is_empty() {
            debug!("rejecting empty sequence");
            return Err(KernelError::EmptyInput);
        }
        Ok(())
    }

    /// Validate that observed and predicted sequences pair up.
    pub fn validate_lengths(observed: usize, predicted: usize) -> Result<(), KernelError> {
        if observed != predicted {
            debug!(
                "rejecting length mismatch: observed {}, predicted {}",
                observed, predicted
            );
            return Err(KernelError::LengthMismatch {
                observed,
                predicted,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Matrix Validation
    // ========================================================================

    /// Whether `left` and `right` shapes admit `op`.
    #[inline]
    pub fn shapes_compatible(left: Shape, right: Shape, op: MatrixOp) -> bool {
        match op {
            MatrixOp::Add | MatrixOp::Subtract => left == right,
            MatrixOp::Multiply => left.cols == right.rows,
        }
    }

    /// Validate that `left` and `right` shapes admit `op`.
    pub fn validate_shapes(left: Shape, right: Shape, op: MatrixOp) -> Result<(), KernelError> {
        if !Self::shapes_compatible(left, right, op) {
            debug!("rejecting {}: shapes {} and {}", op, left, right);
            return Err(KernelError::DimensionMismatch { op, left, right });
        }
        Ok(())
    }

    // ========================================================================
    // Scalar Validation
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &'static str) -> Result<(), KernelError> {
        if !val.is_finite() {
            debug!("rejecting non-finite {}", name);
            return Err(KernelError::InvalidParameter {
                name,
                value: val.to_f64().unwrap_or(f64::NAN),
                constraint: "finite",
            });
        }
        Ok(())
    }

    /// Validate a strictly positive, finite value.
    pub fn validate_positive<T: Float>(val: T, name: &'static str) -> Result<(), KernelError> {
        if !val.is_finite() || val <= T::zero() {
            debug!("rejecting {}: not positive and finite", name);
            return Err(KernelError::InvalidParameter {
                name,
                value: val.to_f64().unwrap_or(f64::NAN),
                constraint: "> 0 and finite",
            });
        }
        Ok(())
    }

    /// Validate a non-negative, finite value.
    pub fn validate_non_negative<T: Float>(val: T, name: &'static str) -> Result<(), KernelError> {
        if !val.is_finite() || val < T::zero() {
            debug!("rejecting {}: negative or non-finite", name);
            return Err(KernelError::InvalidParameter {
                name,
                value: val.to_f64().unwrap_or(f64::NAN),
                constraint: ">= 0 and finite",
            });
        }
        Ok(())
    }

    /// Validate that a computed value is finite.
    pub fn validate_result<T: Float>(val: T, name: &str) -> Result<(), KernelError> {
        if !val.is_finite() {
            debug!("rejecting {}: result is not finite", name);
            return Err(KernelError::InvalidNumericValue(format!(
                "{} is not representable ({})",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate an acute angle in degrees, strictly inside (0, 90).
    pub fn validate_acute_angle<T: Float>(degrees: T) -> Result<(), KernelError> {
        let ninety = T::from(90.0).unwrap();
        if !degrees.is_finite() || degrees <= T::zero() || degrees >= ninety {
            debug!("rejecting angle outside (0, 90) degrees");
            return Err(KernelError::InvalidParameter {
                name: "angle_degrees",
                value: degrees.to_f64().unwrap_or(f64::NAN),
                constraint: "> 0 and < 90",
            });
        }
        Ok(())
    }

    /// Validate histogram bucketing parameters.
    pub fn validate_histogram<T: Float>(bucket_width: T, range_max: T) -> Result<(), KernelError> {
        Self::validate_positive(bucket_width, "bucket_width")?;
        Self::validate_non_negative(range_max, "range_max")
    }

    /// Validate the number of supplied right-triangle quantities.
    pub fn validate_known_count(given: usize) -> Result<(), KernelError> {
        match given {
            2 => Ok(()),
            3 => {
                debug!("rejecting right triangle: all three quantities given");
                Err(KernelError::Overdetermined)
            }
            _ => {
                debug!("rejecting right triangle: only {} quantities given", given);
                Err(KernelError::Underdetermined { given })
            }
        }
    }
}

//! Error types for numeric kernel operations.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! kernel. Each variant carries enough context for a presentation layer to
//! render a "calculation not possible" state without re-deriving it.
//!
//! ## Design notes
//!
//! * **Local**: Every condition is recoverable by the immediate caller.
//! * **Deterministic**: Retrying with the same input yields the same error.
//! * **Portable**: `Display` is hand-written so the type works under `no_std`.
//!
//! ## Non-goals
//!
//! * This module does not localize messages.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

// Internal dependencies
use crate::primitives::matrix::{MatrixOp, Shape};

/// Error returned by numeric kernels.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// The input collection (or matrix) contains no elements.
    EmptyInput,

    /// Matrix shapes are incompatible for the requested operation.
    DimensionMismatch {
        /// Operation that was attempted.
        op: MatrixOp,
        /// Shape of the left operand.
        left: Shape,
        /// Shape of the right operand.
        right: Shape,
    },

    /// A matrix row does not have the same length as the first row.
    RaggedMatrix {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        got: usize,
    },

    /// Observed and predicted sequences differ in length.
    LengthMismatch {
        /// Number of observed values.
        observed: usize,
        /// Number of predicted values.
        predicted: usize,
    },

    /// Fewer than two of the three triangle quantities were supplied.
    Underdetermined {
        /// Number of quantities supplied.
        given: usize,
    },

    /// All three triangle quantities were supplied, leaving nothing to derive.
    Overdetermined,

    /// A scalar parameter lies outside its domain.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Human-readable domain constraint.
        constraint: &'static str,
    },

    /// A data value is NaN or infinite.
    InvalidNumericValue(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::DimensionMismatch { op, left, right } => match op {
                MatrixOp::Add | MatrixOp::Subtract => write!(
                    f,
                    "Dimension mismatch: {} requires matrices of the same size, got {} and {}",
                    op, left, right
                ),
                MatrixOp::Multiply => write!(
                    f,
                    "Dimension mismatch: {} requires columns of A ({}) to equal rows of B ({}), got {} and {}",
                    op, left.cols, right.rows, left, right
                ),
            },
            Self::RaggedMatrix { row, expected, got } => write!(
                f,
                "Ragged matrix: row {} has {} columns, expected {}",
                row, got, expected
            ),
            Self::LengthMismatch {
                observed,
                predicted,
            } => write!(
                f,
                "Length mismatch: observed has {} values, predicted has {}",
                observed, predicted
            ),
            Self::Underdetermined { given } => write!(
                f,
                "Underdetermined input: got {} known quantities, need exactly 2",
                given
            ),
            Self::Overdetermined => write!(
                f,
                "Overdetermined input: got 3 known quantities, need exactly 2"
            ),
            Self::InvalidParameter {
                name,
                value,
                constraint,
            } => write!(f, "Invalid {}: {} (must be {})", name, value, constraint),
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}

//! Matrix arithmetic with shape checks.
//!
//! ## Purpose
//!
//! This module implements the three operations of the matrix calculator
//! (add, subtract, multiply), a predicate that tells the caller whether an
//! operation is possible, and a per-cell explanation of the arithmetic.
//!
//! ## Design notes
//!
//! * **Naive accumulation**: Products sum `a[i][k] * b[k][j]` in `k` order
//!   with plain floating-point addition.
//! * **Errors as values**: Incompatible shapes return
//!   [`KernelError::DimensionMismatch`] carrying both shapes.
//!
//! ## Invariants
//!
//! * `add`/`subtract` results have the operands' shape.
//! * `multiply` results are `rows(a) × cols(b)`.
//!
//! ## Non-goals
//!
//! * This module does not provide decompositions, inverses, or compensated summation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

// External dependencies
use core::fmt::Display;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::KernelError;
use crate::primitives::matrix::{Matrix, MatrixOp};

// ============================================================================
// Operations
// ============================================================================

/// Element-wise sum. Shapes must match exactly.
pub fn add<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, KernelError> {
    elementwise(a, b, MatrixOp::Add, |x, y| x + y)
}

/// Element-wise difference `a - b`. Shapes must match exactly.
pub fn subtract<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, KernelError> {
    elementwise(a, b, MatrixOp::Subtract, |x, y| x - y)
}

/// Matrix product `a · b`. Requires `cols(a) == rows(b)`.
pub fn multiply<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, KernelError> {
    Validator::validate_shapes(a.shape(), b.shape(), MatrixOp::Multiply)?;

    let (n, m, p) = (a.rows(), a.cols(), b.cols());
    let (lhs, rhs) = (a.as_slice(), b.as_slice());

    let mut data = Vec::with_capacity(n * p);
    for i in 0..n {
        let row = &lhs[i * m..(i + 1) * m];
        for j in 0..p {
            let mut sum = T::zero();
            for (k, &x) in row.iter().enumerate() {
                sum = sum + x * rhs[k * p + j];
            }
            data.push(sum);
        }
    }

    Ok(Matrix::from_row_major(n, p, data))
}

/// Apply `op` to `a` and `b`.
pub fn compute<T: Float>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    op: MatrixOp,
) -> Result<Matrix<T>, KernelError> {
    match op {
        MatrixOp::Add => add(a, b),
        MatrixOp::Subtract => subtract(a, b),
        MatrixOp::Multiply => multiply(a, b),
    }
}

/// Whether `op` is defined for the shapes of `a` and `b`.
#[inline]
pub fn can_compute<T>(a: &Matrix<T>, b: &Matrix<T>, op: MatrixOp) -> bool
where
    T: Copy,
{
    Validator::shapes_compatible(a.shape(), b.shape(), op)
}

// ============================================================================
// Step Explanation
// ============================================================================

/// One line per output cell showing the arithmetic performed.
///
/// Indices are 1-based, cells are listed row by row:
///
/// ```text
/// add:       [1,1]: 1 + 5 = 6
/// subtract:  [1,1]: 1 - 5 = -4
/// multiply:  [1,1]: 1×5 + 2×7 = 19
/// ```
///
/// Negative zero is written as `0`.
///
/// Fails with [`KernelError::DimensionMismatch`] when [`can_compute`] is false.
pub fn explain_steps<T: Float + Display>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    op: MatrixOp,
) -> Result<Vec<String>, KernelError> {
    let result = compute(a, b, op)?;

    let mut steps = Vec::with_capacity(result.rows() * result.cols());
    for i in 0..result.rows() {
        for j in 0..result.cols() {
            let value = unsigned_zero(result[(i, j)]);
            let expr = match op {
                MatrixOp::Add | MatrixOp::Subtract => format!(
                    "{} {} {}",
                    unsigned_zero(a[(i, j)]),
                    op.symbol(),
                    unsigned_zero(b[(i, j)])
                ),
                MatrixOp::Multiply => (0..a.cols())
                    .map(|k| {
                        format!("{}×{}", unsigned_zero(a[(i, k)]), unsigned_zero(b[(k, j)]))
                    })
                    .collect::<Vec<_>>()
                    .join(" + "),
            };
            steps.push(format!("[{},{}]: {} = {}", i + 1, j + 1, expr, value));
        }
    }

    Ok(steps)
}

// ============================================================================
// Helpers
// ============================================================================

fn elementwise<T: Float>(
    a: &Matrix<T>,
    b: &Matrix<T>,
    op: MatrixOp,
    f: impl Fn(T, T) -> T,
) -> Result<Matrix<T>, KernelError> {
    Validator::validate_shapes(a.shape(), b.shape(), op)?;

    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| f(x, y))
        .collect();

    Ok(Matrix::from_row_major(a.rows(), a.cols(), data))
}

/// `-0.0` prints as `-0`; show it as `0`.
#[inline]
fn unsigned_zero<T: Float>(v: T) -> T {
    if v == T::zero() { T::zero() } else { v }
}

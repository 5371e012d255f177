//! Rectangular matrix storage.
//!
//! ## Purpose
//!
//! This module provides the dense, row-major `Matrix` value used by the
//! matrix-algebra kernels, together with the `Shape` and `MatrixOp`
//! descriptors that appear in dimension diagnostics.
//!
//! ## Design notes
//!
//! * **Validated construction**: Rectangularity is checked once, when the
//!   matrix is built, so every `Matrix` value is rectangular and non-empty.
//! * **Flat storage**: Elements live in one contiguous row-major buffer.
//!
//! ## Invariants
//!
//! * `rows >= 1`, `cols >= 1`, and `data.len() == rows * cols`.
//!
//! ## Non-goals
//!
//! * This module does not check element finiteness; NaN propagates through
//!   arithmetic exactly as in IEEE 754.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt;
use core::ops::Index;
use num_traits::Zero;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::KernelError;

// ============================================================================
// Shape and Operation Descriptors
// ============================================================================

/// Matrix dimensions, `rows × cols`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Shape {
    /// Create a shape descriptor.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Binary matrix operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixOp {
    /// Element-wise sum.
    #[default]
    Add,

    /// Element-wise difference.
    Subtract,

    /// Matrix product.
    Multiply,
}

impl MatrixOp {
    /// Operator symbol used in step explanations.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
        }
    }
}

impl fmt::Display for MatrixOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Matrix
// ============================================================================

/// Dense, rectangular, row-major matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Vec<T>>", into = "Vec<Vec<T>>"),
    serde(bound(serialize = "T: Copy + Serialize", deserialize = "T: Copy + Deserialize<'de>"))
)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Matrix<T> {
    /// Build a matrix from a sequence of rows.
    ///
    /// Fails with [`KernelError::EmptyInput`] when there are no rows or the
    /// first row is empty, and with [`KernelError::RaggedMatrix`] when any
    /// row length differs from the first.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, KernelError> {
        let first = rows.first().ok_or(KernelError::EmptyInput)?.as_ref();
        let cols = first.len();
        if cols == 0 {
            return Err(KernelError::EmptyInput);
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                log::debug!(
                    "rejecting ragged matrix: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    cols
                );
                return Err(KernelError::RaggedMatrix {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Build a matrix from a row-major buffer whose length is already known
    /// to be `rows * cols`.
    pub(crate) fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimensions of the matrix.
    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Overwrite the element at `(row, col)`.
    ///
    /// Returns `false` (leaving the matrix untouched) when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
            true
        } else {
            false
        }
    }

    /// Borrow row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Option<&[T]> {
        if i < self.rows {
            Some(&self.data[i * self.cols..(i + 1) * self.cols])
        } else {
            None
        }
    }

    /// Iterate over rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }

    /// Row-major element buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }
}

impl<T: Copy + Zero> Matrix<T> {
    /// A `rows × cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, KernelError> {
        if rows == 0 || cols == 0 {
            return Err(KernelError::EmptyInput);
        }
        Ok(Self::from_row_major(rows, cols, vec![T::zero(); rows * cols]))
    }

    /// A copy resized to `rows × cols`.
    ///
    /// The overlapping top-left block is kept; new cells are zero.
    pub fn resized(&self, rows: usize, cols: usize) -> Result<Self, KernelError> {
        let mut out = Self::zeros(rows, cols)?;
        for r in 0..rows.min(self.rows) {
            for c in 0..cols.min(self.cols) {
                out.data[r * cols + c] = self.data[r * self.cols + c];
            }
        }
        Ok(out)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Panics when `(row, col)` is out of bounds.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "matrix index ({}, {}) out of bounds for {}×{}",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: Copy> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = KernelError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl<T: Copy> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        m.to_rows()
    }
}

// ============================================================================
// Nalgebra Interop
// ============================================================================

#[cfg(feature = "nalgebra")]
mod nalgebra_interop {
    use super::*;
    use nalgebra::{DMatrix, Scalar};

    impl<T: Scalar + Copy> From<&Matrix<T>> for DMatrix<T> {
        fn from(m: &Matrix<T>) -> Self {
            DMatrix::from_row_slice(m.rows, m.cols, &m.data)
        }
    }

    impl<T: Scalar + Copy> TryFrom<&DMatrix<T>> for Matrix<T> {
        type Error = KernelError;

        fn try_from(m: &DMatrix<T>) -> Result<Self, Self::Error> {
            let (rows, cols) = m.shape();
            if rows == 0 || cols == 0 {
                return Err(KernelError::EmptyInput);
            }
            let data = (0..rows)
                .flat_map(|r| (0..cols).map(move |c| m[(r, c)]))
                .collect();
            Ok(Matrix::from_row_major(rows, cols, data))
        }
    }
}

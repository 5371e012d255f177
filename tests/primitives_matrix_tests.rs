#![cfg(feature = "dev")]
//! Tests for rectangular matrix storage.
//!
//! ## Test Organization
//!
//! 1. **Construction** - rectangularity and emptiness checks
//! 2. **Access** - get, set, rows, indexing
//! 3. **Resizing** - zero-filled growth and truncation
//! 4. **Descriptors** - Shape and MatrixOp

use numeric_kernels::internals::primitives::errors::KernelError;
use numeric_kernels::internals::primitives::matrix::{Matrix, MatrixOp, Shape};

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_from_rows_rectangular() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m.shape(), Shape::new(2, 3));
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_from_rows_ragged() {
    let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0]];
    let err = Matrix::from_rows(&rows).unwrap_err();
    assert_eq!(
        err,
        KernelError::RaggedMatrix {
            row: 2,
            expected: 3,
            got: 2
        }
    );
}

#[test]
fn test_from_rows_empty() {
    let no_rows: Vec<Vec<f64>> = Vec::new();
    assert_eq!(Matrix::from_rows(&no_rows), Err(KernelError::EmptyInput));

    let empty_row: Vec<Vec<f64>> = vec![vec![]];
    assert_eq!(Matrix::from_rows(&empty_row), Err(KernelError::EmptyInput));
}

#[test]
fn test_try_from_nested_vec() {
    let m: Matrix<f64> = vec![vec![1.0, 2.0], vec![3.0, 4.0]].try_into().unwrap();
    let back: Vec<Vec<f64>> = m.into();
    assert_eq!(back, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
}

// ============================================================================
// Access Tests
// ============================================================================

#[test]
fn test_get_and_set() {
    let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(m.get(1, 0), Some(3.0));
    assert_eq!(m.get(2, 0), None);
    assert_eq!(m.get(0, 2), None);

    assert!(m.set(0, 1, 9.0));
    assert_eq!(m[(0, 1)], 9.0);
    assert!(!m.set(5, 5, 1.0));
}

#[test]
fn test_rows_iteration() {
    let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    assert_eq!(m.row(1), Some(&[3.0, 4.0][..]));
    assert_eq!(m.row(3), None);

    let collected: Vec<&[f64]> = m.iter_rows().collect();
    assert_eq!(collected.len(), 3);
    assert_eq!(collected[2], &[5.0, 6.0]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_index_out_of_bounds_panics() {
    let m = Matrix::from_rows(&[[1.0]]).unwrap();
    let _ = m[(0, 1)];
}

// ============================================================================
// Resizing Tests
// ============================================================================

#[test]
fn test_zeros() {
    let m: Matrix<f64> = Matrix::zeros(2, 3).unwrap();
    assert_eq!(m.to_rows(), vec![vec![0.0; 3]; 2]);
    assert_eq!(Matrix::<f64>::zeros(0, 3), Err(KernelError::EmptyInput));
}

#[test]
fn test_resized_grows_with_zeros() {
    let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let grown = m.resized(3, 3).unwrap();
    assert_eq!(
        grown.to_rows(),
        vec![
            vec![1.0, 2.0, 0.0],
            vec![3.0, 4.0, 0.0],
            vec![0.0, 0.0, 0.0]
        ]
    );
}

#[test]
fn test_resized_truncates() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let shrunk = m.resized(1, 2).unwrap();
    assert_eq!(shrunk.to_rows(), vec![vec![1.0, 2.0]]);
}

// ============================================================================
// Descriptor Tests
// ============================================================================

#[test]
fn test_shape_display() {
    assert_eq!(format!("{}", Shape::new(3, 4)), "3×4");
}

#[test]
fn test_matrix_op_default_and_symbols() {
    assert_eq!(MatrixOp::default(), MatrixOp::Add);
    assert_eq!(MatrixOp::Add.symbol(), "+");
    assert_eq!(MatrixOp::Subtract.symbol(), "-");
    assert_eq!(MatrixOp::Multiply.symbol(), "×");
    assert_eq!(format!("{}", MatrixOp::Multiply), "multiplication");
}

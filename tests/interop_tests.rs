//! Serialization and nalgebra conversion tests.
//!
//! Each section runs only when its feature is enabled.

#[cfg(any(feature = "serde", feature = "nalgebra"))]
use numeric_kernels::prelude::*;

// ============================================================================
// Serde Tests
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn test_matrix_serializes_as_nested_rows() {
    let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");

    let back: Matrix<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}

#[cfg(feature = "serde")]
#[test]
fn test_ragged_matrix_rejected_on_deserialize() {
    let res: Result<Matrix<f64>, _> = serde_json::from_str("[[1.0,2.0],[3.0]]");
    let err = res.unwrap_err().to_string();
    assert!(err.contains("Ragged matrix"), "{}", err);
}

#[cfg(feature = "serde")]
#[test]
fn test_data_point_json_shape() {
    let p = DataPoint::new(3, 40.0);
    assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"id":3,"value":40.0}"#);
}

// ============================================================================
// Nalgebra Tests
// ============================================================================

#[cfg(feature = "nalgebra")]
#[test]
fn test_nalgebra_conversion_preserves_layout() {
    use nalgebra::DMatrix;

    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let dm: DMatrix<f64> = (&m).into();
    assert_eq!(dm.shape(), (2, 3));
    assert_eq!(dm[(0, 2)], 3.0);
    assert_eq!(dm[(1, 0)], 4.0);

    let back = Matrix::try_from(&dm).unwrap();
    assert_eq!(back, m);
}

#[cfg(feature = "nalgebra")]
#[test]
fn test_nalgebra_product_agrees() {
    use nalgebra::DMatrix;

    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
    let ours = multiply(&a, &b).unwrap();
    let theirs = DMatrix::from(&a) * DMatrix::from(&b);
    assert_eq!(Matrix::try_from(&theirs).unwrap(), ours);
}

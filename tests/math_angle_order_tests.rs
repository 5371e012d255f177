#![cfg(feature = "dev")]

use numeric_kernels::internals::math::angle::{is_tangent_pole, wrap_degrees};
use numeric_kernels::internals::math::order::{median_of_sorted, runs, sort_ascending};

// ============================================================================
// Angle Tests
// ============================================================================

#[test]
fn test_wrap_degrees() {
    assert_eq!(wrap_degrees(0.0), 0.0);
    assert_eq!(wrap_degrees(359.5), 359.5);
    assert_eq!(wrap_degrees(360.0), 0.0);
    assert_eq!(wrap_degrees(725.0), 5.0);
    assert_eq!(wrap_degrees(-90.0), 270.0);
    assert_eq!(wrap_degrees(-720.0), 0.0);
}

#[test]
fn test_wrap_degrees_tiny_negative_stays_in_range() {
    let w = wrap_degrees(-1e-14_f64);
    assert!((0.0..360.0).contains(&w), "{}", w);
}

#[test]
fn test_is_tangent_pole() {
    for pole in [90.0, 270.0, -90.0, -270.0, 450.0] {
        assert!(is_tangent_pole(pole), "{}", pole);
    }
    for regular in [0.0, 45.0, 89.9, 180.0, 360.0] {
        assert!(!is_tangent_pole(regular), "{}", regular);
    }
}

// ============================================================================
// Order Tests
// ============================================================================

#[test]
fn test_sort_ascending() {
    let mut v = [50.0, 35.0, 60.0, 35.0, 20.0];
    sort_ascending(&mut v);
    assert_eq!(v, [20.0, 35.0, 35.0, 50.0, 60.0]);
}

#[test]
fn test_median_of_sorted() {
    assert_eq!(median_of_sorted::<f64>(&[]), 0.0);
    assert_eq!(median_of_sorted(&[7.0]), 7.0);
    assert_eq!(median_of_sorted(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(median_of_sorted(&[1.0, 2.0, 3.0, 10.0]), 2.5);
}

#[test]
fn test_runs() {
    let sorted = [1.0, 1.0, 2.0, 3.0, 3.0, 3.0];
    let collected: Vec<(f64, usize)> = runs(&sorted).collect();
    assert_eq!(collected, vec![(1.0, 2), (2.0, 1), (3.0, 3)]);

    assert_eq!(runs::<f64>(&[]).count(), 0);
}

#[test]
fn test_runs_terminates_on_nan() {
    let sorted = [f64::NAN, f64::NAN];
    assert_eq!(runs(&sorted).count(), 2);
}

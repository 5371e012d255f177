#![cfg(feature = "dev")]

use approx::{assert_abs_diff_eq, assert_relative_eq};
use numeric_kernels::internals::algorithms::kinematics::{ArmPose, forward_kinematics};
use numeric_kernels::internals::primitives::errors::KernelError;

// ============================================================================
// Forward Kinematics Tests
// ============================================================================

#[test]
fn test_straight_arm_along_x() {
    let arm = forward_kinematics(&ArmPose::new(0.0, 0.0, 80.0, 60.0)).unwrap();
    assert_relative_eq!(arm.joint.x, 80.0);
    assert_abs_diff_eq!(arm.joint.y, 0.0);
    assert_relative_eq!(arm.end.x, 140.0);
    assert_abs_diff_eq!(arm.end.y, 0.0);
    assert_relative_eq!(arm.reach(), 140.0);
}

#[test]
fn test_default_lesson_pose() {
    // 45° shoulder, 45° elbow: second link points straight up.
    let arm = forward_kinematics(&ArmPose::new(45.0, 45.0, 80.0, 60.0)).unwrap();
    let j = 80.0 * core::f64::consts::FRAC_1_SQRT_2;
    assert_relative_eq!(arm.joint.x, j, epsilon = 1e-9);
    assert_relative_eq!(arm.joint.y, j, epsilon = 1e-9);
    assert_relative_eq!(arm.end.x, j, epsilon = 1e-9);
    assert_relative_eq!(arm.end.y, j + 60.0, epsilon = 1e-9);
}

#[test]
fn test_folded_arm_reach() {
    // Elbow folded back by 180°: end sits at |l1 - l2| from the shoulder.
    let arm = forward_kinematics(&ArmPose::new(30.0, 180.0, 80.0, 60.0)).unwrap();
    assert_relative_eq!(arm.reach(), 20.0, epsilon = 1e-9);
}

#[test]
fn test_reach_bounded_by_link_lengths() {
    for a1 in (-180..=180).step_by(30) {
        for a2 in (-180..=180).step_by(30) {
            let arm = forward_kinematics(&ArmPose::new(a1 as f64, a2 as f64, 80.0, 60.0)).unwrap();
            let r = arm.reach();
            assert!(r <= 140.0 + 1e-9 && r >= 20.0 - 1e-9, "reach {} at ({}, {})", r, a1, a2);
        }
    }
}

#[test]
fn test_invalid_lengths() {
    assert!(matches!(
        forward_kinematics(&ArmPose::new(0.0, 0.0, 0.0, 60.0)),
        Err(KernelError::InvalidParameter {
            name: "length1",
            ..
        })
    ));
    assert!(matches!(
        forward_kinematics(&ArmPose::new(0.0, 0.0, 80.0, -5.0)),
        Err(KernelError::InvalidParameter {
            name: "length2",
            ..
        })
    ));
    assert!(matches!(
        forward_kinematics(&ArmPose::new(f64::NAN, 0.0, 80.0, 60.0)),
        Err(KernelError::InvalidParameter {
            name: "angle1_degrees",
            ..
        })
    ));
}

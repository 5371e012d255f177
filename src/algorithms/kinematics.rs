//! Forward kinematics for a planar two-link arm.
//!
//! ## Purpose
//!
//! Given the joint angles and link lengths of a two-link arm anchored at the
//! origin, compute where the elbow joint and the end effector sit.
//!
//! ## Key concepts
//!
//! * `joint = length1 · (cos θ1, sin θ1)`
//! * `end = joint + length2 · (cos(θ1 + θ2), sin(θ1 + θ2))`
//! * `θ2` is measured relative to the first link.
//!
//! ## Non-goals
//!
//! * This module does not enforce joint limits or solve inverse kinematics.

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::KernelError;
use crate::primitives::point::Point2;

/// Joint angles (degrees) and link lengths of a two-link arm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArmPose<T> {
    /// Shoulder angle from the positive x axis, degrees.
    pub angle1_degrees: T,
    /// Elbow angle relative to the first link, degrees.
    pub angle2_degrees: T,
    /// Length of the first link, `> 0`.
    pub length1: T,
    /// Length of the second link, `> 0`.
    pub length2: T,
}

impl<T> ArmPose<T> {
    /// Create a pose.
    pub const fn new(angle1_degrees: T, angle2_degrees: T, length1: T, length2: T) -> Self {
        Self {
            angle1_degrees,
            angle2_degrees,
            length1,
            length2,
        }
    }
}

/// Joint and end-effector positions of a posed arm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArmLinkage<T> {
    /// Elbow position.
    pub joint: Point2<T>,
    /// End-effector position.
    pub end: Point2<T>,
}

impl<T: Float> ArmLinkage<T> {
    /// Distance from the shoulder (origin) to the end effector.
    pub fn reach(&self) -> T {
        Point2::origin().distance(&self.end)
    }
}

/// Compute joint and end-effector positions for `pose`.
pub fn forward_kinematics<T: Float>(pose: &ArmPose<T>) -> Result<ArmLinkage<T>, KernelError> {
    Validator::validate_positive(pose.length1, "length1")?;
    Validator::validate_positive(pose.length2, "length2")?;
    Validator::validate_scalar(pose.angle1_degrees, "angle1_degrees")?;
    Validator::validate_scalar(pose.angle2_degrees, "angle2_degrees")?;

    let (s1, c1) = pose.angle1_degrees.to_radians().sin_cos();
    let (s12, c12) = (pose.angle1_degrees + pose.angle2_degrees)
        .to_radians()
        .sin_cos();

    let joint = Point2::new(pose.length1 * c1, pose.length1 * s1);
    let end = Point2::new(joint.x + pose.length2 * c12, joint.y + pose.length2 * s12);

    Ok(ArmLinkage { joint, end })
}

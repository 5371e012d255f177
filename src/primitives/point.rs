//! Value objects passed into the kernels.
//!
//! ## Purpose
//!
//! This module defines the small, transient value types that callers build
//! from their own state and hand to the kernels: labelled data points and
//! planar coordinates.
//!
//! ## Invariants
//!
//! * Kernels never mutate or retain these values.

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A labelled sample in a descriptive-statistics data set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DataPoint<T> {
    /// Caller-assigned identifier, preserved by every transformation.
    pub id: u32,
    /// Sample value.
    pub value: T,
}

impl<T> DataPoint<T> {
    /// Create a data point.
    pub const fn new(id: u32, value: T) -> Self {
        Self { id, value }
    }
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate (mathematical orientation, y grows upward).
    pub y: T,
}

impl<T: Float> Point2<T> {
    /// Create a point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub fn origin() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Self) -> T {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

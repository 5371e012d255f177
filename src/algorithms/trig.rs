//! Right-triangle solving, unit-circle evaluation, and periodic motion.
//!
//! ## Purpose
//!
//! This module backs the surveying, unit-circle, circular-motion, and
//! sound-wave lessons: it derives the missing side or angle of a right
//! triangle, evaluates sin/cos/tan at an angle in degrees, and samples
//! points on circles and sine waves.
//!
//! ## Design notes
//!
//! * **Two given, one derived**: `solve_right_triangle` takes exactly two
//!   known quantities per call and carries no state between calls, so
//!   repeated solves cannot drift.
//! * **Exact poles**: Tangent is reported undefined when the angle is
//!   congruent to 90° mod 180°, checked in degrees before any radian
//!   conversion.
//! * **Landmarks**: Multiples of 90° produce exact sin/cos values.
//!
//! ## Key concepts
//!
//! * `height = distance · tan(angle)`.
//! * Angles are in degrees on input and output.
//!
//! ## Non-goals
//!
//! * This module does not convert to screen coordinates (y-down).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::angle::{is_tangent_pole, wrap_degrees};
use crate::primitives::errors::KernelError;
use crate::primitives::point::Point2;

/// Tangent magnitude at or above which a tangent segment is not drawn.
pub const TANGENT_DISPLAY_LIMIT: f64 = 10.0;

// ============================================================================
// Right Triangle
// ============================================================================

/// Which quantity of an [`AngleTriad`] was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriadComponent {
    /// Horizontal distance to the base of the object.
    Distance,

    /// Elevation angle in degrees.
    AngleDegrees,

    /// Height of the object.
    Height,
}

/// The quantities supplied to [`solve_right_triangle`]; exactly two must be set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnownQuantities<T> {
    /// Horizontal distance, `> 0`.
    pub distance: Option<T>,
    /// Elevation angle in degrees, in `(0, 90)`.
    pub angle_degrees: Option<T>,
    /// Height, `> 0`.
    pub height: Option<T>,
}

impl<T: Float> KnownQuantities<T> {
    /// Distance and angle known; height is derived.
    pub fn distance_angle(distance: T, angle_degrees: T) -> Self {
        Self {
            distance: Some(distance),
            angle_degrees: Some(angle_degrees),
            height: None,
        }
    }

    /// Height and angle known; distance is derived.
    pub fn height_angle(height: T, angle_degrees: T) -> Self {
        Self {
            distance: None,
            angle_degrees: Some(angle_degrees),
            height: Some(height),
        }
    }

    /// Distance and height known; angle is derived.
    pub fn distance_height(distance: T, height: T) -> Self {
        Self {
            distance: Some(distance),
            angle_degrees: None,
            height: Some(height),
        }
    }

    fn given(&self) -> usize {
        [
            self.distance.is_some(),
            self.angle_degrees.is_some(),
            self.height.is_some(),
        ]
        .into_iter()
        .filter(|&b| b)
        .count()
    }
}

/// A solved right triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleTriad<T> {
    /// Horizontal distance.
    pub distance: T,
    /// Elevation angle in degrees.
    pub angle_degrees: T,
    /// Height.
    pub height: T,
    /// The component computed from the other two.
    pub derived: TriadComponent,
}

/// Derive the missing quantity of a right triangle from the two given.
///
/// * distance & angle → `height = distance · tan(angle)`
/// * height & angle → `distance = height / tan(angle)`
/// * distance & height → `angle = atan(height / distance)`
///
/// Fails with [`KernelError::Underdetermined`] for fewer than two inputs,
/// [`KernelError::Overdetermined`] for three, and
/// [`KernelError::InvalidParameter`] for out-of-domain values, including a
/// derived quantity that leaves its domain (an angle of 0° or 90°, a zero or
/// infinite length).
pub fn solve_right_triangle<T: Float>(
    known: &KnownQuantities<T>,
) -> Result<AngleTriad<T>, KernelError> {
    Validator::validate_known_count(known.given())?;
    if let Some(d) = known.distance {
        Validator::validate_positive(d, "distance")?;
    }
    if let Some(h) = known.height {
        Validator::validate_positive(h, "height")?;
    }
    if let Some(a) = known.angle_degrees {
        Validator::validate_acute_angle(a)?;
    }

    let triad = match (known.distance, known.angle_degrees, known.height) {
        (Some(distance), Some(angle_degrees), None) => AngleTriad {
            distance,
            angle_degrees,
            height: distance * angle_degrees.to_radians().tan(),
            derived: TriadComponent::Height,
        },
        (None, Some(angle_degrees), Some(height)) => AngleTriad {
            distance: height / angle_degrees.to_radians().tan(),
            angle_degrees,
            height,
            derived: TriadComponent::Distance,
        },
        (Some(distance), None, Some(height)) => AngleTriad {
            distance,
            angle_degrees: (height / distance).atan().to_degrees(),
            height,
            derived: TriadComponent::AngleDegrees,
        },
        // The count check above admits exactly two inputs.
        _ => return Err(KernelError::Underdetermined { given: known.given() }),
    };

    // Extreme ratios can underflow or overflow the derived quantity.
    match triad.derived {
        TriadComponent::Height => Validator::validate_positive(triad.height, "height")?,
        TriadComponent::Distance => Validator::validate_positive(triad.distance, "distance")?,
        TriadComponent::AngleDegrees => Validator::validate_acute_angle(triad.angle_degrees)?,
    }

    Ok(triad)
}

// ============================================================================
// Unit Circle
// ============================================================================

/// Trigonometric values at one angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitCircle<T> {
    /// Angle in degrees, as supplied.
    pub angle_degrees: T,
    /// Sine (the y coordinate on the unit circle).
    pub sin: T,
    /// Cosine (the x coordinate on the unit circle).
    pub cos: T,
    /// Tangent; `None` where it is undefined (90° + 180°k).
    pub tan: Option<T>,
}

impl<T: Float> UnitCircle<T> {
    /// Tangent value suitable for drawing a tangent segment.
    ///
    /// `None` when the tangent is undefined or its magnitude is at least `limit`.
    pub fn tan_within(&self, limit: T) -> Option<T> {
        self.tan.filter(|t| t.abs() < limit)
    }

    /// [`Self::tan_within`] with [`TANGENT_DISPLAY_LIMIT`].
    pub fn drawable_tan(&self) -> Option<T> {
        self.tan_within(T::from(TANGENT_DISPLAY_LIMIT).unwrap())
    }

    /// Point on the unit circle at this angle.
    pub fn point(&self) -> Point2<T> {
        Point2::new(self.cos, self.sin)
    }
}

/// Evaluate sin, cos, and tan at `angle_degrees`.
pub fn unit_circle<T: Float>(angle_degrees: T) -> Result<UnitCircle<T>, KernelError> {
    Validator::validate_scalar(angle_degrees, "angle_degrees")?;

    let (sin, cos) = sin_cos_degrees(angle_degrees);
    let tan = if is_tangent_pole(angle_degrees) {
        None
    } else if sin == T::zero() {
        Some(T::zero())
    } else {
        Some(wrap_degrees(angle_degrees).to_radians().tan())
    };

    Ok(UnitCircle {
        angle_degrees,
        sin,
        cos,
        tan,
    })
}

// ============================================================================
// Periodic Motion
// ============================================================================

/// Advance an angle by `step` degrees, wrapping into `[0, 360)`.
#[inline]
pub fn advance_angle<T: Float>(angle_degrees: T, step: T) -> T {
    wrap_degrees(angle_degrees + step)
}

/// Point at `angle_degrees` on the circle of `radius` around `center`.
pub fn circle_position<T: Float>(
    center: Point2<T>,
    radius: T,
    angle_degrees: T,
) -> Result<Point2<T>, KernelError> {
    Validator::validate_non_negative(radius, "radius")?;
    Validator::validate_scalar(angle_degrees, "angle_degrees")?;

    let (sin, cos) = sin_cos_degrees(angle_degrees);
    Ok(Point2::new(center.x + radius * cos, center.y + radius * sin))
}

/// Sample `samples` points of `amplitude · sin(2π · frequency · i / samples)`.
///
/// The `i`-th element is the wave height at horizontal position `i`.
pub fn sine_wave<T: Float>(
    amplitude: T,
    frequency: T,
    samples: usize,
) -> Result<Vec<T>, KernelError> {
    Validator::validate_scalar(amplitude, "amplitude")?;
    Validator::validate_non_negative(frequency, "frequency")?;
    if samples == 0 {
        return Ok(Vec::new());
    }

    let two_pi = T::from(core::f64::consts::TAU).unwrap();
    let n = T::from(samples).unwrap();
    Ok((0..samples)
        .map(|i| amplitude * (T::from(i).unwrap() / n * frequency * two_pi).sin())
        .collect())
}

// ============================================================================
// Helpers
// ============================================================================

/// `(sin, cos)` of an angle in degrees, exact at multiples of 90°.
fn sin_cos_degrees<T: Float>(angle_degrees: T) -> (T, T) {
    let wrapped = wrap_degrees(angle_degrees);
    let quarter = T::from(90.0).unwrap();
    if wrapped % quarter == T::zero() {
        let (zero, one) = (T::zero(), T::one());
        return match (wrapped / quarter).to_u8() {
            Some(0) => (zero, one),
            Some(1) => (one, zero),
            Some(2) => (zero, -one),
            _ => (-one, zero),
        };
    }
    wrapped.to_radians().sin_cos()
}

//! Two-circle intersection for trilateration.
//!
//! ## Purpose
//!
//! Each reference station (satellite) knows its distance to the receiver,
//! so the receiver lies on a circle around it. This module intersects two
//! such circles and classifies every degenerate arrangement instead of
//! approximating it.
//!
//! ## Design notes
//!
//! * **Tolerance**: Tangency and coincidence are decided with a relative
//!   tolerance of `sqrt(ε) · max(1, r_a + r_b)`.
//! * **Classification first**: Points are only computed for the tangent and
//!   secant cases.
//!
//! ## Invariants
//!
//! * `points()` returns 0, 1, or 2 points.
//! * Secant points are ordered counter-clockwise from the A→B direction:
//!   the first lies to the left of A→B.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use log::trace;
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::KernelError;
use crate::primitives::point::Point2;

/// Classified intersection of two circles.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CircleIntersection<T> {
    /// Same center and radius: infinitely many common points.
    Coincident,

    /// Same center, different radii: no common points.
    Concentric,

    /// Centers too far apart: no common points.
    Separate,

    /// One circle lies strictly inside the other: no common points.
    Contained,

    /// The circles touch at one point.
    Tangent(Point2<T>),

    /// The circles cross at two points.
    Secant(Point2<T>, Point2<T>),
}

impl<T: Float> CircleIntersection<T> {
    /// The intersection points: empty, one, or two.
    ///
    /// [`CircleIntersection::Coincident`] yields no points; check
    /// [`Self::is_degenerate`] to distinguish it from an empty intersection.
    pub fn points(&self) -> Vec<Point2<T>> {
        match *self {
            Self::Tangent(p) => vec![p],
            Self::Secant(p, q) => vec![p, q],
            _ => Vec::new(),
        }
    }

    /// Whether the arrangement pins down no finite set of points.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Coincident)
    }
}

/// Intersect the circle of `radius_a` around `center_a` with the circle of
/// `radius_b` around `center_b`.
pub fn trilaterate<T: Float>(
    center_a: Point2<T>,
    radius_a: T,
    center_b: Point2<T>,
    radius_b: T,
) -> Result<CircleIntersection<T>, KernelError> {
    Validator::validate_scalar(center_a.x, "center_a.x")?;
    Validator::validate_scalar(center_a.y, "center_a.y")?;
    Validator::validate_scalar(center_b.x, "center_b.x")?;
    Validator::validate_scalar(center_b.y, "center_b.y")?;
    Validator::validate_positive(radius_a, "radius_a")?;
    Validator::validate_positive(radius_b, "radius_b")?;

    let tol = T::epsilon().sqrt() * T::one().max(radius_a + radius_b);
    let dx = center_b.x - center_a.x;
    let dy = center_b.y - center_a.y;
    let d = dx.hypot(dy);
    let sum = radius_a + radius_b;
    let diff = (radius_a - radius_b).abs();

    if d <= tol {
        let class = if diff <= tol {
            CircleIntersection::Coincident
        } else {
            CircleIntersection::Concentric
        };
        trace!("trilateration: shared center, coincident={}", class.is_degenerate());
        return Ok(class);
    }
    if d > sum + tol {
        trace!("trilateration: circles separate");
        return Ok(CircleIntersection::Separate);
    }
    if d < diff - tol {
        trace!("trilateration: one circle contains the other");
        return Ok(CircleIntersection::Contained);
    }

    // Distance from A along A→B to the chord midpoint.
    let two = T::from(2.0).unwrap();
    let a = (radius_a * radius_a - radius_b * radius_b + d * d) / (two * d);
    let (ux, uy) = (dx / d, dy / d);
    let mid = Point2::new(center_a.x + a * ux, center_a.y + a * uy);

    if (d - sum).abs() <= tol || (d - diff).abs() <= tol {
        trace!("trilateration: tangent circles");
        return Ok(CircleIntersection::Tangent(mid));
    }

    let h = (radius_a * radius_a - a * a).max(T::zero()).sqrt();
    Ok(CircleIntersection::Secant(
        Point2::new(mid.x - h * uy, mid.y + h * ux),
        Point2::new(mid.x + h * uy, mid.y - h * ux),
    ))
}

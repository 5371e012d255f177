//! Angle normalization in degrees.
//!
//! ## Purpose
//!
//! Callers work in degrees (slider values); the kernels reduce angles into a
//! canonical turn before converting to radians so that exact landmarks such
//! as 90° and 270° are recognized without radian round-off.
//!
//! ## Invariants
//!
//! * `wrap_degrees` returns a value in `[0, 360)` for finite input.

// External dependencies
use num_traits::Float;

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// Degrees in a half turn.
pub const HALF_TURN: f64 = 180.0;

/// Reduce `degrees` into `[0, 360)`.
#[inline]
pub fn wrap_degrees<T: Float>(degrees: T) -> T {
    let turn = T::from(FULL_TURN).unwrap();
    let r = degrees % turn;
    let r = if r < T::zero() { r + turn } else { r };
    // A tiny negative remainder can round up to exactly one full turn.
    if r >= turn { T::zero() } else { r }
}

/// Whether `degrees` is congruent to 90° modulo 180°, where tangent has a pole.
#[inline]
pub fn is_tangent_pole<T: Float>(degrees: T) -> bool {
    let half = T::from(HALF_TURN).unwrap();
    let r = degrees % half;
    let r = if r < T::zero() { r + half } else { r };
    r == T::from(90.0).unwrap()
}

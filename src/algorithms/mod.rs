//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the numeric kernels themselves:
//! - Descriptive statistics and histogram bucketing
//! - Matrix add, subtract, multiply, and step explanations
//! - Right-triangle solving, unit circle, and periodic motion
//! - Two-link forward kinematics
//! - Circle-intersection trilateration
//! - Random data-set generators
//!
//! Every kernel is a pure function of its inputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math / Engine
//!   ↓
//! Layer 1: Primitives
//! ```

/// Descriptive statistics.
pub mod stats;

/// Matrix arithmetic.
pub mod linalg;

/// Trigonometric derivations.
pub mod trig;

/// Two-link forward kinematics.
pub mod kinematics;

/// Circle intersection.
pub mod trilateration;

/// Random data-set generators.
pub mod patterns;

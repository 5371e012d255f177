//! Public API for the numeric kernels.
//!
//! ## Purpose
//!
//! This module is the user-facing surface of the crate. It re-exports every
//! kernel function and value type from the internal layers under one flat
//! namespace.
//!
//! ## Design notes
//!
//! * **Stateless**: Callers keep their own state and call a kernel on every change.
//! * **Validated**: Every fallible kernel returns `Result<_, KernelError>`.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! | Domain | Kernels |
//! |---|---|
//! | Statistics | [`mean`], [`median`], [`mode`], [`variance`], [`standard_deviation`], [`histogram`] |
//! | Matrices | [`add`], [`subtract`], [`multiply`], [`compute`], [`can_compute`], [`explain_steps`] |
//! | Trigonometry | [`solve_right_triangle`], [`unit_circle`], [`advance_angle`], [`circle_position`], [`sine_wave`] |
//! | Geometry | [`forward_kinematics`], [`trilaterate`] |
//! | Regression | [`residuals`], [`sum_squared_error`], [`mean_absolute_error`], [`log_likelihood_proxy`] |
//! | Data sets | [`randomize`], [`jitter`], [`reset`], [`noisy_line`] |

// Value types
pub use crate::primitives::errors::KernelError;
pub use crate::primitives::matrix::{Matrix, MatrixOp, Shape};
pub use crate::primitives::point::{DataPoint, Point2};

// Statistics
pub use crate::algorithms::stats::{
    DEFAULT_BUCKET_WIDTH, DEFAULT_RANGE_MAX, HistogramBucket, HistogramConfig, histogram, mean,
    median, mode, standard_deviation, variance,
};

// Matrices
pub use crate::algorithms::linalg::{add, can_compute, compute, explain_steps, multiply, subtract};

// Trigonometry and geometry
pub use crate::algorithms::kinematics::{ArmLinkage, ArmPose, forward_kinematics};
pub use crate::algorithms::trig::{
    AngleTriad, KnownQuantities, TANGENT_DISPLAY_LIMIT, TriadComponent, UnitCircle, advance_angle,
    circle_position, sine_wave, solve_right_triangle, unit_circle,
};
pub use crate::algorithms::trilateration::{CircleIntersection, trilaterate};

// Regression metrics
pub use crate::evaluation::metrics::{
    likelihood_proxy, linear_predictions, log_likelihood_proxy, mean_absolute_error,
    mean_squared_error, residuals, root_mean_squared_error, sum_squared_error,
};

// Data sets
pub use crate::algorithms::patterns::{
    DataPattern, LinePoint, VALUE_MAX, VALUE_MIN, jitter, noisy_line, randomize, reset,
};

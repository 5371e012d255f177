//! # Numeric Kernels: pure computations behind interactive math lessons
//!
//! A small, stateless library of numeric routines for statistics, matrix
//! arithmetic, trigonometry, and regression visualizations. A presentation
//! layer keeps slider values and data sets in its own state, calls a kernel
//! on every change, and redraws from the result.
//!
//! **What is covered:**
//! - Descriptive statistics: mean, median, multi-modal mode, spread, histograms
//! - Matrix algebra: add, subtract, multiply, shape checks, step-by-step explanations
//! - Trigonometry: right-triangle solving, unit circle, circular motion, sine waves
//! - Geometry: two-link arm forward kinematics, two-circle trilateration
//! - Regression metrics: residuals, SSE, MAE, RMSE, toy likelihood figures
//! - Data sets: seeded random patterns, jitter, noisy samples around a line
//!
//! **What is not:** rendering, input handling, animation timing, persistence.
//!
//! ## Quick Start
//!
//! ### Statistics
//!
//! ```rust
//! use numeric_kernels::prelude::*;
//!
//! let points: Vec<DataPoint<f64>> = [20.0, 35.0, 35.0, 40.0, 45.0, 50.0, 60.0, 55.0, 30.0, 40.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| DataPoint::new(i as u32 + 1, v))
//!     .collect();
//!
//! assert_eq!(mean(&points)?, 41.0);
//! assert_eq!(median(&points)?, 40.0);
//! assert_eq!(mode(&points)?, vec![35.0, 40.0]);
//!
//! let buckets = histogram(&points, &HistogramConfig::default())?;
//! assert_eq!(buckets[0].label, "20-29");
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Matrices
//!
//! ```rust
//! use numeric_kernels::prelude::*;
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
//! let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]])?;
//!
//! let product = multiply(&a, &b)?;
//! assert_eq!(product.to_rows(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
//!
//! let steps = explain_steps(&a, &b, MatrixOp::Multiply)?;
//! assert_eq!(steps[0], "[1,1]: 1×5 + 2×7 = 19");
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible kernel returns `Result<_, KernelError>`. Errors are
//! ordinary values meant to be rendered ("calculation not possible"), not
//! crashes:
//!
//! ```rust
//! use numeric_kernels::prelude::*;
//!
//! let a = Matrix::from_rows(&[[1.0, 2.0, 3.0]])?;
//! let b = Matrix::from_rows(&[[1.0, 2.0]])?;
//!
//! assert!(!can_compute(&a, &b, MatrixOp::Add));
//! match add(&a, &b) {
//!     Ok(sum) => println!("{:?}", sum),
//!     Err(e) => eprintln!("{}", e), // names both shapes: 1×3 and 1×2
//! }
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Trigonometry
//!
//! ```rust
//! use numeric_kernels::prelude::*;
//!
//! let triad = solve_right_triangle(&KnownQuantities::distance_angle(50.0_f64, 30.0))?;
//! assert!((triad.height - 28.8675).abs() < 1e-4);
//! assert_eq!(triad.derived, TriadComponent::Height);
//!
//! let right_angle = unit_circle(90.0)?;
//! assert_eq!(right_angle.tan, None);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`. Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! numeric-kernels = { version = "0.1", default-features = false }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library math and `std::error::Error` for `KernelError`.
//! - `serde`: `Serialize`/`Deserialize` for value types; matrices round-trip as nested rows.
//! - `nalgebra`: conversions between `Matrix<T>` and `nalgebra::DMatrix<T>`.
//! - `dev`: exposes internal modules for integration testing.
//!
//! ## Logging
//!
//! Validation rejections are reported at `debug` level and degenerate
//! geometry at `trace` level through the `log` facade. Install any `log`
//! backend to see them.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - value types and errors.
//
// Contains `KernelError`, `DataPoint`, `Point2`, and the rectangular
// `Matrix` with its `Shape` and `MatrixOp` descriptors.
mod primitives;

// Layer 2: Math - pure helpers.
//
// Contains angle normalization and order statistics over sorted buffers.
mod math;

// Layer 2: Engine - validation.
//
// Contains the fail-fast `Validator` used by every kernel.
mod engine;

// Layer 3: Algorithms - the kernels.
//
// Contains statistics, matrix arithmetic, trigonometry, kinematics,
// trilateration, and random data-set generators.
mod algorithms;

// Layer 4: Evaluation - fit metrics.
//
// Contains residuals, error reductions, and toy likelihood proxies.
mod evaluation;

/// Flat public API over every kernel.
pub mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to every kernel and value type:
///
/// ```
/// use numeric_kernels::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::*;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math helpers.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal validation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal kernels.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation metrics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

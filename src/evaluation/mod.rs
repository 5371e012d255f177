//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer scores predictions against observations: residuals, error
//! reductions (SSE, MAE, MSE, RMSE), and toy likelihood figures.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math / Engine
//!   ↓
//! Layer 1: Primitives
//! ```

/// Residual and error metrics.
pub mod metrics;

//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical helpers used by the kernels:
//! - Angle normalization and degree/radian handling
//! - Order statistics over sorted buffers
//!
//! These are reusable building blocks with no kernel-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Angle normalization helpers.
pub mod angle;

/// Sorting and order statistics.
pub mod order;

//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the value types every kernel consumes or returns:
//! - Error taxonomy shared by all layers
//! - Data points and planar coordinates
//! - Rectangular matrix storage with shape descriptors
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
//! Layer 2: Math / Engine (validation)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for kernel operations.
pub mod errors;

/// Data points and planar coordinates.
pub mod point;

/// Rectangular matrix storage.
pub mod matrix;

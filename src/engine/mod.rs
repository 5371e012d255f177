//! Layer 2: Engine
//!
//! # Purpose
//!
//! This layer holds the checks every kernel runs before computing. Kernels
//! call into [`validator::Validator`] and propagate its errors unchanged.
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
//! Layer 2: Math / Engine ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

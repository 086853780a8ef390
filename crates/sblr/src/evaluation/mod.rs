//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit assessment of a regression result:
//! - Residual-based diagnostic metrics
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Residual-based fit diagnostics.
pub mod diagnostics;

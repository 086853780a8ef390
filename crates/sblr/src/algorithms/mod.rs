//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core SBLR algorithms:
//! - Angular sector assignment
//! - The duality between per-sector center heights and hyperplane coefficients
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Angular sector assignment.
pub mod sectors;

/// Center-height / hyperplane-coefficient duality.
pub mod duality;

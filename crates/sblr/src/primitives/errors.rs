//! Error types for SBLR operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during sector-based
//! regression, including input validation, parameter constraints, and
//! geometric degeneracies of the point cloud.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending axis
//!   or sector index).
//! * **Deferred**: Errors are often caught and stored during builder
//!   configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty input, inconsistent widths, non-finite
//!    values, too few points.
//! 2. **Parameter validation**: Invalid quantile, tolerance, or step limit.
//! 3. **Geometric degeneracy**: Empty sectors and zero-range coordinates,
//!    both unrecoverable for the given input.
//! 4. **Internal invariants**: A singular center system, which the fixed
//!    simplex construction rules out for valid inputs.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for SBLR operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SblrError {
    /// The input point list is empty.
    EmptyInput,

    /// A point has zero coordinates; at least the dependent value is required.
    EmptyPoint {
        /// Index of the offending point.
        index: usize,
    },

    /// All points must have the same number of coordinates.
    MismatchedDimensions {
        /// Index of the offending point.
        index: usize,
        /// Number of coordinates of the offending point.
        got: usize,
        /// Number of coordinates of the first point.
        expected: usize,
    },

    /// Input data contains NaN or infinite values.
    NonFiniteValue(String),

    /// Fewer points than sectors; at least n+1 points are required.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points (one per sector).
        min: usize,
    },

    /// The quantile parameter must be in the range [0, 1].
    InvalidQuantile(f64),

    /// Convergence tolerance must be positive and finite.
    InvalidTolerance(f64),

    /// An explicit step limit must allow at least one relaxation step.
    InvalidStepLimit(usize),

    /// A coordinate axis has zero range across two or more points, so the
    /// bounding box cannot be mapped onto the unit cube.
    DegenerateAxis {
        /// Index of the zero-range axis.
        axis: usize,
    },

    /// Sector assignment left a sector without points; the point cloud does
    /// not cover all angular regions and the method cannot proceed.
    EmptySector {
        /// Index of the empty sector.
        sector: usize,
    },

    /// The center system could not be solved. The regular-simplex center
    /// matrix is non-singular by construction, so this indicates a broken
    /// internal invariant rather than bad user input.
    SingularSystem,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SblrError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input point list is empty"),
            Self::EmptyPoint { index } => {
                write!(f, "Point {index} has no coordinates")
            }
            Self::MismatchedDimensions {
                index,
                got,
                expected,
            } => {
                write!(
                    f,
                    "Dimension mismatch: point {index} has {got} coordinates, expected {expected}"
                )
            }
            Self::NonFiniteValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidQuantile(q) => {
                write!(f, "Invalid quantile: {q} (must be in [0, 1])")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be > 0 and finite)")
            }
            Self::InvalidStepLimit(steps) => {
                write!(f, "Invalid step limit: {steps} (must be at least 1)")
            }
            Self::DegenerateAxis { axis } => {
                write!(
                    f,
                    "Degenerate bounding box: coordinate {axis} has zero range"
                )
            }
            Self::EmptySector { sector } => {
                write!(f, "Wrong distribution: sector {sector} is empty")
            }
            Self::SingularSystem => {
                write!(f, "Center system is singular (internal invariant violated)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SblrError {}

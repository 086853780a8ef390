//! Input validation for SBLR configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for SBLR configuration
//! parameters and input data. It checks requirements such as consistent
//! point widths, finite values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like quantile in [0, 1].
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Sector Requirements**: Ensures at least one point per sector can
//!   exist (n+1 points for n independent coordinates).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not perform the regression itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SblrError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for SBLR configuration and input data.
///
/// Provides static methods for validating regression parameters and input
/// points. All methods return `Result<(), SblrError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate an input point list.
    pub fn validate_points<T: Float>(points: &[Vec<T>]) -> Result<(), SblrError> {
        // Check 1: Non-empty input
        if points.is_empty() {
            return Err(SblrError::EmptyInput);
        }

        // Check 2: At least the dependent coordinate is present
        let width = points[0].len();
        if width == 0 {
            return Err(SblrError::EmptyPoint { index: 0 });
        }

        // Check 3: Consistent widths
        for (index, point) in points.iter().enumerate() {
            if point.len() != width {
                return Err(SblrError::MismatchedDimensions {
                    index,
                    got: point.len(),
                    expected: width,
                });
            }
        }

        // Check 4: One point per sector minimum
        if points.len() < width {
            return Err(SblrError::TooFewPoints {
                got: points.len(),
                min: width,
            });
        }

        // Check 5: All values finite
        for (i, point) in points.iter().enumerate() {
            for (j, &value) in point.iter().enumerate() {
                if !value.is_finite() {
                    return Err(SblrError::NonFiniteValue(format!(
                        "point[{}][{}]={}",
                        i,
                        j,
                        value.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the quantile parameter.
    pub fn validate_quantile<T: Float>(quantile: T) -> Result<(), SblrError> {
        if !quantile.is_finite() || quantile < T::zero() || quantile > T::one() {
            return Err(SblrError::InvalidQuantile(
                quantile.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the convergence tolerance.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), SblrError> {
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(SblrError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate an explicit relaxation step limit.
    pub fn validate_step_limit(steps: usize) -> Result<(), SblrError> {
        if steps == 0 {
            return Err(SblrError::InvalidStepLimit(steps));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SblrError> {
        if let Some(parameter) = duplicate_param {
            return Err(SblrError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

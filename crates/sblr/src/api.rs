//! High-level API for sector-based linear regression.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for SBLR. It
//! implements a fluent builder pattern for configuring regression parameters
//! and a model type whose `fit` runs a complete regression.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   input data is validated on every `fit`.
//! * **Reentrant**: A built model is immutable and reusable; every `fit`
//!   call is independent.
//! * **Type-Safe**: Generic over `Float + RealField` for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Sblr::new()` -> chained setters -> `.build()`
//!   -> `.fit(&points)`.
//! * **Quantile Regression**: `quantile(0.5)` (the default) gives median
//!   regression; other values trade robustness for asymmetric fits.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::RealField;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::SblrExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::duality::{
    coefficients_from_heights, heights_from_coefficients, CenterBasis,
};
pub use crate::engine::executor::ExecutorOutput;
pub use crate::engine::output::SblrFit;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::affine::{
    affine_transform, regression_transform, scale_points, unit_cube_transform,
};
pub use crate::math::quantile::quantile;
pub use crate::math::simplex::regular_simplex;
pub use crate::primitives::errors::SblrError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring an SBLR model.
#[derive(Debug, Clone)]
pub struct SblrBuilder<T> {
    /// Quantile in [0, 1].
    pub quantile: Option<T>,

    /// Absolute convergence tolerance on height updates.
    pub tolerance: Option<T>,

    /// Override of the relaxation step cap.
    pub max_steps: Option<usize>,

    /// Return the final per-sector center heights.
    pub return_center_heights: Option<bool>,

    /// Return original residuals r_i.
    pub compute_residuals: Option<bool>,

    /// Enable statistical diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + RealField> Default for SblrBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + RealField> SblrBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            quantile: None,
            tolerance: None,
            max_steps: None,
            return_center_heights: None,
            compute_residuals: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the quantile parameter (default 0.5, i.e. median regression).
    pub fn quantile(mut self, quantile: T) -> Self {
        if self.quantile.is_some() {
            self.duplicate_param = Some("quantile");
        }
        self.quantile = Some(quantile);
        self
    }

    /// Set the absolute convergence tolerance (default 1e-5).
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Override the relaxation step cap (default `100 * n^2`).
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        if self.max_steps.is_some() {
            self.duplicate_param = Some("max_steps");
        }
        self.max_steps = Some(max_steps);
        self
    }

    /// Include the final per-sector center heights in the output.
    pub fn return_center_heights(mut self) -> Self {
        self.return_center_heights = Some(true);
        self
    }

    /// Include residuals in the output.
    pub fn return_residuals(mut self) -> Self {
        self.compute_residuals = Some(true);
        self
    }

    /// Include statistical diagnostics (RMSE, R^2, etc.) in the output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the model.
    pub fn build(self) -> Result<SblrModel<T>, SblrError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate quantile
        if let Some(quantile) = self.quantile {
            Validator::validate_quantile(quantile)?;
        }

        // Validate tolerance
        if let Some(tolerance) = self.tolerance {
            Validator::validate_tolerance(tolerance)?;
        }

        // Validate step limit
        if let Some(steps) = self.max_steps {
            Validator::validate_step_limit(steps)?;
        }

        Ok(SblrModel {
            quantile: self.quantile.unwrap_or_else(|| T::from(0.5).unwrap()),
            tolerance: self.tolerance.unwrap_or_else(|| T::from(1e-5).unwrap()),
            max_steps: self.max_steps,
            return_center_heights: self.return_center_heights.unwrap_or(false),
            compute_residuals: self.compute_residuals.unwrap_or(false),
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured, reusable SBLR model.
#[derive(Debug, Clone)]
pub struct SblrModel<T> {
    quantile: T,
    tolerance: T,
    max_steps: Option<usize>,
    return_center_heights: bool,
    compute_residuals: bool,
    return_diagnostics: bool,
}

impl<T: Float + RealField> SblrModel<T> {
    /// Fit a hyperplane to `points`.
    ///
    /// Each point carries n independent coordinates followed by the
    /// dependent coordinate; the result holds n slope coefficients followed
    /// by the intercept, in original coordinates.
    pub fn fit(&self, points: &[Vec<T>]) -> Result<SblrFit<T>, SblrError> {
        Validator::validate_points(points)?;
        let dim = points[0].len() - 1;

        let output = SblrExecutor::new()
            .quantile(self.quantile)
            .tolerance(self.tolerance)
            .max_steps(self.max_steps)
            .run(points)?;

        let mut fit = SblrFit {
            coefficients: output.coefficients,
            dimension: dim,
            quantile_used: self.quantile,
            steps: output.steps,
            converged: output.converged,
            center_heights: if self.return_center_heights {
                Some(output.center_heights)
            } else {
                None
            },
            residuals: None,
            diagnostics: None,
        };

        if self.compute_residuals || self.return_diagnostics {
            let residuals: Vec<T> = points
                .iter()
                .map(|point| point[dim] - fit.predict(&point[..dim]))
                .collect();

            if self.return_diagnostics {
                let observed: Vec<T> = points.iter().map(|point| point[dim]).collect();
                fit.diagnostics = Some(Diagnostics::compute(&observed, &residuals));
            }
            if self.compute_residuals {
                fit.residuals = Some(residuals);
            }
        }

        Ok(fit)
    }
}

// ============================================================================
// Convenience Entry Point
// ============================================================================

/// Fit a hyperplane to `points` at the given quantile with default settings,
/// returning the coefficients (n slopes followed by the intercept).
pub fn sblr<T: Float + RealField>(points: &[Vec<T>], quantile: T) -> Result<Vec<T>, SblrError> {
    let fit = SblrBuilder::new().quantile(quantile).build()?.fit(points)?;
    Ok(fit.coefficients)
}

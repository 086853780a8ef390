//! Output types for SBLR operations.
//!
//! ## Purpose
//!
//! This module defines the `SblrFit` struct which encapsulates all outputs
//! from a regression: the hyperplane coefficients, convergence metadata,
//! and the optional heights, residuals, and diagnostics.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: All optional outputs use `Option<Vec<T>>`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Key concepts
//!
//! * **Coefficient Layout**: n slope coefficients followed by the intercept,
//!   in original (denormalized) coordinates.
//! * **Optional Outputs**: Only populated when requested on the builder.
//!
//! ## Invariants
//!
//! * `coefficients.len() == dimension + 1`.
//! * Populated residuals have the same length as the input data.
//! * Center heights, when present, have one entry per sector.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond hyperplane evaluation.
//! * This module does not validate result consistency (responsibility of the
//!   engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Result Structure
// ============================================================================

/// A fitted hyperplane together with fit metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SblrFit<T> {
    /// Hyperplane coefficients: n slopes followed by the intercept, such
    /// that `y = slope[0]*x0 + ... + slope[n-1]*x(n-1) + intercept`.
    pub coefficients: Vec<T>,

    /// Number of independent coordinates (n).
    pub dimension: usize,

    /// Quantile the fit was computed for.
    pub quantile_used: T,

    /// Relaxation steps performed by the engine.
    pub steps: usize,

    /// Whether the relaxation reached a full quiet cycle before the step cap.
    pub converged: bool,

    /// Final per-sector center heights in normalized space, if requested.
    pub center_heights: Option<Vec<T>>,

    /// Residuals from the fit (y_i - y_hat_i), if requested.
    pub residuals: Option<Vec<T>>,

    /// Diagnostic metrics (RMSE, MAE, R^2), if requested.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> SblrFit<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// The n slope coefficients.
    pub fn slopes(&self) -> &[T] {
        &self.coefficients[..self.dimension]
    }

    /// The intercept.
    pub fn intercept(&self) -> T {
        self.coefficients[self.dimension]
    }

    /// Evaluate the fitted hyperplane at an independent-coordinate vector.
    pub fn predict(&self, x: &[T]) -> T {
        debug_assert_eq!(x.len(), self.dimension);
        let mut y = self.intercept();
        for (slope, &xi) in self.slopes().iter().zip(x.iter()) {
            y = y + *slope * xi;
        }
        y
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for SblrFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Dimension: {}", self.dimension)?;
        writeln!(f, "  Quantile:  {}", self.quantile_used)?;
        writeln!(f, "  Steps:     {}", self.steps)?;
        writeln!(
            f,
            "  Converged: {}",
            if self.converged { "yes" } else { "no (step cap)" }
        )?;
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Hyperplane:")?;
        writeln!(f, "{:>10} {:>14}", "Term", "Coefficient")?;
        writeln!(f, "{:-<25}", "")?;
        for (i, slope) in self.slopes().iter().enumerate() {
            let term = format!("x{i}");
            writeln!(f, "{:>10} {:>14.6}", term, slope)?;
        }
        writeln!(f, "{:>10} {:>14.6}", "intercept", self.intercept())?;

        Ok(())
    }
}

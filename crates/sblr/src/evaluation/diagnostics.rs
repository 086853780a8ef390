//! Diagnostic metrics for fit quality assessment.
//!
//! ## Purpose
//!
//! This module computes goodness-of-fit metrics from the residuals of a
//! fitted hyperplane. A quantile fit is not a least-squares fit, so these
//! numbers describe the fit rather than certify optimality; they are most
//! useful for comparing quantile settings on the same data.
//!
//! ## Key concepts
//!
//! * **Residual Metrics**: RMSE and MAE measure prediction error.
//! * **Goodness-of-Fit**: R^2 measures variance explained by the hyperplane.
//! * **Residual SD**: Sample standard deviation of the residuals.
//!
//! ## Invariants
//!
//! * Error metrics (RMSE, MAE, residual SD) are non-negative.
//! * R^2 <= 1 (R^2 = 1 is a perfect fit).
//!
//! ## Non-goals
//!
//! * This module does not perform the regression itself.
//! * This module does not provide p-values or formal hypothesis tests.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Diagnostic metrics for assessing fit quality.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Coefficient of determination (R^2).
    pub r_squared: T,

    /// Sample standard deviation of the residuals.
    pub residual_sd: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from observed dependent values and residuals.
    pub fn compute(observed: &[T], residuals: &[T]) -> Self {
        let n = observed.len();
        let n_t = T::from(n).unwrap_or(T::one());
        if n == 0 {
            return Self {
                rmse: T::zero(),
                mae: T::zero(),
                r_squared: T::zero(),
                residual_sd: T::zero(),
            };
        }

        let mut sum_y = T::zero();
        let mut sum_y_sq = T::zero();
        let mut sum_r = T::zero();
        let mut sum_r_sq = T::zero();
        let mut sum_abs_r = T::zero();
        for (&y, &r) in observed.iter().zip(residuals.iter()) {
            sum_y = sum_y + y;
            sum_y_sq = sum_y_sq + y * y;
            sum_r = sum_r + r;
            sum_r_sq = sum_r_sq + r * r;
            sum_abs_r = sum_abs_r + r.abs();
        }

        let rmse = (sum_r_sq / n_t).sqrt();
        let mae = sum_abs_r / n_t;

        // R-squared: 1 - SS_res / SS_tot, with guards for near-constant data
        let ss_tot = sum_y_sq - (sum_y * sum_y) / n_t;
        let eps = T::from(1e-12).unwrap();
        let r_squared = if ss_tot > eps * sum_y_sq.abs() {
            T::one() - sum_r_sq / ss_tot
        } else if sum_r_sq < eps * sum_y_sq.abs() || sum_r_sq == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        // Sample SD: Var(r) = (sum_r_sq - (sum_r)^2 / n) / (n - 1)
        let residual_sd = if n > 1 {
            let var = (sum_r_sq - (sum_r * sum_r) / n_t) / (n_t - T::one());
            var.max(T::zero()).sqrt()
        } else {
            rmse
        };

        Self {
            rmse,
            mae,
            r_squared,
            residual_sd,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  RMSE:        {:.6}", self.rmse)?;
        writeln!(f, "  MAE:         {:.6}", self.mae)?;
        writeln!(f, "  R^2:         {:.6}", self.r_squared)?;
        writeln!(f, "  Residual SD: {:.6}", self.residual_sd)?;
        Ok(())
    }
}

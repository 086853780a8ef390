//! Execution engine for sector-based regression.
//!
//! ## Purpose
//!
//! This module provides the executor that orchestrates a complete SBLR fit:
//! normalization, sector assignment, the Gauss-Seidel relaxation of sector
//! heights, convergence tracking, and the final conversion back to original
//! coordinates.
//!
//! ## Design notes
//!
//! * **Round-robin relaxation**: Sectors are updated in index order,
//!   cycling 0, 1, ..., n, 0, ... Each update is visible immediately to
//!   subsequent updates in the same or later sweeps. The update order and
//!   immediate visibility are part of the algorithm, not incidental.
//! * **Convergence**: A counter of consecutive updates whose height moved at
//!   most `tolerance` in absolute value; any larger move resets it. The loop
//!   ends when the counter reaches n+1 (a full quiet cycle) or at the step
//!   cap, whichever comes first.
//! * **Step cap**: `100 * n^2` by default. Hitting the cap is a designed
//!   best-effort exit with the current state, not an error; the output flags
//!   it through `converged`.
//! * **Generics**: Generic over `Float + RealField` so the center system can
//!   be LU-solved for f32 and f64 alike.
//!
//! ## Invariants
//!
//! * Input points are assumed validated (non-empty, consistent width,
//!   finite, at least one point per sector candidate).
//! * The quiet counter never exceeds n+1 and the step count never exceeds
//!   the cap.
//! * The dependent coordinate is never rescaled by normalization.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not compute residuals or diagnostics (handled by the
//!   API layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::RealField;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::duality::CenterBasis;
use crate::algorithms::sectors::assign_sectors;
use crate::math::affine::{affine_transform, regression_transform};
use crate::math::quantile::quantile;
use crate::primitives::errors::SblrError;

// ============================================================================
// Output
// ============================================================================

/// Output from a regression run.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Hyperplane coefficients in original coordinates: n slopes followed by
    /// the intercept.
    pub coefficients: Vec<T>,

    /// Final per-sector center heights, in normalized space.
    pub center_heights: Vec<T>,

    /// Relaxation steps performed (one step updates one sector).
    pub steps: usize,

    /// Whether a full quiet cycle was reached before the step cap.
    pub converged: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for sector-based regression.
#[derive(Debug, Clone)]
pub struct SblrExecutor<T> {
    /// Quantile in [0, 1] used for every height estimate.
    pub quantile: T,

    /// Absolute height tolerance below which an update counts as quiet.
    pub tolerance: T,

    /// Optional override of the relaxation step cap (default `100 * n^2`).
    pub max_steps: Option<usize>,
}

impl<T: Float + RealField> Default for SblrExecutor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + RealField> SblrExecutor<T> {
    /// Default absolute tolerance on height updates.
    const DEFAULT_TOLERANCE: f64 = 1e-5;

    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters (median regression).
    pub fn new() -> Self {
        Self {
            quantile: T::from(0.5).unwrap(),
            tolerance: T::from(Self::DEFAULT_TOLERANCE).unwrap(),
            max_steps: None,
        }
    }

    /// Set the quantile parameter.
    pub fn quantile(mut self, quantile: T) -> Self {
        self.quantile = quantile;
        self
    }

    /// Set the convergence tolerance.
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Override the relaxation step cap.
    pub fn max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    // ========================================================================
    // Main Entry Point
    // ========================================================================

    /// Fit a hyperplane to `points` (n independent coordinates followed by
    /// the dependent coordinate, n >= 0).
    ///
    /// # Errors
    ///
    /// * [`SblrError::DegenerateAxis`] if an independent coordinate has zero
    ///   range.
    /// * [`SblrError::EmptySector`] if the cloud leaves a sector unoccupied.
    /// * [`SblrError::SingularSystem`] if the center system cannot be solved
    ///   (internal invariant violation).
    pub fn run(&self, points: &[Vec<T>]) -> Result<ExecutorOutput<T>, SblrError> {
        debug_assert!(!points.is_empty());
        let dim = points[0].len() - 1;

        // Normalize the independent axes onto [-1, 1]; heights keep their units.
        let (scale, offset) = regression_transform(points, dim)?;
        let normalized = affine_transform(points, &scale, &offset);

        let basis = CenterBasis::new(dim);
        let sectors = assign_sectors(&normalized, basis.centers(), dim)?;

        // Seed every sector with the quantile of its dependent values.
        let mut scratch: Vec<T> = Vec::new();
        let mut heights = Vec::with_capacity(dim + 1);
        for members in &sectors {
            scratch.clear();
            scratch.extend(members.iter().map(|&index| normalized[index][dim]));
            heights.push(quantile(&mut scratch, self.quantile));
        }

        // Gauss-Seidel sweep: one sector per step, updates visible immediately.
        let cap = self.max_steps.unwrap_or(100 * dim * dim);
        let mut steps = 0;
        let mut quiet = 0;
        let mut sector = 0;
        while quiet < dim + 1 && steps < cap {
            let previous = heights[sector];

            scratch.clear();
            for &index in &sectors[sector] {
                let pinned = basis.solve_pinned(&heights, sector, &normalized[index])?;
                scratch.push(basis.height_at(sector, &pinned));
            }
            heights[sector] = quantile(&mut scratch, self.quantile);

            if Float::abs(previous - heights[sector]) > self.tolerance {
                quiet = 0;
            } else {
                quiet += 1;
            }
            sector = (sector + 1) % (dim + 1);
            steps += 1;
        }
        // A zero-dimensional fit is the plain quantile of the dependent
        // values; the loop body never runs and the result is exact.
        let converged = quiet > dim || dim == 0;

        // Back to original coordinates: rescale slopes, fold offsets into
        // the intercept.
        let raw = basis.solve(&heights)?;
        let mut coefficients = Vec::with_capacity(dim + 1);
        for i in 0..dim {
            coefficients.push(raw[i] * scale[i]);
        }
        let mut intercept = raw[dim];
        for i in 0..dim {
            intercept = intercept + raw[i] * offset[i];
        }
        coefficients.push(intercept);

        Ok(ExecutorOutput {
            coefficients,
            center_heights: heights,
            steps,
            converged,
        })
    }
}

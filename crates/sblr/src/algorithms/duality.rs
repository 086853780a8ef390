//! Center-height / hyperplane-coefficient duality.
//!
//! ## Purpose
//!
//! This module converts between the two equivalent descriptions of a fitted
//! hyperplane: the n+1 "center heights" (its signed height above each simplex
//! center point) and the n+1 linear coefficients (n slopes plus an
//! intercept). The forward direction is a matrix-vector product; the inverse
//! solves the (n+1)x(n+1) center system.
//!
//! ## Design notes
//!
//! * **Center points**: The simplex vertices scaled by `n/(n+1)`, each
//!   extended with a constant-1 homogeneous coordinate, form the rows of the
//!   design matrix. The matrix is non-singular for every n by construction.
//! * **Pinned solve**: One relaxation step asks "what hyperplane would put
//!   this point in this sector exactly on the surface, while every other
//!   sector keeps its last-known height". That is the same system with one
//!   row and target substituted.
//! * **Solver**: LU factorization from `nalgebra`; solve-adjacent code is
//!   bounded `Float + RealField`.
//!
//! ## Invariants
//!
//! * `heights_from(solve(h)) == h` for every full height vector `h`.
//! * A solve failure is an internal invariant violation, never a user error.
//!
//! ## Non-goals
//!
//! * This module does not choose sectors or quantiles.
//! * This module does not normalize coordinates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::{DMatrix, DVector, RealField};
use num_traits::Float;

// Internal dependencies
use crate::math::affine::scale_points;
use crate::math::simplex::regular_simplex;
use crate::primitives::errors::SblrError;

// ============================================================================
// Center Basis
// ============================================================================

/// The center points of a `dim`-dimensional sector geometry and their
/// homogeneous design matrix.
///
/// Row `v` of the design matrix is center `v` followed by a trailing 1, so
/// `design * coefficients` evaluates the hyperplane above every center at
/// once.
#[derive(Debug, Clone)]
pub struct CenterBasis<T: Float + RealField> {
    dim: usize,
    centers: Vec<Vec<T>>,
    design: DMatrix<T>,
}

impl<T: Float + RealField> CenterBasis<T> {
    /// Build the basis for `dim` independent coordinates.
    pub fn new(dim: usize) -> Self {
        let ratio = T::from(dim).unwrap() / T::from(dim + 1).unwrap();
        let centers = scale_points(&regular_simplex::<T>(dim), ratio);
        let design = DMatrix::from_fn(dim + 1, dim + 1, |row, col| {
            if col == dim {
                T::one()
            } else {
                centers[row][col]
            }
        });

        Self {
            dim,
            centers,
            design,
        }
    }

    /// Number of independent coordinates.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The `n/(n+1)`-scaled simplex vertices anchoring the sectors.
    pub fn centers(&self) -> &[Vec<T>] {
        &self.centers
    }

    // ========================================================================
    // Forward Direction
    // ========================================================================

    /// Height of the hyperplane `coefficients` above center `sector`.
    pub fn height_at(&self, sector: usize, coefficients: &[T]) -> T {
        let mut height = T::zero();
        for col in 0..=self.dim {
            height = height + self.design[(sector, col)] * coefficients[col];
        }
        height
    }

    /// Heights of the hyperplane `coefficients` above every center.
    pub fn heights_from(&self, coefficients: &[T]) -> Vec<T> {
        (0..=self.dim)
            .map(|sector| self.height_at(sector, coefficients))
            .collect()
    }

    // ========================================================================
    // Inverse Direction
    // ========================================================================

    /// Coefficients of the unique hyperplane attaining `heights` above the
    /// centers.
    pub fn solve(&self, heights: &[T]) -> Result<Vec<T>, SblrError> {
        let rhs = DVector::from_column_slice(heights);
        self.design
            .clone()
            .lu()
            .solve(&rhs)
            .map(|solution| solution.as_slice().to_vec())
            .ok_or(SblrError::SingularSystem)
    }

    /// Coefficients of the hyperplane that passes exactly through `point`
    /// in place of sector `sector`, while every other sector keeps its
    /// height from `heights`.
    ///
    /// `point` carries `dim` independent coordinates followed by the
    /// dependent value, all in normalized space.
    pub fn solve_pinned(
        &self,
        heights: &[T],
        sector: usize,
        point: &[T],
    ) -> Result<Vec<T>, SblrError> {
        let mut matrix = self.design.clone();
        let mut rhs = DVector::from_column_slice(heights);

        for col in 0..self.dim {
            matrix[(sector, col)] = point[col];
        }
        matrix[(sector, self.dim)] = T::one();
        rhs[sector] = point[self.dim];

        matrix
            .lu()
            .solve(&rhs)
            .map(|solution| solution.as_slice().to_vec())
            .ok_or(SblrError::SingularSystem)
    }
}

// ============================================================================
// Free-Function Wrappers
// ============================================================================

/// Center heights of the hyperplane described by `coefficients`
/// (n slopes followed by the intercept).
pub fn heights_from_coefficients<T: Float + RealField>(coefficients: &[T]) -> Vec<T> {
    debug_assert!(!coefficients.is_empty());
    CenterBasis::new(coefficients.len() - 1).heights_from(coefficients)
}

/// Coefficients of the unique hyperplane attaining `heights` above the
/// simplex centers.
pub fn coefficients_from_heights<T: Float + RealField>(heights: &[T]) -> Result<Vec<T>, SblrError> {
    debug_assert!(!heights.is_empty());
    CenterBasis::new(heights.len() - 1).solve(heights)
}

//! Affine transforms and unit-cube normalization.
//!
//! ## Purpose
//!
//! This module provides per-coordinate affine maps for point sets and the
//! normalization parameters that carry a point cloud's bounding box onto the
//! canonical [-1, +1]^d cube. Working in the unit cube keeps the sector
//! geometry well-conditioned regardless of the original data ranges.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: A zero-range coordinate across two or more points cannot
//!   be mapped onto the cube; it is reported as a degenerate axis instead of
//!   letting a division by zero propagate NaN/Inf into the solver.
//! * **Dependent axis**: The regression transform pins the dependent
//!   (last) axis to the identity map, so heights are never rescaled and a
//!   constant dependent coordinate remains a legal input.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * All points of a set share the dimension of the scale/offset vectors.
//! * After normalization, per-coordinate minima map to -1 and maxima to +1.
//!
//! ## Non-goals
//!
//! * This module does not assign sectors or fit anything.
//! * This module does not validate finiteness of the input (handled by the
//!   engine validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SblrError;

// ============================================================================
// Point-Set Maps
// ============================================================================

/// Multiply every coordinate of every point by a scalar factor.
pub fn scale_points<T: Float>(points: &[Vec<T>], factor: T) -> Vec<Vec<T>> {
    points
        .iter()
        .map(|point| point.iter().map(|&coord| coord * factor).collect())
        .collect()
}

/// Apply the per-coordinate affine map `x' = scale[i] * x + offset[i]` to
/// every point.
pub fn affine_transform<T: Float>(points: &[Vec<T>], scale: &[T], offset: &[T]) -> Vec<Vec<T>> {
    debug_assert_eq!(scale.len(), offset.len());

    points
        .iter()
        .map(|point| {
            debug_assert_eq!(point.len(), scale.len());
            (0..point.len())
                .map(|i| scale[i] * point[i] + offset[i])
                .collect()
        })
        .collect()
}

// ============================================================================
// Normalization Parameters
// ============================================================================

/// Affine parameters for one axis, mapping `[min, max]` onto `[-1, +1]`.
fn axis_params<T: Float>(points: &[Vec<T>], axis: usize) -> Result<(T, T), SblrError> {
    let mut min = points[0][axis];
    let mut max = points[0][axis];
    for point in points.iter().skip(1) {
        if point[axis] < min {
            min = point[axis];
        }
        if point[axis] > max {
            max = point[axis];
        }
    }

    if max == min {
        return Err(SblrError::DegenerateAxis { axis });
    }

    let scale = (T::one() + T::one()) / (max - min);
    Ok((scale, -T::one() - min * scale))
}

/// Transform parameters mapping the bounding box of `points` onto the
/// [-1, +1]^d cube.
///
/// # Special cases
///
/// * **Single point**: scale is all 1s and the offset is the negated point,
///   which maps it onto the origin.
/// * **Zero range**: a coordinate whose minimum equals its maximum across
///   two or more points fails with [`SblrError::DegenerateAxis`].
pub fn unit_cube_transform<T: Float>(points: &[Vec<T>]) -> Result<(Vec<T>, Vec<T>), SblrError> {
    debug_assert!(!points.is_empty());
    let width = points[0].len();

    if points.len() < 2 {
        let scale = vec![T::one(); width];
        let offset = points[0].iter().map(|&coord| -coord).collect();
        return Ok((scale, offset));
    }

    let mut scale = Vec::with_capacity(width);
    let mut offset = Vec::with_capacity(width);
    for axis in 0..width {
        let (a, b) = axis_params(points, axis)?;
        scale.push(a);
        offset.push(b);
    }
    Ok((scale, offset))
}

/// Transform parameters for a regression input of `dim` independent
/// coordinates plus one dependent coordinate.
///
/// The independent axes get the unit-cube parameters; the dependent (last)
/// axis is pinned to `scale = 1, offset = 0` so heights keep their original
/// units. A zero-range independent axis fails with
/// [`SblrError::DegenerateAxis`]; the dependent coordinate may be constant.
pub fn regression_transform<T: Float>(
    points: &[Vec<T>],
    dim: usize,
) -> Result<(Vec<T>, Vec<T>), SblrError> {
    debug_assert!(!points.is_empty());
    let mut scale = Vec::with_capacity(dim + 1);
    let mut offset = Vec::with_capacity(dim + 1);

    if points.len() < 2 {
        for axis in 0..dim {
            scale.push(T::one());
            offset.push(-points[0][axis]);
        }
    } else {
        for axis in 0..dim {
            let (a, b) = axis_params(points, axis)?;
            scale.push(a);
            offset.push(b);
        }
    }

    scale.push(T::one());
    offset.push(T::zero());
    Ok((scale, offset))
}

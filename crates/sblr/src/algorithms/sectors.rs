//! Angular sector assignment.
//!
//! ## Purpose
//!
//! This module partitions a normalized point cloud into the angular sectors
//! anchored by the simplex center points. Each point joins the sector of the
//! center it is nearest to, measured over the independent coordinates only.
//!
//! ## Design notes
//!
//! * **Tie-breaking**: Equidistant centers resolve to the lowest index.
//!   This only matters at exact geometric symmetry points, but it is kept
//!   strict so assignments are reproducible.
//! * **Index partition**: Sectors hold point indices, not copies; the caller
//!   keeps ownership of the coordinates.
//!
//! ## Invariants
//!
//! * Every input point lands in exactly one sector.
//! * Every sector of a successful partition is non-empty.
//!
//! ## Non-goals
//!
//! * This module does not normalize coordinates (see `math::affine`).
//! * This module does not compute heights or fit anything.

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
// Nearest Vertex
// ============================================================================

/// Index of the minimum value; ties resolve to the first occurrence.
pub fn nearest_vertex<T: Float>(distances: &[T]) -> usize {
    let mut best = 0;
    for i in 1..distances.len() {
        if distances[i] < distances[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Sector Partition
// ============================================================================

/// Partition `points` into the sectors of `centers`, comparing squared
/// Euclidean distance over the first `dim` coordinates.
///
/// # Errors
///
/// [`SblrError::EmptySector`] if any sector receives no points: the cloud
/// does not cover all angular regions and the regression cannot proceed.
pub fn assign_sectors<T: Float>(
    points: &[Vec<T>],
    centers: &[Vec<T>],
    dim: usize,
) -> Result<Vec<Vec<usize>>, SblrError> {
    let mut sectors: Vec<Vec<usize>> = vec![Vec::new(); centers.len()];
    let mut distances = vec![T::zero(); centers.len()];

    for (index, point) in points.iter().enumerate() {
        for (s, center) in centers.iter().enumerate() {
            let mut d = T::zero();
            for j in 0..dim {
                let diff = point[j] - center[j];
                d = d + diff * diff;
            }
            distances[s] = d;
        }
        sectors[nearest_vertex(&distances)].push(index);
    }

    for (sector, members) in sectors.iter().enumerate() {
        if members.is_empty() {
            return Err(SblrError::EmptySector { sector });
        }
    }

    Ok(sectors)
}

//! Regular simplex geometry.
//!
//! This module constructs the regular n-dimensional simplex
//! (hypertetrahedron) that anchors the angular sectors: n+1 vertices in
//! n-dimensional space, centered on the origin, each at distance 1 from it.
//!
//! ## Key concepts
//!
//! * **Regularity**: All vertices are unit-norm and every pair of distinct
//!   vertices has dot product -1/n, so all inter-vertex angles are equal.
//! * **Determinism**: The construction is pure; the same dimension always
//!   yields the same coordinates.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Construction
// ============================================================================

/// Coordinates of the vertices of a regular `dim`-dimensional simplex,
/// centered on the origin with unit-distance vertices.
///
/// The simplex is grown one dimension at a time: the existing vertices are
/// pulled toward the origin by `sqrt(1 - (1/n)^2)` and pushed down to the
/// hyperplane at `-1/n`, then the new apex `[0, ..., 0, 1]` is appended.
/// `dim = 0` yields a single vertex with no coordinates.
pub fn regular_simplex<T: Float>(dim: usize) -> Vec<Vec<T>> {
    let mut vertices: Vec<Vec<T>> = vec![Vec::new()];

    for n in 1..=dim {
        let level = T::one() / T::from(n).unwrap();
        let shrink = (T::one() - level * level).sqrt();

        for vertex in vertices.iter_mut() {
            for coord in vertex.iter_mut() {
                *coord = *coord * shrink;
            }
            vertex.push(-level);
        }

        let mut apex = vec![T::zero(); n - 1];
        apex.push(T::one());
        vertices.push(apex);
    }

    vertices
}

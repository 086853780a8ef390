//! # SBLR — Sector-Based Linear Regression for Rust
//!
//! A robust, quantile-driven alternative to ordinary least-squares for
//! fitting a hyperplane to a point cloud in n-dimensional space.
//!
//! ## What is SBLR?
//!
//! Sector-Based Linear Regression partitions the input points into angular
//! "sectors" around the centroid of a regular n-dimensional simplex, computes
//! a per-sector quantile height, and relaxes those heights in a round-robin
//! Gauss-Seidel sweep until they describe a single consistent hyperplane.
//! Because every sector is fitted through an order statistic rather than a
//! mean, the method is resistant to outliers, and quantiles other than the
//! median yield asymmetric (quantile) regression planes.
//!
//! ## Quick Start
//!
//! ```rust
//! use sblr::prelude::*;
//!
//! // Points (x0, x1, y) lying on the plane y = 2*x0 + 3*x1 - 1.
//! let mut points = Vec::new();
//! for i in 0..3 {
//!     for j in 0..3 {
//!         let (x0, x1) = (i as f64, j as f64);
//!         points.push(vec![x0, x1, 2.0 * x0 + 3.0 * x1 - 1.0]);
//!     }
//! }
//!
//! // Build the model
//! let model = Sblr::new()
//!     .quantile(0.5)      // Median regression (the default)
//!     .build()?;
//!
//! // Fit the model to the data
//! let fit = model.fit(&points)?;
//!
//! // n slope coefficients followed by the intercept
//! assert_eq!(fit.coefficients.len(), 3);
//! # Result::<(), SblrError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The `fit` method returns a `Result<SblrFit<T>, SblrError>`.
//!
//! - **`Ok(SblrFit<T>)`**: Contains the hyperplane coefficients and metadata.
//! - **`Err(SblrError)`**: Indicates a failure (e.g., an empty sector or a
//!   zero-range coordinate).
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use sblr::prelude::*;
//! # let points = vec![
//! #     vec![0.0, 2.0], vec![1.0, 4.0], vec![2.0, 6.0], vec![3.0, 8.0],
//! # ];
//!
//! let model = Sblr::new().build()?;
//!
//! match model.fit(&points) {
//!     Ok(fit) => println!("slope {} intercept {}", fit.slopes()[0], fit.intercept()),
//!     Err(e) => eprintln!("fitting failed: {}", e),
//! }
//! # Result::<(), SblrError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! sblr = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Nagy, G. (2018). "Sector Based Linear Regression, a New Robust Method
//!   for the Multiple Linear Regression". Acta Cybernetica 23(4).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - shared error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - sector assignment and the height/coefficient duality.
mod algorithms;

// Layer 4: Evaluation - post-fit diagnostics.
mod evaluation;

// Layer 5: Engine - validation, the Gauss-Seidel executor, output types.
mod engine;

// High-level fluent API for SBLR fitting.
mod api;

// Standard SBLR prelude.
pub mod prelude {
    pub use crate::api::{
        affine_transform, coefficients_from_heights, heights_from_coefficients, quantile,
        regression_transform, regular_simplex, sblr, scale_points, unit_cube_transform,
        CenterBasis, Diagnostics, SblrBuilder as Sblr, SblrError, SblrFit, SblrModel,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

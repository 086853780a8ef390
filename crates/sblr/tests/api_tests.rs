//! Tests for the high-level SBLR API.
//!
//! These tests verify the builder pattern, configuration options, and
//! complete regression workflows:
//! - Builder construction and validation
//! - Input validation and error handling
//! - Fit recovery on known hyperplanes
//! - Quantile (robustness) behavior
//! - Result helpers
//!
//! ## Test Organization
//!
//! 1. **Builder Construction** - Defaults, duplicates, parameter bounds
//! 2. **Input Validation** - Errors surfaced by `fit`
//! 3. **Fit Recovery** - Exact hyperplanes in one and two dimensions
//! 4. **Robustness & Quantiles** - Outliers and asymmetric noise
//! 5. **Degenerate Inputs** - Empty sectors, zero-range axes, constant fits
//! 6. **Result Helpers** - predict, residuals, diagnostics, Display

use approx::assert_relative_eq;

use sblr::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Points (x0, x1, y) on the plane y = a*x0 + b*x1 + c over a grid.
fn plane_grid(n: usize, a: f64, b: f64, c: f64) -> Vec<Vec<f64>> {
    let mut points = Vec::new();
    for i in 0..n {
        for j in 0..n {
            let (x0, x1) = (i as f64, j as f64);
            points.push(vec![x0, x1, a * x0 + b * x1 + c]);
        }
    }
    points
}

/// Points (x, y) on the line y = a*x + b.
fn line_series(n: usize, a: f64, b: f64) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            vec![x, a * x + b]
        })
        .collect()
}

// ============================================================================
// Builder Construction Tests
// ============================================================================

/// Test default build.
///
/// Verifies that an unconfigured builder produces a usable model.
#[test]
fn test_builder_defaults() {
    let model = Sblr::<f64>::new().build().expect("build ok");
    let fit = model.fit(&line_series(10, 2.0, 1.0)).expect("fit ok");
    assert_relative_eq!(fit.quantile_used, 0.5, epsilon = 1e-12);
}

/// Test duplicate parameter rejection.
///
/// Verifies that setting the same parameter twice fails at build time.
#[test]
fn test_builder_duplicate_parameter() {
    let err = Sblr::<f64>::new()
        .quantile(0.5)
        .quantile(0.9)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        SblrError::DuplicateParameter {
            parameter: "quantile"
        }
    );
}

/// Test quantile bounds.
///
/// Verifies that quantiles outside [0, 1] are rejected.
#[test]
fn test_builder_invalid_quantile() {
    let err = Sblr::<f64>::new().quantile(1.5).build().unwrap_err();
    assert!(matches!(err, SblrError::InvalidQuantile(_)));

    let err = Sblr::<f64>::new().quantile(-0.1).build().unwrap_err();
    assert!(matches!(err, SblrError::InvalidQuantile(_)));
}

/// Test tolerance bounds.
///
/// Verifies that non-positive tolerances are rejected.
#[test]
fn test_builder_invalid_tolerance() {
    let err = Sblr::<f64>::new().tolerance(0.0).build().unwrap_err();
    assert!(matches!(err, SblrError::InvalidTolerance(_)));
}

/// Test step limit bounds.
///
/// Verifies that a zero step cap is rejected.
#[test]
fn test_builder_invalid_step_limit() {
    let err = Sblr::<f64>::new().max_steps(0).build().unwrap_err();
    assert_eq!(err, SblrError::InvalidStepLimit(0));
}

// ============================================================================
// Input Validation Tests
// ============================================================================

/// Test the empty-input error.
#[test]
fn test_fit_empty_input() {
    let model = Sblr::<f64>::new().build().expect("build ok");
    let err = model.fit(&[]).unwrap_err();
    assert_eq!(err, SblrError::EmptyInput);
}

/// Test the zero-width point error.
#[test]
fn test_fit_empty_point() {
    let model = Sblr::<f64>::new().build().expect("build ok");
    let err = model.fit(&[vec![], vec![]]).unwrap_err();
    assert_eq!(err, SblrError::EmptyPoint { index: 0 });
}

/// Test the inconsistent-width error.
#[test]
fn test_fit_mismatched_dimensions() {
    let model = Sblr::<f64>::new().build().expect("build ok");
    let points = vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]];
    let err = model.fit(&points).unwrap_err();
    assert_eq!(
        err,
        SblrError::MismatchedDimensions {
            index: 1,
            got: 3,
            expected: 2,
        }
    );
}

/// Test the too-few-points error.
///
/// Two independent coordinates need at least three points.
#[test]
fn test_fit_too_few_points() {
    let model = Sblr::<f64>::new().build().expect("build ok");
    let points = vec![vec![0.0, 0.0, 0.0], vec![1.0, 1.0, 1.0]];
    let err = model.fit(&points).unwrap_err();
    assert_eq!(err, SblrError::TooFewPoints { got: 2, min: 3 });
}

/// Test the non-finite value error.
#[test]
fn test_fit_non_finite_value() {
    let model = Sblr::<f64>::new().build().expect("build ok");
    let points = vec![vec![0.0, 1.0], vec![1.0, f64::NAN], vec![2.0, 3.0]];
    let err = model.fit(&points).unwrap_err();
    assert!(matches!(err, SblrError::NonFiniteValue(_)));
}

// ============================================================================
// Fit Recovery Tests
// ============================================================================

/// Test exact line recovery.
///
/// Points exactly on y = 2x + 1 must fit to slope 2 and intercept 1.
#[test]
fn test_fit_recovers_line() {
    let model = Sblr::<f64>::new().build().expect("build ok");
    let fit = model.fit(&line_series(11, 2.0, 1.0)).expect("fit ok");

    assert!(fit.converged);
    assert_relative_eq!(fit.slopes()[0], 2.0, epsilon = 1e-3);
    assert_relative_eq!(fit.intercept(), 1.0, epsilon = 1e-3);
}

/// Test exact plane recovery.
///
/// Points exactly on y = 2*x0 + 3*x1 - 1 over a grid must fit to
/// coefficients [2, 3, -1].
#[test]
fn test_fit_recovers_plane() {
    let model = Sblr::<f64>::new().build().expect("build ok");
    let fit = model.fit(&plane_grid(5, 2.0, 3.0, -1.0)).expect("fit ok");

    assert!(fit.converged);
    assert_relative_eq!(fit.slopes()[0], 2.0, epsilon = 1e-3);
    assert_relative_eq!(fit.slopes()[1], 3.0, epsilon = 1e-3);
    assert_relative_eq!(fit.intercept(), -1.0, epsilon = 1e-3);
}

/// Test the step bound.
///
/// The relaxation must never exceed 100 * n^2 steps.
#[test]
fn test_fit_respects_step_cap() {
    let model = Sblr::<f64>::new().build().expect("build ok");

    // Noisy data in two dimensions
    let mut points = plane_grid(6, 1.0, -2.0, 4.0);
    for (i, point) in points.iter_mut().enumerate() {
        point[2] += ((i * 7919) % 13) as f64 * 0.1;
    }

    let fit = model.fit(&points).expect("fit ok");
    assert!(fit.steps <= 100 * 2 * 2);
}

/// Test model reuse.
///
/// A built model is reentrant: repeated fits on the same data agree.
#[test]
fn test_model_reuse() {
    let model = Sblr::<f64>::new().build().expect("build ok");
    let points = line_series(9, -1.5, 3.0);

    let first = model.fit(&points).expect("fit ok");
    let second = model.fit(&points).expect("fit ok");
    assert_eq!(first.coefficients, second.coefficients);
}

/// Test the convenience entry point.
///
/// Verifies that `sblr` returns the plain coefficient vector.
#[test]
fn test_sblr_convenience_function() {
    let coefficients = sblr(&line_series(11, 2.0, 1.0), 0.5).expect("fit ok");
    assert_eq!(coefficients.len(), 2);
    assert_relative_eq!(coefficients[0], 2.0, epsilon = 1e-3);
    assert_relative_eq!(coefficients[1], 1.0, epsilon = 1e-3);
}

// ============================================================================
// Robustness & Quantile Tests
// ============================================================================

/// Test outlier resistance of the median fit.
///
/// A single large outlier must not drag the fitted line away.
#[test]
fn test_median_fit_resists_outlier() {
    let mut points = line_series(21, 3.0, 2.0);
    points[10][1] += 100.0;

    let model = Sblr::<f64>::new().build().expect("build ok");
    let fit = model.fit(&points).expect("fit ok");

    assert_relative_eq!(fit.slopes()[0], 3.0, epsilon = 0.3);
    assert_relative_eq!(fit.intercept(), 2.0, epsilon = 1.5);
}

/// Test quantile sensitivity.
///
/// With one-sided positive noise, the 0.9-quantile plane must sit visibly
/// above the median plane.
#[test]
fn test_quantile_shifts_fit() {
    let mut points = line_series(21, 1.0, 0.0);
    for index in [2usize, 7, 12, 17] {
        points[index][1] += 10.0;
    }

    let median = Sblr::<f64>::new().quantile(0.5).build().expect("build ok");
    let upper = Sblr::<f64>::new().quantile(0.9).build().expect("build ok");

    let median_fit = median.fit(&points).expect("fit ok");
    let upper_fit = upper.fit(&points).expect("fit ok");

    assert!(upper_fit.intercept() > median_fit.intercept() + 0.5);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test the empty-sector failure.
///
/// Points confined to the x0 = x1 diagonal never reach one of the three
/// sectors of a two-dimensional fit.
#[test]
fn test_fit_degenerate_distribution() {
    let points: Vec<Vec<f64>> = (0..11)
        .map(|i| {
            let t = i as f64;
            vec![t, t, 2.0 * t]
        })
        .collect();

    let model = Sblr::<f64>::new().build().expect("build ok");
    let err = model.fit(&points).unwrap_err();
    assert_eq!(err, SblrError::EmptySector { sector: 1 });
}

/// Test the zero-range independent axis failure.
#[test]
fn test_fit_degenerate_axis() {
    let points = vec![vec![5.0, 1.0], vec![5.0, 2.0], vec![5.0, 3.0]];
    let model = Sblr::<f64>::new().build().expect("build ok");
    let err = model.fit(&points).unwrap_err();
    assert_eq!(err, SblrError::DegenerateAxis { axis: 0 });
}

/// Test a constant dependent coordinate.
///
/// A horizontal line is a legal fit; the dependent axis is never rescaled.
#[test]
fn test_fit_constant_dependent() {
    let points: Vec<Vec<f64>> = (0..8).map(|i| vec![i as f64, 7.0]).collect();
    let model = Sblr::<f64>::new().build().expect("build ok");
    let fit = model.fit(&points).expect("fit ok");

    assert_relative_eq!(fit.slopes()[0], 0.0, epsilon = 1e-6);
    assert_relative_eq!(fit.intercept(), 7.0, epsilon = 1e-6);
}

/// Test the zero-dimensional constant fit.
///
/// Width-1 points reduce the regression to the quantile of the values.
#[test]
fn test_fit_constant_only() {
    let points = vec![vec![1.0f64], vec![5.0], vec![3.0]];
    let model = Sblr::<f64>::new().build().expect("build ok");
    let fit = model.fit(&points).expect("fit ok");

    assert_eq!(fit.dimension, 0);
    assert_eq!(fit.steps, 0);
    assert!(fit.converged);
    assert_relative_eq!(fit.intercept(), 3.0, epsilon = 1e-12);
}

// ============================================================================
// Result Helper Tests
// ============================================================================

/// Test prediction on the fitted hyperplane.
#[test]
fn test_fit_predict() {
    let model = Sblr::<f64>::new().build().expect("build ok");
    let fit = model.fit(&plane_grid(5, 2.0, 3.0, -1.0)).expect("fit ok");

    assert_relative_eq!(fit.predict(&[1.0, 1.0]), 4.0, epsilon = 1e-2);
    assert_relative_eq!(fit.predict(&[0.0, 0.0]), -1.0, epsilon = 1e-2);
}

/// Test optional residuals.
///
/// Exact data must yield near-zero residuals, one per input point.
#[test]
fn test_fit_residuals() {
    let points = plane_grid(5, 2.0, 3.0, -1.0);
    let model = Sblr::<f64>::new()
        .return_residuals()
        .build()
        .expect("build ok");
    let fit = model.fit(&points).expect("fit ok");

    let residuals = fit.residuals.as_ref().expect("residuals present");
    assert_eq!(residuals.len(), points.len());
    for residual in residuals {
        assert_relative_eq!(*residual, 0.0, epsilon = 1e-2);
    }
}

/// Test optional diagnostics.
///
/// An exact fit must report R^2 close to 1.
#[test]
fn test_fit_diagnostics() {
    let model = Sblr::<f64>::new()
        .return_diagnostics()
        .build()
        .expect("build ok");
    let fit = model.fit(&plane_grid(5, 2.0, 3.0, -1.0)).expect("fit ok");

    let diagnostics = fit.diagnostics.as_ref().expect("diagnostics present");
    assert!(diagnostics.r_squared > 0.99);
    assert!(diagnostics.rmse < 0.05);
}

/// Test optional center heights.
///
/// One height per sector, in normalized space.
#[test]
fn test_fit_center_heights() {
    let model = Sblr::<f64>::new()
        .return_center_heights()
        .build()
        .expect("build ok");
    let fit = model.fit(&plane_grid(5, 2.0, 3.0, -1.0)).expect("fit ok");

    let heights = fit.center_heights.as_ref().expect("heights present");
    assert_eq!(heights.len(), 3);
}

/// Test the Display implementation.
///
/// The rendered summary names the hyperplane terms.
#[test]
fn test_fit_display() {
    let model = Sblr::<f64>::new().build().expect("build ok");
    let fit = model.fit(&line_series(11, 2.0, 1.0)).expect("fit ok");

    let rendered = format!("{fit}");
    assert!(rendered.contains("Hyperplane"));
    assert!(rendered.contains("intercept"));
    assert!(rendered.contains("Converged: yes"));
}

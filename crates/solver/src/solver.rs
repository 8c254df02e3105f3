use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::area::{check_radius, domain, enclosed_area, intersection_area};

/// Outcome of a successful distance search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub distance: f64,
    pub iterations: usize,
    /// `|intersection_area(distance) − target|` at the returned distance.
    pub residual: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("{what} = {value} lies outside the valid range [{min}, {max}]")]
    NumericDomain {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{what} is not finite ({value})")]
    NonFinite { what: &'static str, value: f64 },
    #[error("Target overlap {target} exceeds the largest achievable overlap {max}")]
    TargetOutOfRange { target: f64, max: f64 },
    #[error("Distance search did not converge after {max_iterations} iterations (residual: {residual})")]
    NonConvergence { max_iterations: usize, residual: f64 },
}

/// Configuration for the bisection distance search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Upper bound on bisection steps before giving up with
    /// [`SolverError::NonConvergence`].
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_iterations: 100 }
    }
}

/// Initial search bracket for two circles: the full domain of
/// [`intersection_area`].
pub fn initial_bounds(r1: f64, r2: f64) -> (f64, f64) {
    domain(r1, r2)
}

/// Find the center distance at which two circles overlap by `target_area`,
/// using the default [`SolverConfig`].
pub fn find_distance(
    r1: f64,
    r2: f64,
    target_area: f64,
    min_d: f64,
    max_d: f64,
    tolerance: f64,
) -> Result<f64, SolverError> {
    find_distance_with(
        r1,
        r2,
        target_area,
        min_d,
        max_d,
        tolerance,
        &SolverConfig::default(),
    )
    .map(|result| result.distance)
}

/// Bisection search for the distance `d` in `[min_d, max_d]` such that
/// `|intersection_area(r1, r2, d) − target_area| < tolerance`.
///
/// Relies on the overlap area being non-increasing in `d`: too much overlap
/// moves the lower bound up, too little moves the upper bound down.
#[instrument(skip(config))]
pub fn find_distance_with(
    r1: f64,
    r2: f64,
    target_area: f64,
    min_d: f64,
    max_d: f64,
    tolerance: f64,
    config: &SolverConfig,
) -> Result<SearchResult, SolverError> {
    check_radius("r1", r1)?;
    check_radius("r2", r2)?;
    check_bounds(r1, r2, min_d, max_d)?;

    if !tolerance.is_finite() {
        return Err(SolverError::NonFinite {
            what: "tolerance",
            value: tolerance,
        });
    }
    if tolerance <= 0.0 {
        return Err(SolverError::NumericDomain {
            what: "tolerance",
            value: tolerance,
            min: f64::MIN_POSITIVE,
            max: f64::INFINITY,
        });
    }

    if !target_area.is_finite() {
        return Err(SolverError::NonFinite {
            what: "target_area",
            value: target_area,
        });
    }
    let max_area = enclosed_area(r1, r2);
    if target_area > max_area + tolerance {
        return Err(SolverError::TargetOutOfRange {
            target: target_area,
            max: max_area,
        });
    }
    if target_area < 0.0 {
        return Err(SolverError::NumericDomain {
            what: "target_area",
            value: target_area,
            min: 0.0,
            max: max_area,
        });
    }

    let (mut lo, mut hi) = (min_d, max_d);
    let mut residual = f64::INFINITY;

    for iteration in 1..=config.max_iterations {
        let d = (lo + hi) / 2.0;
        let guess = intersection_area(r1, r2, d)?;
        residual = (guess - target_area).abs();

        if residual < tolerance {
            debug!(distance = d, iterations = iteration, residual, "distance search converged");
            return Ok(SearchResult {
                distance: d,
                iterations: iteration,
                residual,
            });
        }

        if guess > target_area {
            // Overlap still too large: move the circles apart.
            lo = d;
        } else {
            hi = d;
        }
    }

    debug!(max_iterations = config.max_iterations, residual, "distance search gave up");
    Err(SolverError::NonConvergence {
        max_iterations: config.max_iterations,
        residual,
    })
}

fn check_bounds(r1: f64, r2: f64, min_d: f64, max_d: f64) -> Result<(), SolverError> {
    for (what, value) in [("min_d", min_d), ("max_d", max_d)] {
        if !value.is_finite() {
            return Err(SolverError::NonFinite { what, value });
        }
    }

    let (domain_min, domain_max) = domain(r1, r2);
    let slack = 1e-12 * (r1 + r2);
    if min_d < 0.0 || min_d < domain_min - slack {
        return Err(SolverError::NumericDomain {
            what: "min_d",
            value: min_d,
            min: domain_min,
            max: domain_max,
        });
    }
    if max_d < min_d || max_d > domain_max + slack {
        return Err(SolverError::NumericDomain {
            what: "max_d",
            value: max_d,
            min: min_d,
            max: domain_max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::radius_from_area;
    use std::f64::consts::PI;

    #[test]
    fn test_equal_sets_half_overlap() {
        let r = radius_from_area(100.0);
        let (min_d, max_d) = initial_bounds(r, r);
        let d = find_distance(r, r, 50.0, min_d, max_d, 0.005).unwrap();

        let area = intersection_area(r, r, d).unwrap();
        assert!((area - 50.0).abs() < 0.005, "area {} not within tolerance of 50", area);
        assert!(d > min_d && d < max_d);
    }

    #[test]
    fn test_unequal_sets_converge_inside_domain() {
        let (r1, r2) = (radius_from_area(50.0), radius_from_area(200.0));
        let (min_d, max_d) = initial_bounds(r1, r2);
        let result =
            find_distance_with(r1, r2, 10.0, min_d, max_d, 0.01, &SolverConfig::default()).unwrap();

        assert!(result.distance >= min_d && result.distance <= max_d);
        assert!(result.residual < 0.01);
        assert!(result.iterations >= 1 && result.iterations <= 100);
        let area = intersection_area(r1, r2, result.distance).unwrap();
        assert!((area - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_full_overlap_of_equal_circles_stays_positive() {
        let r = radius_from_area(10.0);
        let (min_d, max_d) = initial_bounds(r, r);
        assert_eq!(min_d, 0.0);

        let d = find_distance(r, r, 10.0, min_d, max_d, 0.001).unwrap();
        assert!(d > 0.0, "bisection midpoint must never be exactly zero");
        assert!(d < 0.01, "expected near-total overlap, got distance {}", d);
    }

    #[test]
    fn test_tiny_iteration_cap_reports_non_convergence() {
        let r = radius_from_area(100.0);
        let (min_d, max_d) = initial_bounds(r, r);
        let config = SolverConfig { max_iterations: 2 };
        let err = find_distance_with(r, r, 12.345, min_d, max_d, 1e-9, &config).unwrap_err();

        match err {
            SolverError::NonConvergence { max_iterations, residual } => {
                assert_eq!(max_iterations, 2);
                assert!(residual.is_finite() && residual > 1e-9);
            }
            other => panic!("expected NonConvergence, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_iteration_cap_never_evaluates() {
        let config = SolverConfig { max_iterations: 0 };
        let err = find_distance_with(1.0, 1.0, 1.0, 0.0, 2.0, 0.1, &config).unwrap_err();
        assert!(matches!(err, SolverError::NonConvergence { max_iterations: 0, .. }));
    }

    #[test]
    fn test_target_larger_than_smaller_circle_is_rejected() {
        let err = find_distance(2.0, 1.0, PI * 2.0, 1.0, 3.0, 1e-6).unwrap_err();
        assert!(matches!(err, SolverError::TargetOutOfRange { .. }));
    }

    #[test]
    fn test_malformed_bounds_are_rejected() {
        assert!(matches!(
            find_distance(2.0, 1.0, 1.0, 0.5, 3.0, 1e-6),
            Err(SolverError::NumericDomain { what: "min_d", .. })
        ));
        assert!(matches!(
            find_distance(2.0, 1.0, 1.0, 1.0, 3.5, 1e-6),
            Err(SolverError::NumericDomain { what: "max_d", .. })
        ));
        assert!(matches!(
            find_distance(2.0, 1.0, 1.0, 2.5, 1.5, 1e-6),
            Err(SolverError::NumericDomain { what: "max_d", .. })
        ));
        assert!(matches!(
            find_distance(2.0, 1.0, 1.0, f64::NAN, 3.0, 1e-6),
            Err(SolverError::NonFinite { what: "min_d", .. })
        ));
    }

    #[test]
    fn test_zero_tolerance_is_rejected() {
        let err = find_distance(1.0, 1.0, 1.0, 0.0, 2.0, 0.0).unwrap_err();
        assert!(matches!(err, SolverError::NumericDomain { what: "tolerance", .. }));
    }

    #[test]
    fn test_default_config() {
        assert_eq!(SolverConfig::default().max_iterations, 100);
    }
}

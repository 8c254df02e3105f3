use std::f64::consts::PI;

use crate::solver::SolverError;

/// Relative slack applied to the distance domain so that bounds computed
/// from the radii themselves are never rejected due to rounding.
const DOMAIN_SLACK: f64 = 1e-12;

/// Lens-shaped overlap area of two circles with radii `r1`, `r2` whose
/// centers are `d` apart.
///
/// Uses the circle-circle intersection formula from
/// <http://mathworld.wolfram.com/Circle-CircleIntersection.html>:
///
/// ```text
/// A(d) = r1² acos((d² + r1² − r2²) / (2 d r1))
///      + r2² acos((d² + r2² − r1²) / (2 d r2))
///      − ½ sqrt((−d + r1 + r2)(d + r1 − r2)(d − r1 + r2)(d + r1 + r2))
/// ```
///
/// `d` must lie in `[|r1 − r2|, r1 + r2]`. Over that domain the area is
/// non-increasing in `d`: the lower end encloses the smaller circle
/// (`π·min(r1, r2)²`), the upper end makes the circles tangent (`0`).
pub fn intersection_area(r1: f64, r2: f64, d: f64) -> Result<f64, SolverError> {
    check_radius("r1", r1)?;
    check_radius("r2", r2)?;
    if !d.is_finite() {
        return Err(SolverError::NonFinite {
            what: "distance",
            value: d,
        });
    }

    let (min_d, max_d) = domain(r1, r2);
    let slack = DOMAIN_SLACK * (r1 + r2);
    if d < min_d - slack || d > max_d + slack {
        return Err(SolverError::NumericDomain {
            what: "distance",
            value: d,
            min: min_d,
            max: max_d,
        });
    }

    // Enclosed: also covers d == 0 for equal radii, where the formula divides by zero.
    if d <= min_d {
        return Ok(enclosed_area(r1, r2));
    }
    if d >= max_d {
        return Ok(0.0);
    }

    let (r1_sq, r2_sq, d_sq) = (r1 * r1, r2 * r2, d * d);
    let alpha = ((d_sq + r1_sq - r2_sq) / (2.0 * d * r1)).clamp(-1.0, 1.0);
    let beta = ((d_sq + r2_sq - r1_sq) / (2.0 * d * r2)).clamp(-1.0, 1.0);
    let radicand = (-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2);

    Ok(r1_sq * alpha.acos() + r2_sq * beta.acos() - 0.5 * radicand.max(0.0).sqrt())
}

/// Area of the smaller circle, i.e. the overlap when it is fully enclosed.
pub fn enclosed_area(r1: f64, r2: f64) -> f64 {
    let r = r1.min(r2);
    PI * r * r
}

/// The valid distance domain `(|r1 − r2|, r1 + r2)` of [`intersection_area`].
pub fn domain(r1: f64, r2: f64) -> (f64, f64) {
    ((r1 - r2).abs(), r1 + r2)
}

/// Radius of a circle with the given area.
pub fn radius_from_area(area: f64) -> f64 {
    (area / PI).sqrt()
}

/// Reject radii that are not finite and strictly positive.
pub fn check_radius(what: &'static str, r: f64) -> Result<(), SolverError> {
    if !r.is_finite() {
        return Err(SolverError::NonFinite { what, value: r });
    }
    if r <= 0.0 {
        return Err(SolverError::NumericDomain {
            what,
            value: r,
            min: 0.0,
            max: f64::INFINITY,
        });
    }
    Ok(())
}

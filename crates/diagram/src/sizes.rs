use serde::Serialize;
use tracing::warn;

use crate::diagram::DiagramError;

/// Validated set sizes. The stored intersection never exceeds either set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SetSizes {
    area_a: f64,
    area_b: f64,
    intersection: f64,
    requested_intersection: f64,
}

impl SetSizes {
    /// Validate the inputs and clamp `intersection` to `min(intersection, area_a, area_b)`.
    ///
    /// Non-positive (or NaN) set areas and negative intersections are
    /// rejected. Infinite areas pass through; the diagram reports them as
    /// non-finite radii.
    pub fn new(area_a: f64, area_b: f64, intersection: f64) -> Result<Self, DiagramError> {
        for (what, value) in [("area_a", area_a), ("area_b", area_b)] {
            if value.is_nan() || value <= 0.0 {
                return Err(DiagramError::InvalidInput {
                    what,
                    value,
                    reason: "set areas must be positive",
                });
            }
        }
        if intersection < 0.0 || intersection.is_nan() {
            return Err(DiagramError::InvalidInput {
                what: "intersection",
                value: intersection,
                reason: "intersection must be non-negative",
            });
        }

        let clamped = intersection.min(area_a).min(area_b);
        if clamped < intersection {
            warn!(requested = intersection, clamped, "intersection exceeds a set size; clamping");
        }

        Ok(Self {
            area_a,
            area_b,
            intersection: clamped,
            requested_intersection: intersection,
        })
    }

    pub fn area_a(&self) -> f64 {
        self.area_a
    }

    pub fn area_b(&self) -> f64 {
        self.area_b
    }

    /// The clamped intersection the geometry is solved for.
    pub fn intersection(&self) -> f64 {
        self.intersection
    }

    /// The intersection as passed in, before clamping.
    pub fn requested_intersection(&self) -> f64 {
        self.requested_intersection
    }

    pub fn is_clamped(&self) -> bool {
        self.intersection < self.requested_intersection
    }
}

/// Absolute convergence threshold for the distance search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tolerance {
    error: f64,
}

impl Tolerance {
    /// `|error_scale * intersection|`, never below
    /// `min_relative * intersection`. Zero only for a zero intersection.
    pub fn from_scale(error_scale: f64, intersection: f64, min_relative: f64) -> Self {
        let scaled = (error_scale * intersection).abs();
        Self {
            error: scaled.max((min_relative * intersection).abs()),
        }
    }

    pub fn error(&self) -> f64 {
        self.error
    }

    /// Whether `area` is indistinguishable from no overlap at all.
    /// A zero area is always negligible.
    pub fn is_negligible(&self, area: f64) -> bool {
        area <= self.error
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument};
use venn_solver::{
    SolverError, check_radius, find_distance_with, initial_bounds, intersection_area,
    radius_from_area,
};

use crate::config::{DiagramConfig, LayoutConfig};
use crate::layout::Layout;
use crate::sizes::{SetSizes, Tolerance};

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("Invalid {what} ({value}): {reason}")]
    InvalidInput {
        what: &'static str,
        value: f64,
        reason: &'static str,
    },
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Solved circle geometry in input units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleGeometry {
    pub radius_a: f64,
    pub radius_b: f64,
    /// Center-to-center distance.
    pub distance: f64,
    /// Bisection steps taken; zero when the circles were placed tangent
    /// without searching.
    pub iterations: usize,
}

/// A two-set Venn diagram with its circle geometry solved at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VennDiagram {
    sizes: SetSizes,
    tolerance: Tolerance,
    geometry: CircleGeometry,
}

impl VennDiagram {
    pub fn new(area_a: f64, area_b: f64, intersection: f64) -> Result<Self, DiagramError> {
        Self::with_config(area_a, area_b, intersection, &DiagramConfig::default())
    }

    pub fn with_error_scale(
        area_a: f64,
        area_b: f64,
        intersection: f64,
        error_scale: f64,
    ) -> Result<Self, DiagramError> {
        Self::with_config(
            area_a,
            area_b,
            intersection,
            &DiagramConfig::with_error_scale(error_scale),
        )
    }

    #[instrument(skip(config), fields(error_scale = config.error_scale))]
    pub fn with_config(
        area_a: f64,
        area_b: f64,
        intersection: f64,
        config: &DiagramConfig,
    ) -> Result<Self, DiagramError> {
        let sizes = SetSizes::new(area_a, area_b, intersection)?;
        let tolerance = Tolerance::from_scale(
            config.error_scale,
            sizes.intersection(),
            config.min_relative_tolerance,
        );
        if !tolerance.error().is_finite() {
            return Err(SolverError::NonFinite {
                what: "tolerance",
                value: tolerance.error(),
            }
            .into());
        }

        let radius_a = radius_from_area(sizes.area_a());
        let radius_b = radius_from_area(sizes.area_b());
        check_radius("radius_a", radius_a)?;
        check_radius("radius_b", radius_b)?;

        let (distance, iterations) = if tolerance.is_negligible(sizes.intersection()) {
            (radius_a + radius_b, 0)
        } else {
            let (min_d, max_d) = initial_bounds(radius_a, radius_b);
            let result = find_distance_with(
                radius_a,
                radius_b,
                sizes.intersection(),
                min_d,
                max_d,
                tolerance.error(),
                &config.solver,
            )?;
            (result.distance, result.iterations)
        };

        info!(radius_a, radius_b, distance, iterations, "solved venn geometry");

        Ok(Self {
            sizes,
            tolerance,
            geometry: CircleGeometry {
                radius_a,
                radius_b,
                distance,
                iterations,
            },
        })
    }

    pub fn radius_a(&self) -> f64 {
        self.geometry.radius_a
    }

    pub fn radius_b(&self) -> f64 {
        self.geometry.radius_b
    }

    pub fn distance(&self) -> f64 {
        self.geometry.distance
    }

    pub fn geometry(&self) -> &CircleGeometry {
        &self.geometry
    }

    pub fn sizes(&self) -> &SetSizes {
        &self.sizes
    }

    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Overlap area actually produced by the solved distance.
    pub fn actual_intersection(&self) -> Result<f64, DiagramError> {
        Ok(intersection_area(
            self.geometry.radius_a,
            self.geometry.radius_b,
            self.geometry.distance,
        )?)
    }

    /// Canvas layout with the default margin and scale.
    pub fn layout(&self) -> Layout {
        self.layout_with(&LayoutConfig::default())
    }

    pub fn layout_with(&self, config: &LayoutConfig) -> Layout {
        Layout::from_geometry(&self.geometry, config)
    }
}

impl fmt::Display for VennDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "radius_a: {:.6}\nradius_b: {:.6}\ndistance: {:.6}",
            self.geometry.radius_a, self.geometry.radius_b, self.geometry.distance
        )
    }
}

//! Configuration for diagram construction and layout.

use serde::{Deserialize, Serialize};
use venn_solver::SolverConfig;

use crate::diagram::DiagramError;

/// Default fraction of the requested intersection used as search tolerance.
pub const DEFAULT_ERROR_SCALE: f64 = 0.0001;

/// Canvas margin around the circles, in pixel units.
pub const DEFAULT_MARGIN: f64 = 20.0;

/// Pixel length the larger radius is scaled to.
pub const DEFAULT_PIXEL_SPAN: f64 = 100.0;

/// Controls how the circle distance is solved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Fraction of the requested intersection area used as the absolute
    /// convergence tolerance of the distance search.
    pub error_scale: f64,
    /// Lower bound on the tolerance as a fraction of the intersection.
    /// Only takes effect when `error_scale` is smaller, e.g. zero.
    pub min_relative_tolerance: f64,
    pub solver: SolverConfig,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            error_scale: DEFAULT_ERROR_SCALE,
            min_relative_tolerance: 1e-12,
            solver: SolverConfig::default(),
        }
    }
}

impl DiagramConfig {
    pub fn with_error_scale(error_scale: f64) -> Self {
        Self {
            error_scale,
            ..Self::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, DiagramError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Controls how solved geometry is mapped onto a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub margin: f64,
    pub pixel_span: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            pixel_span: DEFAULT_PIXEL_SPAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DiagramConfig::from_json(r#"{ "error_scale": 0.001 }"#).unwrap();
        assert_eq!(config.error_scale, 0.001);
        assert_eq!(config.min_relative_tolerance, 1e-12);
        assert_eq!(config.solver.max_iterations, 100);
    }

    #[test]
    fn test_nested_solver_config() {
        let config = DiagramConfig::from_json(r#"{ "solver": { "max_iterations": 7 } }"#).unwrap();
        assert_eq!(config.error_scale, DEFAULT_ERROR_SCALE);
        assert_eq!(config.solver.max_iterations, 7);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = DiagramConfig::from_json("{ error_scale: ").unwrap_err();
        assert!(matches!(err, DiagramError::Config(_)));
    }

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.margin, 20.0);
        assert_eq!(layout.pixel_span, 100.0);
    }
}

//! Canvas-space layout of solved geometry, handed to a renderer.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::diagram::CircleGeometry;

/// A circle in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleLayout {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

/// Everything a vector-graphics serializer needs to draw the diagram.
///
/// The larger circle is always `pixel_span` units in radius, so the visual
/// size does not depend on the magnitude of the input areas. Both circles
/// sit on the same horizontal line, circle A to the left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub margin: f64,
    /// Canvas units per input length unit.
    pub scale: f64,
    pub circle_a: CircleLayout,
    pub circle_b: CircleLayout,
}

impl Layout {
    pub fn from_geometry(geometry: &CircleGeometry, config: &LayoutConfig) -> Self {
        let CircleGeometry {
            radius_a,
            radius_b,
            distance,
            ..
        } = *geometry;
        let margin = config.margin;
        let max_radius = radius_a.max(radius_b);
        let scale = config.pixel_span / max_radius;

        // Horizontal extent relative to the center of circle A.
        let left = (-radius_a).min(distance - radius_b);
        let right = radius_a.max(distance + radius_b);

        let cy = margin + max_radius * scale;
        let cx_a = margin - left * scale;

        Self {
            canvas_width: margin + (right - left) * scale + margin,
            canvas_height: margin + 2.0 * max_radius * scale + margin,
            margin,
            scale,
            circle_a: CircleLayout {
                cx: cx_a,
                cy,
                r: radius_a * scale,
            },
            circle_b: CircleLayout {
                cx: cx_a + distance * scale,
                cy,
                r: radius_b * scale,
            },
        }
    }

    /// Whether `circle` lies inside the canvas with at least `margin` to spare.
    pub fn contains(&self, circle: &CircleLayout) -> bool {
        let eps = 1e-9 * self.canvas_width.max(self.canvas_height);
        circle.cx - circle.r >= self.margin - eps
            && circle.cy - circle.r >= self.margin - eps
            && circle.cx + circle.r <= self.canvas_width - self.margin + eps
            && circle.cy + circle.r <= self.canvas_height - self.margin + eps
    }
}

use serde::{Deserialize, Serialize};
use venn_diagram::{CircleLayout, Layout};

use crate::{LayoutRenderer, RenderError};

/// Fill colours and opacity of the two circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    pub fill_a: String,
    pub fill_b: String,
    pub opacity: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            fill_a: "#ff0000".to_string(),
            fill_b: "#0000ff".to_string(),
            opacity: 0.4,
        }
    }
}

/// Renders a layout as a standalone SVG document with two translucent circles.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    pub style: SvgStyle,
}

impl SvgRenderer {
    pub fn new(style: SvgStyle) -> Self {
        Self { style }
    }

    fn circle(circle: &CircleLayout, fill: &str, opacity: f64) -> String {
        format!(
            "  <circle r=\"{:.6}\" cx=\"{:.6}\" cy=\"{:.6}\" fill=\"{}\" opacity=\"{}\" />\n",
            circle.r,
            circle.cx,
            circle.cy,
            escape_attr(fill),
            opacity
        )
    }
}

impl LayoutRenderer for SvgRenderer {
    fn render(&self, layout: &Layout) -> Result<String, RenderError> {
        let mut svg = format!(
            "<svg height=\"{:.6}\" version=\"1.0\" width=\"{:.6}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            layout.canvas_height, layout.canvas_width
        );
        svg.push_str(&Self::circle(&layout.circle_a, &self.style.fill_a, self.style.opacity));
        svg.push_str(&Self::circle(&layout.circle_b, &self.style.fill_b, self.style.opacity));
        svg.push_str("</svg>\n");
        Ok(svg)
    }

    fn extension(&self) -> &str {
        "svg"
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

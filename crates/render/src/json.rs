use venn_diagram::Layout;

use crate::{LayoutRenderer, RenderError};

/// Emits the layout record itself as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl LayoutRenderer for JsonRenderer {
    fn render(&self, layout: &Layout) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(layout)?)
    }

    fn extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use venn_diagram::VennDiagram;

    #[test]
    fn test_json_layout_fields() {
        let layout = VennDiagram::new(100.0, 100.0, 0.0).unwrap().layout();
        let json = JsonRenderer.render(&layout).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        for key in ["canvas_width", "canvas_height", "margin", "scale", "circle_a", "circle_b"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["margin"], 20.0);

        let parsed: Layout = serde_json::from_str(&json).unwrap();
        assert_relative_eq!(parsed.circle_a.r, 100.0, epsilon = 1e-9);
        assert_relative_eq!(parsed.canvas_width, layout.canvas_width, epsilon = 1e-9);
        assert_relative_eq!(parsed.circle_b.cx, layout.circle_b.cx, epsilon = 1e-9);
    }
}

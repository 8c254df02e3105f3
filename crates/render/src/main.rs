//! Render a fixed set of sample two-set Venn diagrams to `docs/renders`.

use std::fs;
use std::path::Path;

use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use venn_diagram::{DiagramConfig, VennDiagram};
use venn_render::{JsonRenderer, LayoutRenderer, RenderError, SvgRenderer, write_layout};

/// (file stem, area_a, area_b, intersection, error_scale)
const SAMPLES: &[(&str, f64, f64, f64, f64)] = &[
    ("equal_half_overlap", 100.0, 100.0, 50.0, 0.0001),
    ("unequal_small_overlap", 50.0, 200.0, 10.0, 0.001),
    ("total_overlap", 10.0, 10.0, 10.0, 0.0001),
    ("disjoint", 30.0, 70.0, 0.0, 0.0001),
    ("subset", 20.0, 180.0, 20.0, 0.0001),
    ("clamped", 40.0, 60.0, 55.0, 0.0001),
];

fn main() -> Result<(), RenderError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let out_dir = Path::new("docs/renders");
    fs::create_dir_all(out_dir)?;

    let svg = SvgRenderer::default();
    let renderers: [&dyn LayoutRenderer; 2] = [&svg, &JsonRenderer];

    println!("=== Two-set Venn diagrams ===");
    for &(stem, area_a, area_b, intersection, error_scale) in SAMPLES {
        let config = DiagramConfig::with_error_scale(error_scale);
        let venn = VennDiagram::with_config(area_a, area_b, intersection, &config)?;
        let layout = venn.layout();

        println!("{stem}: A={area_a} B={area_b} A∩B={intersection}");
        for line in venn.to_string().lines() {
            println!("  {line}");
        }
        println!(
            "  overlap achieved: {:.6} (tolerance {:.6}, {} iterations)",
            venn.actual_intersection()?,
            venn.tolerance().error(),
            venn.geometry().iterations
        );

        for renderer in renderers {
            let path = write_layout(renderer, &layout, out_dir, stem)?;
            println!("  -> {}", path.display());
        }
    }

    Ok(())
}

//! Serializers that turn a solved [`Layout`] into a document.
//!
//! The diagram model knows nothing about output formats; anything that
//! implements [`LayoutRenderer`] can draw it.

pub mod json;
pub mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, instrument};
use venn_diagram::{DiagramError, Layout};

pub use json::JsonRenderer;
pub use svg::{SvgRenderer, SvgStyle};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Diagram error: {0}")]
    Diagram(#[from] DiagramError),
}

/// Produces a document from a diagram layout.
pub trait LayoutRenderer {
    fn render(&self, layout: &Layout) -> Result<String, RenderError>;

    /// File extension for documents produced by this renderer, without the dot.
    fn extension(&self) -> &str;
}

/// Render `layout` and write it to `dir/<stem>.<extension>`.
#[instrument(skip(renderer, layout), fields(extension = renderer.extension()))]
pub fn write_layout(
    renderer: &dyn LayoutRenderer,
    layout: &Layout,
    dir: &Path,
    stem: &str,
) -> Result<PathBuf, RenderError> {
    let document = renderer.render(layout)?;
    let path = dir.join(format!("{stem}.{}", renderer.extension()));
    fs::write(&path, &document)?;
    info!(path = %path.display(), bytes = document.len(), "wrote layout");
    Ok(path)
}

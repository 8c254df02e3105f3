//! Two-set Venn diagram model.
//!
//! A [`VennDiagram`] turns two set sizes and their overlap into circle
//! radii and a center distance (solved with [`venn_solver`]), and derives a
//! canvas [`Layout`] from that geometry for a renderer to draw.

pub mod config;
pub mod diagram;
pub mod layout;
pub mod sizes;

pub use config::{DEFAULT_ERROR_SCALE, DEFAULT_MARGIN, DEFAULT_PIXEL_SPAN, DiagramConfig, LayoutConfig};
pub use diagram::{CircleGeometry, DiagramError, VennDiagram};
pub use layout::{CircleLayout, Layout};
pub use sizes::{SetSizes, Tolerance};

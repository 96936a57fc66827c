#![forbid(unsafe_code)]

//! SVG writer for laid-out topology graphs.
//!
//! Positions from `topoviz-layout` are scaled uniformly into the canvas, then edges, vertices
//! and labels are written as three `<g>` groups in that paint order.

mod fit;
pub mod style;
pub mod svg;

pub use style::VertexShape;
pub use svg::{SvgRenderOptions, render_svg};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{what} has {got} entries, expected one per {per} ({expected})")]
    LengthMismatch {
        what: &'static str,
        per: &'static str,
        got: usize,
        expected: usize,
    },
    #[error("invalid color `{color}`")]
    InvalidColor { color: String },
    #[error("no layout position for vertex {vertex}")]
    MissingPosition { vertex: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#![forbid(unsafe_code)]

//! `topoviz` turns a GraphML network topology into a drawing.
//!
//! The pipeline reads the topology with `topoviz-graphml`, computes a Large Graph Layout with
//! `topoviz-layout` and writes an SVG with `topoviz-render`. Vertices are labelled with their
//! id minus its first character, so `n12` is drawn as `12`.
//!
//! # Features
//!
//! - `raster`: enable PNG/JPG/PDF output via pure-Rust SVG rasterization/conversion

pub mod args;
pub mod labels;
pub mod render;

pub use args::{DEFAULT_SVG_FILE, DEFAULT_TOPOLOGY_FILE, ResolvedPaths, resolve_paths};
pub use labels::{LabelSource, derive_labels, vertex_label};
pub use render::{
    OutputFormat, PipelineOptions, RasterOptions, render_file, render_graph, render_topology,
};

pub use topoviz_graphml as graphml;
pub use topoviz_layout as layout;
pub use topoviz_render as svg;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graphml(#[from] topoviz_graphml::Error),
    #[error(transparent)]
    Layout(#[from] topoviz_layout::Error),
    #[error(transparent)]
    Render(#[from] topoviz_render::Error),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("vertex {index} has no string `id` attribute")]
    MalformedVertex { index: usize },
    #[error("edge {index} references a vertex that does not exist")]
    DanglingEdge { index: usize },
    #[error("{format} output requires the `raster` feature")]
    RasterUnavailable { format: &'static str },
    #[cfg(feature = "raster")]
    #[error(transparent)]
    Raster(#[from] render::raster::RasterError),
}

pub type Result<T> = std::result::Result<T, Error>;

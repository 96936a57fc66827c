use crate::labels::{LabelSource, labels_for};
use crate::{Error, Result};
use std::path::Path;
use topoviz_graphml::Graph;
use topoviz_layout::Algorithm;
use topoviz_render::SvgRenderOptions;

#[cfg(feature = "raster")]
pub mod raster;

/// Output encoding, chosen from the output file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl OutputFormat {
    /// Unknown or missing extensions map to [`OutputFormat::Svg`].
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("png") => Self::Png,
            Some("jpg" | "jpeg") => Self::Jpeg,
            Some("pdf") => Self::Pdf,
            _ => Self::Svg,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Svg => "SVG",
            Self::Png => "PNG",
            Self::Jpeg => "JPG",
            Self::Pdf => "PDF",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RasterOptions {
    pub scale: f32,
    /// Pixmap fill. JPG output falls back to white and requires an opaque color.
    pub background: Option<String>,
    pub jpeg_quality: u8,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
            jpeg_quality: 90,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub layout: Algorithm,
    pub labels: LabelSource,
    /// Explicit `labels` here take precedence over [`PipelineOptions::labels`].
    pub svg: SvgRenderOptions,
    pub raster: RasterOptions,
}

impl Default for PipelineOptions {
    /// LGL layout on an 800x800 canvas, 14px vertices and font, labels from the vertex ids,
    /// `lightblue` vertices and `grey` edges.
    fn default() -> Self {
        Self {
            layout: Algorithm::Lgl(Default::default()),
            labels: LabelSource::StrippedId,
            svg: SvgRenderOptions::default(),
            raster: RasterOptions::default(),
        }
    }
}

/// Converts the attributed graph into the id-keyed form the layout engine works on.
fn layout_graph(graph: &Graph) -> Result<topoviz_layout::Graph> {
    let mut nodes = Vec::with_capacity(graph.vertex_count());
    for (index, v) in graph.vertices.iter().enumerate() {
        let id = v.id().ok_or(Error::MalformedVertex { index })?;
        nodes.push(topoviz_layout::Node::new(id));
    }
    let mut edges = Vec::with_capacity(graph.edge_count());
    for (index, e) in graph.edges.iter().enumerate() {
        let (Some(source), Some(target)) = (nodes.get(e.source), nodes.get(e.target)) else {
            return Err(Error::DanglingEdge { index });
        };
        edges.push(topoviz_layout::Edge::new(
            format!("e{index}"),
            source.id.clone(),
            target.id.clone(),
        ));
    }
    Ok(topoviz_layout::Graph { nodes, edges })
}

/// Lays out and renders an already loaded graph.
pub fn render_graph(graph: &Graph, options: &PipelineOptions) -> Result<String> {
    let lg = layout_graph(graph)?;
    tracing::debug!(
        layout = options.layout.name(),
        vertices = lg.nodes.len(),
        edges = lg.edges.len(),
        "computing layout"
    );
    let positions = topoviz_layout::layout(&lg, options.layout.clone())?;

    let mut svg_options = options.svg.clone();
    if svg_options.labels.is_none() {
        svg_options.labels = labels_for(graph, &options.labels)?;
    }
    Ok(topoviz_render::render_svg(graph, &positions, &svg_options)?)
}

/// GraphML text in, SVG text out.
pub fn render_topology(text: &str, options: &PipelineOptions) -> Result<String> {
    let graph = topoviz_graphml::read_graphml(text)?;
    render_graph(&graph, options)
}

/// Reads the topology at `input` and writes the image to `output`, replacing any existing
/// file. The encoding follows the output extension (see [`OutputFormat::from_path`]).
pub fn render_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &PipelineOptions,
) -> Result<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let graph = topoviz_graphml::read_graphml_file(input)?;
    let svg = render_graph(&graph, options)?;

    let format = OutputFormat::from_path(output);
    let bytes = encode(svg, format, &options.raster)?;
    std::fs::write(output, &bytes).map_err(|source| Error::Io {
        path: output.display().to_string(),
        source,
    })?;

    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        format = format.name(),
        bytes = bytes.len(),
        "wrote topology image"
    );
    Ok(())
}

#[cfg(feature = "raster")]
fn encode(svg: String, format: OutputFormat, raster: &RasterOptions) -> Result<Vec<u8>> {
    Ok(match format {
        OutputFormat::Svg => svg.into_bytes(),
        OutputFormat::Png => raster::svg_to_png(&svg, raster)?,
        OutputFormat::Jpeg => raster::svg_to_jpeg(&svg, raster)?,
        OutputFormat::Pdf => raster::svg_to_pdf(&svg)?,
    })
}

#[cfg(not(feature = "raster"))]
fn encode(svg: String, format: OutputFormat, _raster: &RasterOptions) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Svg => Ok(svg.into_bytes()),
        other => Err(Error::RasterUnavailable {
            format: other.name(),
        }),
    }
}

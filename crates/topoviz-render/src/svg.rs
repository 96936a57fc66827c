use crate::fit::CanvasFit;
use crate::style::{VertexShape, per_entity_colors, validate_color};
use crate::{Error, Result};
use indexmap::IndexSet;
use std::fmt::Write as _;
use topoviz_graphml::Graph;
use topoviz_layout::{LayoutResult, Point};

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    pub width: f64,
    pub height: f64,
    /// Vertex radius (half the side length for squares). Also the canvas margin.
    pub vertex_size: f64,
    pub font_size: f64,
    pub font_family: String,
    /// One label per vertex. `None` draws no labels; empty strings are skipped.
    pub labels: Option<Vec<String>>,
    /// One fill color per vertex, or empty for `default_vertex_color` everywhere.
    pub vertex_colors: Vec<String>,
    pub default_vertex_color: String,
    /// One stroke color per edge, or empty for `default_edge_color` everywhere.
    pub edge_colors: Vec<String>,
    pub default_edge_color: String,
    pub edge_width: f64,
    pub vertex_shape: VertexShape,
    /// Canvas fill. `None` leaves the background transparent.
    pub background: Option<String>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            vertex_size: 14.0,
            font_size: 14.0,
            font_family: "sans-serif".to_string(),
            labels: None,
            vertex_colors: Vec::new(),
            default_vertex_color: "lightblue".to_string(),
            edge_colors: Vec::new(),
            default_edge_color: "grey".to_string(),
            edge_width: 1.0,
            vertex_shape: VertexShape::Circle,
            background: None,
        }
    }
}

/// Writes `graph` as an SVG document, placing vertex `i` at the layout position of its `id`.
pub fn render_svg(graph: &Graph, layout: &LayoutResult, options: &SvgRenderOptions) -> Result<String> {
    let vertex_colors = per_entity_colors(
        &options.vertex_colors,
        &options.default_vertex_color,
        graph.vertex_count(),
        "vertex_colors",
        "vertex",
    )?;
    let edge_colors = per_entity_colors(
        &options.edge_colors,
        &options.default_edge_color,
        graph.edge_count(),
        "edge_colors",
        "edge",
    )?;
    if let Some(labels) = &options.labels {
        if labels.len() != graph.vertex_count() {
            return Err(Error::LengthMismatch {
                what: "labels",
                per: "vertex",
                got: labels.len(),
                expected: graph.vertex_count(),
            });
        }
    }
    if let Some(bg) = &options.background {
        validate_color(bg)?;
    }

    let mut raw: Vec<Point> = Vec::with_capacity(graph.vertex_count());
    for (idx, v) in graph.vertices.iter().enumerate() {
        let p = v
            .id()
            .and_then(|id| layout.get(id))
            .ok_or_else(|| Error::MissingPosition {
                vertex: v.id().map(str::to_string).unwrap_or_else(|| format!("#{idx}")),
            })?;
        raw.push(p);
    }

    let radius = options.vertex_size.max(0.0);
    let fit = CanvasFit::new(&raw, options.width, options.height, radius);
    let pos: Vec<Point> = raw.into_iter().map(|p| fit.apply(p)).collect();
    if let Some(end) = graph
        .edges
        .iter()
        .flat_map(|e| [e.source, e.target])
        .find(|&end| end >= pos.len())
    {
        return Err(Error::MissingPosition {
            vertex: format!("#{end}"),
        });
    }

    let mut out = String::new();
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#);
    out.push('\n');
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt(options.width),
        h = fmt(options.height),
    );

    // One arrow marker per distinct color used by a directed edge.
    let mut marker_colors: IndexSet<&str> = IndexSet::new();
    for (e, color) in graph.edges.iter().zip(&edge_colors) {
        if e.directed && !e.is_loop() {
            marker_colors.insert(*color);
        }
    }
    if !marker_colors.is_empty() {
        out.push_str("<defs>\n");
        for (i, color) in marker_colors.iter().enumerate() {
            let _ = writeln!(
                &mut out,
                r#"<marker id="arrow-{i}" viewBox="0 0 10 10" refX="10" refY="5" markerWidth="6" markerHeight="6" orient="auto"><path d="M0,0L10,5L0,10z" fill="{}"/></marker>"#,
                escape_attr(color)
            );
        }
        out.push_str("</defs>\n");
    }

    if let Some(bg) = &options.background {
        let _ = writeln!(
            &mut out,
            r#"<rect class="background" x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            fmt(options.width),
            fmt(options.height),
            escape_attr(bg)
        );
    }

    out.push_str("<g class=\"edges\">\n");
    let inset = match options.vertex_shape {
        VertexShape::None => 0.0,
        VertexShape::Circle | VertexShape::Square => radius,
    };
    for (e, color) in graph.edges.iter().zip(&edge_colors) {
        let a = pos[e.source];
        let b = pos[e.target];
        if e.is_loop() {
            let loop_r = radius.max(4.0);
            let _ = writeln!(
                &mut out,
                r#"<ellipse class="loop" cx="{}" cy="{}" rx="{r}" ry="{r}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                fmt(a.x + loop_r * std::f64::consts::FRAC_1_SQRT_2),
                fmt(a.y - loop_r * std::f64::consts::FRAC_1_SQRT_2),
                escape_attr(color),
                fmt(options.edge_width),
                r = fmt(loop_r),
            );
            continue;
        }
        let end = if e.directed { shorten(a, b, inset) } else { b };
        let _ = write!(
            &mut out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}""#,
            fmt(a.x),
            fmt(a.y),
            fmt(end.x),
            fmt(end.y),
            escape_attr(color),
            fmt(options.edge_width),
        );
        if e.directed {
            if let Some(marker) = marker_colors.get_index_of(*color) {
                let _ = write!(&mut out, r#" marker-end="url(#arrow-{marker})""#);
            }
        }
        out.push_str("/>\n");
    }
    out.push_str("</g>\n");

    out.push_str("<g class=\"vertices\">\n");
    for (p, color) in pos.iter().zip(&vertex_colors) {
        match options.vertex_shape {
            VertexShape::Circle => {
                let _ = writeln!(
                    &mut out,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="black" stroke-width="1"/>"#,
                    fmt(p.x),
                    fmt(p.y),
                    fmt(radius),
                    escape_attr(color),
                );
            }
            VertexShape::Square => {
                let _ = writeln!(
                    &mut out,
                    r#"<rect x="{}" y="{}" width="{s}" height="{s}" fill="{}" stroke="black" stroke-width="1"/>"#,
                    fmt(p.x - radius),
                    fmt(p.y - radius),
                    escape_attr(color),
                    s = fmt(2.0 * radius),
                );
            }
            VertexShape::None => {}
        }
    }
    out.push_str("</g>\n");

    if let Some(labels) = &options.labels {
        out.push_str("<g class=\"labels\">\n");
        for (p, label) in pos.iter().zip(labels) {
            if label.is_empty() {
                continue;
            }
            let _ = writeln!(
                &mut out,
                r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-family="{}" font-size="{}">{}</text>"#,
                fmt(p.x),
                fmt(p.y),
                escape_attr(&options.font_family),
                fmt(options.font_size),
                escape_xml(label),
            );
        }
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        bytes = out.len(),
        "rendered svg"
    );
    Ok(out)
}

/// Moves `to` back towards `from` by `by`, so arrow heads stop at the vertex border.
fn shorten(from: Point, to: Point, by: f64) -> Point {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= by || len == 0.0 {
        return to;
    }
    let t = (len - by) / len;
    Point {
        x: from.x + dx * t,
        y: from.y + dy * t,
    }
}

fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let mut s = format!("{:.3}", (v * 1000.0).round() / 1000.0);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    escape_xml(text)
}

use crate::{Error, Result};
use topoviz_graphml::{AttrValue, Graph};

/// Where vertex labels come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LabelSource {
    /// The `id` attribute without its first character (`n3` -> `3`).
    #[default]
    StrippedId,
    /// Any vertex attribute, printed as-is. Vertices lacking it get no label.
    Attribute(String),
    None,
}

/// Drops the first character of `id`.
pub fn vertex_label(id: &str) -> &str {
    let mut chars = id.chars();
    chars.next();
    chars.as_str()
}

/// One [`vertex_label`] per vertex, in vertex order.
pub fn derive_labels(graph: &Graph) -> Result<Vec<String>> {
    graph
        .vertices
        .iter()
        .enumerate()
        .map(|(index, v)| match v.attr("id") {
            Some(AttrValue::String(id)) => Ok(vertex_label(id).to_string()),
            _ => Err(Error::MalformedVertex { index }),
        })
        .collect()
}

pub(crate) fn labels_for(graph: &Graph, source: &LabelSource) -> Result<Option<Vec<String>>> {
    match source {
        LabelSource::StrippedId => derive_labels(graph).map(Some),
        LabelSource::Attribute(name) => Ok(Some(
            graph
                .vertices
                .iter()
                .map(|v| v.attr(name).map(ToString::to_string).unwrap_or_default())
                .collect(),
        )),
        LabelSource::None => Ok(None),
    }
}

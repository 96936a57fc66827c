use crate::error::{Error, Result};
use crate::model::{AttrValue, Attributes, Graph};
use rustc_hash::FxHashMap;
use std::path::Path;

pub const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyDomain {
    Node,
    Edge,
    Graph,
    All,
}

impl KeyDomain {
    fn parse(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim) {
            None | Some("all") => Some(Self::All),
            Some("node") => Some(Self::Node),
            Some("edge") => Some(Self::Edge),
            Some("graph") => Some(Self::Graph),
            Some(_) => None,
        }
    }

    fn covers(self, other: KeyDomain) -> bool {
        self == KeyDomain::All || self == other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrType {
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
}

impl AttrType {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "boolean" => Some(Self::Boolean),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "string" => Some(Self::String),
            _ => None,
        }
    }

    /// Value used for entities that carry no `<data>` for a declared key without a default.
    fn missing_value(self) -> AttrValue {
        match self {
            Self::Boolean => AttrValue::Boolean(false),
            Self::String => AttrValue::String(String::new()),
            Self::Int | Self::Long | Self::Float | Self::Double => AttrValue::Numeric(f64::NAN),
        }
    }

    fn convert(self, raw: &str, key: &str) -> AttrValue {
        match self {
            Self::String => AttrValue::String(raw.to_string()),
            Self::Boolean => match parse_bool(raw) {
                Some(v) => AttrValue::Boolean(v),
                None => {
                    tracing::warn!(key, value = raw, "invalid boolean value, using false");
                    AttrValue::Boolean(false)
                }
            },
            Self::Int | Self::Long | Self::Float | Self::Double => {
                match raw.trim().parse::<f64>() {
                    Ok(v) => AttrValue::Numeric(v),
                    Err(_) => {
                        tracing::warn!(key, value = raw, "invalid numeric value, using NaN");
                        AttrValue::Numeric(f64::NAN)
                    }
                }
            }
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone)]
struct KeyDecl {
    name: String,
    ty: AttrType,
    domain: KeyDomain,
    default: Option<AttrValue>,
}

#[derive(Debug, Default)]
struct KeyTable {
    by_id: FxHashMap<String, usize>,
    decls: Vec<KeyDecl>,
}

impl KeyTable {
    fn insert(&mut self, id: String, decl: KeyDecl) {
        if let Some(&idx) = self.by_id.get(&id) {
            tracing::warn!(key = %id, "duplicate <key> declaration, later one wins");
            self.decls[idx] = decl;
        } else {
            self.by_id.insert(id, self.decls.len());
            self.decls.push(decl);
        }
    }

    fn lookup(&self, id: &str, domain: KeyDomain) -> Option<&KeyDecl> {
        let decl = &self.decls[*self.by_id.get(id)?];
        decl.domain.covers(domain).then_some(decl)
    }

    /// Initial attribute map for an entity of `domain`: every declared key with its default.
    fn defaults_for(&self, domain: KeyDomain) -> Attributes {
        let mut attrs = Attributes::new();
        for decl in &self.decls {
            if !decl.domain.covers(domain) {
                continue;
            }
            if decl.name == "id" && matches!(domain, KeyDomain::Node | KeyDomain::Edge) {
                continue;
            }
            let value = decl
                .default
                .clone()
                .unwrap_or_else(|| decl.ty.missing_value());
            attrs.insert(decl.name.clone(), value);
        }
        attrs
    }
}

fn is_graphml_element(node: roxmltree::Node<'_, '_>, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && matches!(node.tag_name().namespace(), None | Some(GRAPHML_NS))
}

fn child_elements<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = roxmltree::Node<'a, 'input>> {
    node.children().filter(move |c| is_graphml_element(*c, name))
}

/// Concatenated text content, including CDATA sections.
fn text_content(node: roxmltree::Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn read_keys(root: roxmltree::Node<'_, '_>) -> Result<KeyTable> {
    let mut table = KeyTable::default();
    for key in child_elements(root, "key") {
        let Some(id) = key.attribute("id") else {
            return Err(Error::MissingAttribute {
                element: "key",
                attribute: "id",
            });
        };
        let Some(domain) = KeyDomain::parse(key.attribute("for")) else {
            tracing::warn!(
                key = id,
                domain = ?key.attribute("for"),
                "unsupported key domain, ignoring"
            );
            continue;
        };
        let ty = match key.attribute("attr.type") {
            None => AttrType::String,
            Some(raw) => AttrType::parse(raw).ok_or_else(|| Error::UnknownAttrType {
                key: id.to_string(),
                attr_type: raw.to_string(),
            })?,
        };
        let name = key.attribute("attr.name").unwrap_or(id).to_string();
        let default = child_elements(key, "default")
            .next()
            .map(|d| ty.convert(&text_content(d), id));

        table.insert(
            id.to_string(),
            KeyDecl {
                name,
                ty,
                domain,
                default,
            },
        );
    }
    Ok(table)
}

fn apply_data(
    element: roxmltree::Node<'_, '_>,
    keys: &KeyTable,
    domain: KeyDomain,
    attrs: &mut Attributes,
) -> Result<()> {
    for data in child_elements(element, "data") {
        let Some(key_id) = data.attribute("key") else {
            return Err(Error::MissingAttribute {
                element: "data",
                attribute: "key",
            });
        };
        let Some(decl) = keys.lookup(key_id, domain) else {
            tracing::warn!(key = key_id, ?domain, "undeclared <data> key, ignoring");
            continue;
        };
        if decl.name == "id" && matches!(domain, KeyDomain::Node | KeyDomain::Edge) {
            tracing::warn!(
                key = key_id,
                ?domain,
                "attribute named `id` shadows the element id, ignoring"
            );
            continue;
        }
        let value = decl.ty.convert(&text_content(data), key_id);
        attrs.insert(decl.name.clone(), value);
    }
    Ok(())
}

fn warn_unsupported(graph: roxmltree::Node<'_, '_>) {
    for node in graph.descendants().filter(|n| n.is_element()) {
        if is_graphml_element(node, "hyperedge") {
            tracing::warn!("<hyperedge> is not supported, ignoring");
        } else if is_graphml_element(node, "port") {
            tracing::warn!("<port> is not supported, ignoring");
        } else if is_graphml_element(node, "graph") && node != graph {
            tracing::warn!("nested <graph> is not supported, ignoring");
        }
    }
}

/// Parses a GraphML document into a [`Graph`].
///
/// Only the first `<graph>` element is read.
pub fn read_graphml(text: &str) -> Result<Graph> {
    // GraphML files commonly carry a `<!DOCTYPE graphml SYSTEM "...graphml.dtd">` header.
    let doc = roxmltree::Document::parse_with_options(
        text,
        roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        },
    )?;
    let root = doc.root_element();
    if !is_graphml_element(root, "graphml") {
        return Err(Error::NotGraphml {
            found: root.tag_name().name().to_string(),
        });
    }

    let keys = read_keys(root)?;

    let mut graphs = child_elements(root, "graph");
    let graph_el = graphs.next().ok_or(Error::NoGraph)?;
    if graphs.next().is_some() {
        tracing::warn!("document has more than one <graph>, only the first is read");
    }
    warn_unsupported(graph_el);

    let directed = graph_el
        .attribute("edgedefault")
        .map(|v| v.trim() != "undirected")
        .unwrap_or(true);
    let mut graph = Graph::new(directed);

    graph.attributes = keys.defaults_for(KeyDomain::Graph);
    apply_data(graph_el, &keys, KeyDomain::Graph, &mut graph.attributes)?;

    let mut index: FxHashMap<String, usize> = FxHashMap::default();

    // Nodes first, so edges may reference nodes declared later in the document.
    for node in child_elements(graph_el, "node") {
        let Some(id) = node.attribute("id") else {
            return Err(Error::MissingAttribute {
                element: "node",
                attribute: "id",
            });
        };
        if index.contains_key(id) {
            return Err(Error::DuplicateNode { id: id.to_string() });
        }
        let mut attrs = Attributes::new();
        attrs.insert("id".to_string(), AttrValue::String(id.to_string()));
        attrs.extend(keys.defaults_for(KeyDomain::Node));
        apply_data(node, &keys, KeyDomain::Node, &mut attrs)?;
        let idx = graph.add_vertex(attrs);
        index.insert(id.to_string(), idx);
    }

    for edge in child_elements(graph_el, "edge") {
        let source = edge.attribute("source").ok_or(Error::MissingAttribute {
            element: "edge",
            attribute: "source",
        })?;
        let target = edge.attribute("target").ok_or(Error::MissingAttribute {
            element: "edge",
            attribute: "target",
        })?;

        let source = vertex_index(&mut graph, &mut index, &keys, source);
        let target = vertex_index(&mut graph, &mut index, &keys, target);

        let edge_directed = match edge.attribute("directed") {
            None => directed,
            Some(raw) => parse_bool(raw).unwrap_or_else(|| {
                tracing::warn!(value = raw, "invalid edge `directed` value, using edgedefault");
                directed
            }),
        };

        let mut attrs = Attributes::new();
        if let Some(id) = edge.attribute("id") {
            attrs.insert("id".to_string(), AttrValue::String(id.to_string()));
        }
        for (name, value) in keys.defaults_for(KeyDomain::Edge) {
            attrs.entry(name).or_insert(value);
        }
        apply_data(edge, &keys, KeyDomain::Edge, &mut attrs)?;
        graph.add_edge(source, target, edge_directed, attrs);
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        directed = graph.directed,
        "read GraphML graph"
    );
    Ok(graph)
}

fn vertex_index(
    graph: &mut Graph,
    index: &mut FxHashMap<String, usize>,
    keys: &KeyTable,
    id: &str,
) -> usize {
    if let Some(&idx) = index.get(id) {
        return idx;
    }
    tracing::warn!(node = id, "edge references undeclared node, creating it");
    let mut attrs = Attributes::new();
    attrs.insert("id".to_string(), AttrValue::String(id.to_string()));
    attrs.extend(keys.defaults_for(KeyDomain::Node));
    let idx = graph.add_vertex(attrs);
    index.insert(id.to_string(), idx);
    idx
}

pub fn read_graphml_file(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_graphml(&text)
}

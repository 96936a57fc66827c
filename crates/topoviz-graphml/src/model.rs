use indexmap::IndexMap;
use std::fmt;

/// A typed GraphML attribute value.
///
/// GraphML distinguishes `int`, `long`, `float` and `double`; they all collapse into
/// [`AttrValue::Numeric`] here.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    String(String),
    Boolean(bool),
    Numeric(f64),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Numeric(v) => write!(f, "{v}"),
        }
    }
}

/// Attribute map in declaration order.
pub type Attributes = IndexMap<String, AttrValue>;

#[derive(Debug, Clone, Default)]
pub struct Vertex {
    pub attributes: Attributes,
}

impl Vertex {
    /// The GraphML `<node id="...">` value.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").and_then(AttrValue::as_str)
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    /// Index into [`Graph::vertices`].
    pub source: usize,
    /// Index into [`Graph::vertices`].
    pub target: usize,
    pub directed: bool,
    pub attributes: Attributes,
}

impl Edge {
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// The `edgedefault` of the source document.
    pub directed: bool,
    pub attributes: Attributes,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Default::default()
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_vertex(&mut self, attributes: Attributes) -> usize {
        self.vertices.push(Vertex { attributes });
        self.vertices.len() - 1
    }

    /// Appends an edge. Panics if either endpoint is out of range.
    pub fn add_edge(
        &mut self,
        source: usize,
        target: usize,
        directed: bool,
        attributes: Attributes,
    ) -> usize {
        assert!(
            source < self.vertices.len() && target < self.vertices.len(),
            "edge endpoint out of range"
        );
        self.edges.push(Edge {
            source,
            target,
            directed,
            attributes,
        });
        self.edges.len() - 1
    }

    pub fn vertex_attr(&self, idx: usize, name: &str) -> Option<&AttrValue> {
        self.vertices.get(idx).and_then(|v| v.attr(name))
    }

    pub fn find_vertex(&self, id: &str) -> Option<usize> {
        self.vertices.iter().position(|v| v.id() == Some(id))
    }

    /// Vertices adjacent to `idx`, ignoring edge direction. Parallel edges yield repeated
    /// entries; self-loops are skipped.
    pub fn neighbors(&self, idx: usize) -> Vec<usize> {
        let mut out = Vec::new();
        for e in &self.edges {
            if e.is_loop() {
                continue;
            }
            if e.source == idx {
                out.push(e.target);
            } else if e.target == idx {
                out.push(e.source);
            }
        }
        out
    }

    pub fn edge_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().map(|e| (e.source, e.target))
    }
}

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn validate(&self) -> Result<()> {
        let mut node_exists: std::collections::BTreeSet<&str> = std::collections::BTreeSet::new();
        for n in &self.nodes {
            if !node_exists.insert(n.id.as_str()) {
                return Err(Error::DuplicateNode {
                    node_id: n.id.clone(),
                });
            }
        }
        for e in &self.edges {
            if !node_exists.contains(e.source.as_str()) || !node_exists.contains(e.target.as_str())
            {
                return Err(Error::MissingEndpoint {
                    edge_id: e.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Undirected adjacency by node index. Self-loops are dropped; parallel edges are kept.
    ///
    /// Callers must have validated the graph first.
    pub(crate) fn adjacency(&self) -> (FxHashMap<&str, usize>, Vec<Vec<usize>>) {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        index.reserve(self.nodes.len());
        for (idx, n) in self.nodes.iter().enumerate() {
            index.insert(n.id.as_str(), idx);
        }
        let mut adj = vec![Vec::new(); self.nodes.len()];
        for e in &self.edges {
            let (Some(&a), Some(&b)) = (index.get(e.source.as_str()), index.get(e.target.as_str()))
            else {
                continue;
            };
            if a == b {
                continue;
            }
            adj[a].push(b);
            adj[b].push(a);
        }
        (index, adj)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    pub positions: std::collections::BTreeMap<String, Point>,
}

impl LayoutResult {
    pub(crate) fn from_coords(graph: &Graph, x: &[f64], y: &[f64]) -> Self {
        let mut positions = std::collections::BTreeMap::new();
        for (idx, n) in graph.nodes.iter().enumerate() {
            positions.insert(n.id.clone(), Point { x: x[idx], y: y[idx] });
        }
        Self { positions }
    }

    pub fn get(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }
}

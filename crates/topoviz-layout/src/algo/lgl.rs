//! Large Graph Layout.
//!
//! Vertices are added one BFS layer at a time along a spanning forest. Each new vertex starts
//! next to its BFS parent, then a grid-accelerated Fruchterman-Reingold simulation settles every
//! vertex placed so far before the next layer is added.

use super::force::{ForceModel, Sim};
use super::{LglOptions, temperature};
use crate::error::{Error, Result};
use crate::graph::{Graph, LayoutResult};
use crate::rng::XorShift64Star;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
struct LglParams {
    max_iter: usize,
    max_delta: f64,
    area: f64,
    cool_exp: f64,
    repulse_rad: f64,
    cell_size: f64,
}

impl LglParams {
    fn resolve(opts: &LglOptions, n: usize) -> Self {
        let n = n as f64;
        let positive = |v: Option<f64>| v.filter(|v| v.is_finite() && *v > 0.0);
        let area = positive(opts.area).unwrap_or(n * n);
        Self {
            max_iter: opts.max_iter,
            max_delta: positive(opts.max_delta).unwrap_or(n),
            area,
            cool_exp: opts.cool_exp,
            repulse_rad: positive(opts.repulse_rad).unwrap_or(area * n),
            cell_size: positive(opts.cell_size).unwrap_or(area.sqrt().sqrt()),
        }
    }
}

/// BFS spanning forest. The first tree grows from `root`; every other component is rooted at
/// its lowest-index vertex. All roots sit in layer 0.
#[derive(Debug, Clone)]
struct BfsForest {
    parent: Vec<Option<usize>>,
    layers: Vec<Vec<usize>>,
}

impl BfsForest {
    fn build(adj: &[Vec<usize>], root: usize) -> Self {
        let n = adj.len();
        let mut depth: Vec<Option<usize>> = vec![None; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut layers: Vec<Vec<usize>> = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::new();

        for start in std::iter::once(root).chain(0..n) {
            if depth[start].is_some() {
                continue;
            }
            depth[start] = Some(0);
            queue.push_back(start);
            while let Some(v) = queue.pop_front() {
                let d = depth[v].unwrap_or(0);
                if layers.len() <= d {
                    layers.resize_with(d + 1, Vec::new);
                }
                layers[d].push(v);
                for &u in &adj[v] {
                    if depth[u].is_none() {
                        depth[u] = Some(d + 1);
                        parent[u] = Some(v);
                        queue.push_back(u);
                    }
                }
            }
        }

        Self { parent, layers }
    }
}

pub fn layout(graph: &Graph, opts: &LglOptions) -> Result<LayoutResult> {
    graph.validate()?;

    let n = graph.nodes.len();
    if n == 0 {
        return Ok(LayoutResult::default());
    }

    let (index, adj) = graph.adjacency();
    let params = LglParams::resolve(opts, n);
    let mut rng = XorShift64Star::new(opts.random_seed);

    let root = match opts.root.as_deref() {
        Some(id) => *index.get(id).ok_or_else(|| Error::UnknownRoot {
            node_id: id.to_string(),
        })?,
        None => rng.next_usize(n),
    };
    let forest = BfsForest::build(&adj, root);

    let mut edges: Vec<(usize, usize)> = Vec::with_capacity(graph.edges.len());
    for e in &graph.edges {
        let (Some(&a), Some(&b)) = (index.get(e.source.as_str()), index.get(e.target.as_str()))
        else {
            continue;
        };
        if a != b {
            edges.push((a, b));
        }
    }

    let model = ForceModel {
        k: (params.area / n as f64).sqrt(),
        repulse_rad: params.repulse_rad,
    };
    let mut sim = Sim::new(vec![0.0; n], vec![0.0; n], edges, model);
    let mut active = vec![false; n];
    let spread = params.area.sqrt() / 2.0;

    for (depth, layer) in forest.layers.iter().enumerate() {
        for &v in layer {
            match forest.parent[v] {
                Some(p) => {
                    let angle = rng.next_f64_unit() * std::f64::consts::TAU;
                    let r = model.k * (0.5 + 0.5 * rng.next_f64_unit());
                    sim.x[v] = sim.x[p] + r * angle.cos();
                    sim.y[v] = sim.y[p] + r * angle.sin();
                }
                None if v == root => {
                    sim.x[v] = 0.0;
                    sim.y[v] = 0.0;
                }
                None => {
                    sim.x[v] = rng.next_f64_signed() * spread;
                    sim.y[v] = rng.next_f64_signed() * spread;
                }
            }
            active[v] = true;
        }

        for i in 0..params.max_iter {
            let temp = temperature(params.max_delta, i, params.max_iter, params.cool_exp);
            sim.step_grid(temp, &active, params.cell_size);
        }
        tracing::trace!(depth, added = layer.len(), "lgl layer settled");
    }

    tracing::debug!(
        nodes = n,
        edges = graph.edges.len(),
        layers = forest.layers.len(),
        root = %graph.nodes[root].id,
        "lgl layout done"
    );
    Ok(LayoutResult::from_coords(graph, &sim.x, &sim.y))
}

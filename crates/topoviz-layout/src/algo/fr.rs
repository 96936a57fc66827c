use super::force::{ForceModel, Sim};
use super::{FrOptions, temperature};
use crate::error::Result;
use crate::graph::{Graph, LayoutResult};
use crate::rng::XorShift64Star;

pub fn layout(graph: &Graph, opts: &FrOptions) -> Result<LayoutResult> {
    graph.validate()?;

    let n = graph.nodes.len();
    if n == 0 {
        return Ok(LayoutResult::default());
    }

    let (index, _) = graph.adjacency();
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

    let nf = n as f64;
    let area = nf * nf;
    let model = ForceModel {
        k: (area / nf).sqrt(),
        repulse_rad: area * nf,
    };

    // Random start inside a square of side sqrt(n), centered on the origin.
    let half = nf.sqrt() / 2.0;
    let mut rng = XorShift64Star::new(opts.random_seed);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        x.push(rng.next_f64_signed() * half);
        y.push(rng.next_f64_signed() * half);
    }

    let mut sim = Sim::new(x, y, edges, model);
    for i in 0..opts.max_iter {
        sim.step_all_pairs(temperature(nf, i, opts.max_iter, opts.cool_exp));
    }

    tracing::debug!(nodes = n, iterations = opts.max_iter, "fr layout done");
    Ok(LayoutResult::from_coords(graph, &sim.x, &sim.y))
}

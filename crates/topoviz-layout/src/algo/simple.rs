//! Non-iterative layouts.

use crate::error::Result;
use crate::graph::{Graph, LayoutResult};
use crate::rng::XorShift64Star;

pub fn circle(graph: &Graph) -> Result<LayoutResult> {
    graph.validate()?;
    let n = graph.nodes.len();
    let step = std::f64::consts::TAU / n.max(1) as f64;
    let (x, y): (Vec<f64>, Vec<f64>) = (0..n)
        .map(|i| {
            let angle = step * i as f64;
            (angle.cos(), angle.sin())
        })
        .unzip();
    Ok(LayoutResult::from_coords(graph, &x, &y))
}

pub fn grid(graph: &Graph) -> Result<LayoutResult> {
    graph.validate()?;
    let n = graph.nodes.len();
    let width = (n as f64).sqrt().ceil().max(1.0) as usize;
    let (x, y): (Vec<f64>, Vec<f64>) = (0..n)
        .map(|i| ((i % width) as f64, (i / width) as f64))
        .unzip();
    Ok(LayoutResult::from_coords(graph, &x, &y))
}

pub fn random(graph: &Graph, random_seed: u64) -> Result<LayoutResult> {
    graph.validate()?;
    let mut rng = XorShift64Star::new(random_seed);
    let n = graph.nodes.len();
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        x.push(rng.next_f64_signed());
        y.push(rng.next_f64_signed());
    }
    Ok(LayoutResult::from_coords(graph, &x, &y))
}

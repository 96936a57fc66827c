#![forbid(unsafe_code)]

//! Headless 2D graph layout algorithms.
//!
//! Layouts are computed over string node ids and return one position per node. Every random
//! draw comes from a seeded generator, so a given graph and seed always produce the same result.

pub mod algo;
pub mod error;
pub mod graph;
mod rng;

pub use algo::{Algorithm, FrOptions, LglOptions};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, LayoutResult, Node, Point};

/// Headless layout entry point.
pub fn layout(graph: &Graph, algorithm: Algorithm) -> Result<LayoutResult> {
    match algorithm {
        Algorithm::Lgl(opts) => algo::lgl::layout(graph, &opts),
        Algorithm::FruchtermanReingold(opts) => algo::fr::layout(graph, &opts),
        Algorithm::Circle => algo::simple::circle(graph),
        Algorithm::Grid => algo::simple::grid(graph),
        Algorithm::Random { random_seed } => algo::simple::random(graph, random_seed),
        auto @ Algorithm::Auto { .. } => layout(graph, auto.resolve(graph.nodes.len())),
    }
}

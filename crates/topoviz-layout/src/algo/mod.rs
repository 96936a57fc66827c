pub mod fr;
pub mod lgl;
pub mod simple;

mod force;

use crate::error::{Error, Result};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub enum Algorithm {
    /// Large Graph Layout: layered force-directed placement along a BFS spanning forest.
    Lgl(LglOptions),
    /// Fruchterman-Reingold over all vertex pairs.
    FruchtermanReingold(FrOptions),
    /// Vertices evenly spaced on the unit circle, in input order.
    Circle,
    /// Row-major square grid with unit spacing.
    Grid,
    /// Uniform positions in `[-1, 1]^2`.
    Random { random_seed: u64 },
    /// `fr` for small graphs, `lgl` from [`Algorithm::AUTO_LGL_THRESHOLD`] vertices up.
    Auto { random_seed: u64 },
}

impl Algorithm {
    pub const AUTO_LGL_THRESHOLD: usize = 1000;

    pub fn name(&self) -> &'static str {
        match self {
            Self::Lgl(_) => "lgl",
            Self::FruchtermanReingold(_) => "fr",
            Self::Circle => "circle",
            Self::Grid => "grid",
            Self::Random { .. } => "random",
            Self::Auto { .. } => "auto",
        }
    }

    /// Replaces the RNG seed of seeded algorithms; deterministic ones are returned unchanged.
    pub fn with_seed(self, seed: u64) -> Self {
        match self {
            Self::Lgl(opts) => Self::Lgl(LglOptions {
                random_seed: seed,
                ..opts
            }),
            Self::FruchtermanReingold(opts) => Self::FruchtermanReingold(FrOptions {
                random_seed: seed,
                ..opts
            }),
            Self::Random { .. } => Self::Random { random_seed: seed },
            Self::Auto { .. } => Self::Auto { random_seed: seed },
            other => other,
        }
    }

    /// Resolves `Auto` against the graph size.
    pub(crate) fn resolve(self, node_count: usize) -> Self {
        match self {
            Self::Auto { random_seed } if node_count < Self::AUTO_LGL_THRESHOLD => {
                Self::FruchtermanReingold(FrOptions {
                    random_seed,
                    ..Default::default()
                })
            }
            Self::Auto { random_seed } => Self::Lgl(LglOptions {
                random_seed,
                ..Default::default()
            }),
            other => other,
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lgl" | "large_graph" => Ok(Self::Lgl(LglOptions::default())),
            "fr" | "fruchterman_reingold" => {
                Ok(Self::FruchtermanReingold(FrOptions::default()))
            }
            "circle" | "circular" => Ok(Self::Circle),
            "grid" => Ok(Self::Grid),
            "random" => Ok(Self::Random { random_seed: 0 }),
            "auto" => Ok(Self::Auto { random_seed: 0 }),
            _ => Err(Error::UnknownLayout {
                name: s.to_string(),
            }),
        }
    }
}

/// Options for [`Algorithm::Lgl`]. `None` fields are derived from the vertex count `n`.
#[derive(Debug, Clone)]
pub struct LglOptions {
    pub random_seed: u64,
    /// Id of the BFS root. When unset, the root is drawn from the seeded RNG.
    pub root: Option<String>,
    /// Simulation steps per layer.
    pub max_iter: usize,
    /// Maximum displacement per step at the start of each layer (default `n`).
    pub max_delta: Option<f64>,
    /// Area of the layout square (default `n^2`).
    pub area: Option<f64>,
    /// Temperature cooling exponent.
    pub cool_exp: f64,
    /// Distance at which repulsion cancels attraction (default `area * n`).
    pub repulse_rad: Option<f64>,
    /// Repulsion grid cell size and cut-off distance (default `sqrt(sqrt(area))`).
    pub cell_size: Option<f64>,
}

impl Default for LglOptions {
    fn default() -> Self {
        Self {
            random_seed: 0,
            root: None,
            max_iter: 150,
            max_delta: None,
            area: None,
            cool_exp: 1.5,
            repulse_rad: None,
            cell_size: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrOptions {
    pub random_seed: u64,
    pub max_iter: usize,
    pub cool_exp: f64,
}

impl Default for FrOptions {
    fn default() -> Self {
        Self {
            random_seed: 0,
            max_iter: 500,
            cool_exp: 1.5,
        }
    }
}

/// Temperature of step `i` out of `max_iter`: `max_delta * ((max_iter - i) / max_iter)^cool_exp`.
pub(crate) fn temperature(max_delta: f64, i: usize, max_iter: usize, cool_exp: f64) -> f64 {
    if max_iter == 0 {
        return 0.0;
    }
    let remaining = max_iter.saturating_sub(i) as f64 / max_iter as f64;
    max_delta * remaining.powf(cool_exp)
}

use rustc_hash::FxHashMap;

/// Fruchterman-Reingold force model shared by `fr` and `lgl`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ForceModel {
    /// Spring constant, `sqrt(area / n)`.
    pub(crate) k: f64,
    /// Distance at which vertex-vertex repulsion changes sign.
    pub(crate) repulse_rad: f64,
}

impl ForceModel {
    fn repulsion(&self, d: f64) -> f64 {
        self.k * self.k * (1.0 / d - d * d / self.repulse_rad)
    }

    fn attraction(&self, d: f64) -> f64 {
        d * d / self.k
    }
}

/// Mutable simulation state over vertex indices.
#[derive(Debug, Clone)]
pub(crate) struct Sim {
    pub(crate) x: Vec<f64>,
    pub(crate) y: Vec<f64>,
    disp_x: Vec<f64>,
    disp_y: Vec<f64>,
    edges: Vec<(usize, usize)>,
    pub(crate) model: ForceModel,
}

impl Sim {
    pub(crate) fn new(x: Vec<f64>, y: Vec<f64>, edges: Vec<(usize, usize)>, model: ForceModel) -> Self {
        debug_assert_eq!(x.len(), y.len());
        let n = x.len();
        Self {
            x,
            y,
            disp_x: vec![0.0; n],
            disp_y: vec![0.0; n],
            edges,
            model,
        }
    }

    fn reset_displacements(&mut self) {
        self.disp_x.iter_mut().for_each(|d| *d = 0.0);
        self.disp_y.iter_mut().for_each(|d| *d = 0.0);
    }

    fn repulse(&mut self, v: usize, u: usize) {
        let dx = self.x[v] - self.x[u];
        let dy = self.y[v] - self.y[u];
        let d = (dx * dx + dy * dy).sqrt();
        if d == 0.0 {
            return;
        }
        let f = self.model.repulsion(d);
        let (fx, fy) = (dx / d * f, dy / d * f);
        self.disp_x[v] += fx;
        self.disp_y[v] += fy;
        self.disp_x[u] -= fx;
        self.disp_y[u] -= fy;
    }

    fn attract(&mut self, active: Option<&[bool]>) {
        for idx in 0..self.edges.len() {
            let (v, u) = self.edges[idx];
            if let Some(active) = active {
                if !(active[v] && active[u]) {
                    continue;
                }
            }
            let dx = self.x[v] - self.x[u];
            let dy = self.y[v] - self.y[u];
            let d = (dx * dx + dy * dy).sqrt();
            if d == 0.0 {
                continue;
            }
            let f = self.model.attraction(d);
            let (fx, fy) = (dx / d * f, dy / d * f);
            self.disp_x[v] -= fx;
            self.disp_y[v] -= fy;
            self.disp_x[u] += fx;
            self.disp_y[u] += fy;
        }
    }

    /// Moves every (active) vertex along its displacement, capped at `temp`.
    fn displace(&mut self, temp: f64, active: Option<&[bool]>) {
        for v in 0..self.x.len() {
            if active.is_some_and(|a| !a[v]) {
                continue;
            }
            let (mut dx, mut dy) = (self.disp_x[v], self.disp_y[v]);
            let len = (dx * dx + dy * dy).sqrt();
            if !len.is_finite() {
                continue;
            }
            if len > temp {
                let scale = temp / len;
                dx *= scale;
                dy *= scale;
            }
            self.x[v] += dx;
            self.y[v] += dy;
        }
    }

    /// One step with repulsion between every vertex pair.
    pub(crate) fn step_all_pairs(&mut self, temp: f64) {
        self.reset_displacements();
        let n = self.x.len();
        for v in 0..n {
            for u in (v + 1)..n {
                self.repulse(v, u);
            }
        }
        self.attract(None);
        self.displace(temp, None);
    }

    /// One step over the `active` vertices, with repulsion limited to pairs closer than
    /// `cell_size` (found through a uniform grid).
    pub(crate) fn step_grid(&mut self, temp: f64, active: &[bool], cell_size: f64) {
        self.reset_displacements();
        let grid = RepulsionGrid::build(&self.x, &self.y, active, cell_size);
        let cutoff2 = cell_size * cell_size;
        let mut near: Vec<usize> = Vec::new();
        for v in 0..self.x.len() {
            if !active[v] {
                continue;
            }
            near.clear();
            grid.neighbors_after(v, self.x[v], self.y[v], &mut near);
            for &u in &near {
                let dx = self.x[v] - self.x[u];
                let dy = self.y[v] - self.y[u];
                if dx * dx + dy * dy < cutoff2 {
                    self.repulse(v, u);
                }
            }
        }
        self.attract(Some(active));
        self.displace(temp, Some(active));
    }
}

/// Sparse uniform grid of vertex indices keyed by cell coordinates.
#[derive(Debug)]
struct RepulsionGrid {
    cell_size: f64,
    cells: FxHashMap<(i64, i64), Vec<usize>>,
}

impl RepulsionGrid {
    fn cell_of(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x / self.cell_size).floor() as i64,
            (y / self.cell_size).floor() as i64,
        )
    }

    fn build(x: &[f64], y: &[f64], active: &[bool], cell_size: f64) -> Self {
        let mut grid = Self {
            cell_size: if cell_size.is_finite() && cell_size > 0.0 {
                cell_size
            } else {
                1.0
            },
            cells: FxHashMap::default(),
        };
        for v in 0..x.len() {
            if !active[v] {
                continue;
            }
            let cell = grid.cell_of(x[v], y[v]);
            grid.cells.entry(cell).or_default().push(v);
        }
        grid
    }

    /// Collects vertices with a larger index than `v` in the 3x3 cell block around `(x, y)`,
    /// so each pair is visited once.
    fn neighbors_after(&self, v: usize, x: f64, y: f64, out: &mut Vec<usize>) {
        let (cx, cy) = self.cell_of(x, y);
        for gx in (cx - 1)..=(cx + 1) {
            for gy in (cy - 1)..=(cy + 1) {
                let Some(cell) = self.cells.get(&(gx, gy)) else {
                    continue;
                };
                out.extend(cell.iter().copied().filter(|&u| u > v));
            }
        }
    }
}

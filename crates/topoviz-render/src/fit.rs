use topoviz_layout::Point;

/// Uniform scale + translation mapping layout coordinates into the canvas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CanvasFit {
    scale: f64,
    mid_x: f64,
    mid_y: f64,
    center_x: f64,
    center_y: f64,
}

impl CanvasFit {
    /// Fits `points` into `[margin, width - margin] x [margin, height - margin]`, preserving the
    /// aspect ratio and centering the result. Zero extents (one point, collinear points) are
    /// centered on that axis.
    pub(crate) fn new(points: &[Point], width: f64, height: f64, margin: f64) -> Self {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in points.iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        if !(min_x.is_finite() && max_x.is_finite()) {
            min_x = 0.0;
            max_x = 0.0;
            min_y = 0.0;
            max_y = 0.0;
        }

        let avail_w = (width - 2.0 * margin).max(0.0);
        let avail_h = (height - 2.0 * margin).max(0.0);
        let span_x = max_x - min_x;
        let span_y = max_y - min_y;

        let sx = (span_x > 0.0).then(|| avail_w / span_x);
        let sy = (span_y > 0.0).then(|| avail_h / span_y);
        let scale = match (sx, sy) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => 1.0,
        };

        Self {
            scale,
            mid_x: (min_x + max_x) / 2.0,
            mid_y: (min_y + max_y) / 2.0,
            center_x: width / 2.0,
            center_y: height / 2.0,
        }
    }

    pub(crate) fn apply(&self, p: Point) -> Point {
        Point {
            x: self.center_x + (p.x - self.mid_x) * self.scale,
            y: self.center_y + (p.y - self.mid_y) * self.scale,
        }
    }
}

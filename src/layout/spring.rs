use rand::Rng;

use crate::data::model::WeightedGraph;

use super::{random, Layout, LayoutEngine, LayoutError, LayoutMode, Point};

pub const DEFAULT_ITERATIONS: usize = 10;

/// Distances are clamped to this to keep forces bounded.
const MIN_DISTANCE: f64 = 0.01;

/// Fruchterman-Reingold relaxation with a small, fixed pass budget.
///
/// Starts from random positions, treats every edge as an attracting spring
/// of unit strength and every node pair as mutually repelling, cools the
/// step size linearly, then rescales the result into `[-1, 1]²`.
#[derive(Debug, Clone, Copy)]
pub struct SpringLayout {
    iterations: usize,
    seed: Option<u64>,
}

impl SpringLayout {
    pub fn new(iterations: usize, seed: Option<u64>) -> Self {
        Self { iterations, seed }
    }
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS, None)
    }
}

impl LayoutEngine for SpringLayout {
    fn mode(&self) -> LayoutMode {
        LayoutMode::SpringFallback
    }

    fn compute(&self, graph: &WeightedGraph) -> Result<Layout, LayoutError> {
        let n = graph.node_count();
        if n == 0 {
            return Ok(Layout::new());
        }
        if n == 1 {
            return Ok(graph.nodes_in_order().map(|id| (id, [0.0, 0.0])).collect());
        }

        let springs: Vec<(usize, usize)> = graph
            .edges()
            .filter(|(u, v, _)| u != v)
            .filter_map(|(u, v, _)| Some((graph.node_index(u)?, graph.node_index(v)?)))
            .collect();

        let mut rng = random::rng(self.seed);
        let mut pos: Vec<Point> = (0..n).map(|_| [rng.gen(), rng.gen()]).collect();
        relax(&mut pos, &springs, self.iterations);
        rescale(&mut pos);

        Ok(graph.nodes_in_order().zip(pos).collect())
    }
}

fn relax(pos: &mut [Point], springs: &[(usize, usize)], iterations: usize) {
    let n = pos.len();
    let k = (1.0 / n as f64).sqrt();
    let k_squared = k * k;
    let mut temperature = 0.1 * span(pos);
    let cooling = temperature / (iterations as f64 + 1.0);

    for _ in 0..iterations {
        let mut disp = vec![[0.0_f64; 2]; n];

        // Repulsion between all pairs.
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy, dist) = delta(pos[i], pos[j]);
                let force = k_squared / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                disp[i][0] += fx;
                disp[i][1] += fy;
                disp[j][0] -= fx;
                disp[j][1] -= fy;
            }
        }

        // Attraction along edges.
        for &(i, j) in springs {
            let (dx, dy, dist) = delta(pos[i], pos[j]);
            let force = dist * dist / k;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            disp[i][0] -= fx;
            disp[i][1] -= fy;
            disp[j][0] += fx;
            disp[j][1] += fy;
        }

        for (p, d) in pos.iter_mut().zip(&disp) {
            let length = (d[0] * d[0] + d[1] * d[1]).sqrt().max(MIN_DISTANCE);
            p[0] += d[0] * temperature / length;
            p[1] += d[1] * temperature / length;
        }
        temperature -= cooling;
    }
}

fn delta(a: Point, b: Point) -> (f64, f64, f64) {
    let (dx, dy) = (a[0] - b[0], a[1] - b[1]);
    (dx, dy, (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE))
}

/// Largest extent along either axis.
fn span(pos: &[Point]) -> f64 {
    let extent = |axis: usize| {
        let (lo, hi) = pos.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p[axis]), hi.max(p[axis]))
        });
        hi - lo
    };
    extent(0).max(extent(1))
}

/// Centre on the mean and scale so the largest coordinate magnitude is 1.
fn rescale(pos: &mut [Point]) {
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p[0]).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p[1]).sum::<f64>() / n;
    for p in pos.iter_mut() {
        p[0] -= cx;
        p[1] -= cy;
    }
    let lim = pos
        .iter()
        .flat_map(|p| [p[0].abs(), p[1].abs()])
        .fold(0.0_f64, f64::max);
    if lim > 0.0 {
        for p in pos.iter_mut() {
            p[0] /= lim;
            p[1] /= lim;
        }
    }
}

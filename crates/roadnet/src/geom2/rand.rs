//! Random road graphs (seeded, reproducible).
//!
//! Model
//! - Draw `nodes` points uniformly in `bounds`, dropping draws closer than
//!   `min_spacing` to an earlier point (bounded retries).
//! - Connect consecutive points into a chain, then add `chords` extra segments
//!   between random distinct nodes.
//! - The same `(cfg, seed)` always yields the same graph.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Bounds2, Point, Segment};
use crate::graph::Graph;

/// Random graph configuration.
#[derive(Clone, Copy, Debug)]
pub struct GraphCfg {
    pub nodes: usize,
    pub chords: usize,
    pub bounds: Bounds2,
    pub min_spacing: f64,
    /// Rejection attempts per node before giving up on spacing.
    pub max_attempts: usize,
}

impl Default for GraphCfg {
    fn default() -> Self {
        Self {
            nodes: 8,
            chords: 2,
            bounds: Bounds2::square(500.0),
            min_spacing: 50.0,
            max_attempts: 32,
        }
    }
}

/// Draw a random road graph from `cfg` and `seed`.
pub fn draw_graph(cfg: &GraphCfg, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = draw_points(cfg, &mut rng);
    let mut segments = Vec::with_capacity(points.len() + cfg.chords);
    for w in points.windows(2) {
        segments.push(Segment::new(w[0], w[1]));
    }
    if points.len() >= 3 {
        for _ in 0..cfg.chords {
            let i = rng.gen_range(0..points.len());
            let mut j = rng.gen_range(0..points.len() - 1);
            if j >= i {
                j += 1;
            }
            segments.push(Segment::new(points[i], points[j]));
        }
    }
    Graph::new(points, segments)
}

fn draw_points<R: Rng>(cfg: &GraphCfg, rng: &mut R) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(cfg.nodes);
    let b = cfg.bounds;
    for _ in 0..cfg.nodes {
        let mut accepted = None;
        for _ in 0..cfg.max_attempts.max(1) {
            let p = Point::new(
                rng.gen_range(b.min.x..=b.max.x),
                rng.gen_range(b.min.y..=b.max.y),
            );
            if out.iter().all(|q| (p - q).norm() >= cfg.min_spacing) {
                accepted = Some(p);
                break;
            }
        }
        if let Some(p) = accepted {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_graph() {
        let cfg = GraphCfg::default();
        let a = draw_graph(&cfg, 7);
        let b = draw_graph(&cfg, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn chain_plus_chords_and_spacing() {
        let cfg = GraphCfg {
            nodes: 6,
            chords: 3,
            min_spacing: 10.0,
            ..GraphCfg::default()
        };
        let g = draw_graph(&cfg, 11);
        let n = g.points.len();
        assert!(n >= 2);
        assert_eq!(g.segments.len(), (n - 1) + if n >= 3 { 3 } else { 0 });
        for (i, p) in g.points.iter().enumerate() {
            for q in &g.points[i + 1..] {
                assert!((p - q).norm() >= 10.0);
            }
        }
        // Chords never join a point to itself.
        assert!(g.segments.iter().all(|s| s.p1 != s.p2));
    }
}

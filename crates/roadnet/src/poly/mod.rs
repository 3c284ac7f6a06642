//! Closed polygons and the boundary merge algebra.
//!
//! Purpose
//! - `Polygon`: ordered vertex ring with derived edges and containment queries.
//! - `merge`: pairwise `break_pair`, the all-pairs `multi_break`, and `union`.
//!
//! Conventions
//! - Containment is strict: points within `eps_on` of the boundary are outside.
//!   Two polygons that only touch therefore never remove each other's edges.
//! - Orientation is whatever the vertex order gives; the interior side of an
//!   edge is derived from the signed area.

pub mod merge;

pub use merge::{
    break_pair, multi_break, multi_break_cancellable, union, union_cancellable, Broken, Merged,
};

use crate::error::GeometryError;
use crate::geom2::{signed_area2, Bounds2, GeomCfg, Point, Segment};

/// Closed polygon: `vertices[k] → vertices[k+1]`, wrapping at the end.
///
/// Invariants:
/// - At least 3 vertices.
/// - Immutable after construction; merge results live outside the polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    bounds: Bounds2,
    ccw: bool,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }
        let bounds = Bounds2::from_points(&vertices).ok_or(GeometryError::TooFewVertices {
            count: vertices.len(),
        })?;
        let ccw = signed_area2(&vertices) >= 0.0;
        Ok(Self {
            vertices,
            bounds,
            ccw,
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn bounds(&self) -> Bounds2 {
        self.bounds
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.ccw
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        signed_area2(&self.vertices).abs() * 0.5
    }

    /// Edges in vertex order, closing edge last.
    pub fn edges(&self) -> Vec<Segment> {
        let n = self.vertices.len();
        (0..n)
            .map(|k| Segment::new(self.vertices[k], self.vertices[(k + 1) % n]))
            .collect()
    }

    /// Whether `p` lies within `eps_on` of some edge.
    pub fn on_boundary(&self, p: Point, cfg: &GeomCfg) -> bool {
        if !self.bounds.contains(p, cfg.eps_on) {
            return false;
        }
        let n = self.vertices.len();
        (0..n).any(|k| {
            Segment::new(self.vertices[k], self.vertices[(k + 1) % n]).distance_to_point(p)
                <= cfg.eps_on
        })
    }

    /// Strict interior test (ray casting); boundary points are outside.
    pub fn contains_point(&self, p: Point, cfg: &GeomCfg) -> bool {
        if !self.bounds.contains(p, 0.0) || self.on_boundary(p, cfg) {
            return false;
        }
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (vi, vj) = (self.vertices[i], self.vertices[j]);
            if (vi.y > p.y) != (vj.y > p.y) {
                let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Edge containment: the segment's midpoint is strictly inside.
    #[inline]
    pub fn contains_segment(&self, s: &Segment, cfg: &GeomCfg) -> bool {
        self.contains_point(s.midpoint(), cfg)
    }

    /// Every vertex of `self` is inside `other` or on its boundary.
    ///
    /// Exact containment for convex `other`, which envelopes always are.
    pub fn covered_by(&self, other: &Polygon, cfg: &GeomCfg) -> bool {
        self.vertices
            .iter()
            .all(|&v| other.on_boundary(v, cfg) || other.contains_point(v, cfg))
    }

    /// Point just off the midpoint of `edge`, on this polygon's interior side.
    ///
    /// `edge` must run along this polygon's boundary in vertex order (any
    /// sub-edge produced by the merge does).
    pub(crate) fn interior_probe(&self, edge: &Segment, cfg: &GeomCfg) -> Point {
        let d = edge.direction();
        let len = d.norm();
        let left = if len > 0.0 {
            Point::new(-d.y / len, d.x / len)
        } else {
            Point::zeros()
        };
        let n = if self.ccw { left } else { -left };
        edge.midpoint() + n * cfg.probe
    }
}

#[cfg(test)]
mod tests;

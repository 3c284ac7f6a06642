//! Basic 2D types and tolerances used across envelope and merge code.
//!
//! - `GeomCfg`: centralizes epsilons for determinants, segment parameters,
//!   on-boundary checks, and the side probe used for shared edges.
//! - `Segment`: unordered pair of points; edges and skeletons both use it.
//! - `Intersection`: crossing point of two segments plus its offset on the first.
//! - `Bounds2`: axis-aligned box for sampling and overlap pre-checks.

use nalgebra::Vector2;

/// Points and direction vectors share one representation.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// Values are absolute and tuned for road coordinates in the 1..1e4 range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Sine of the angle below which two segments count as parallel.
    pub eps_det: f64,
    /// Segment parameters must lie in `(eps_param, 1 - eps_param)` to cross.
    pub eps_param: f64,
    /// Distance under which a point counts as lying on a boundary.
    pub eps_on: f64,
    /// Offset of the side probe used to classify edges on another boundary.
    pub probe: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: 1e-12,
            eps_param: 1e-9,
            eps_on: 1e-7,
            probe: 1e-5,
        }
    }
}

impl GeomCfg {
    /// Coordinate equality within `eps_on`.
    #[inline]
    pub fn same_point(&self, a: Point, b: Point) -> bool {
        (a - b).norm() <= self.eps_on
    }
}

/// Line segment `p1 → p2`.
///
/// Geometrically unordered: use `same_as` for order-insensitive comparison.
/// `PartialEq` is exact and ordered, which is what determinism checks want.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.p2 - self.p1
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        (self.p1 + self.p2) * 0.5
    }

    #[inline]
    pub fn is_degenerate(&self, cfg: &GeomCfg) -> bool {
        cfg.same_point(self.p1, self.p2)
    }

    /// Same endpoints in either order.
    pub fn same_as(&self, other: &Segment, cfg: &GeomCfg) -> bool {
        (cfg.same_point(self.p1, other.p1) && cfg.same_point(self.p2, other.p2))
            || (cfg.same_point(self.p1, other.p2) && cfg.same_point(self.p2, other.p1))
    }

    /// Whether `p` is an endpoint of this segment.
    pub fn has_endpoint(&self, p: Point, cfg: &GeomCfg) -> bool {
        cfg.same_point(self.p1, p) || cfg.same_point(self.p2, p)
    }

    /// Euclidean distance from `p` to the closed segment.
    pub fn distance_to_point(&self, p: Point) -> f64 {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return (p - self.p1).norm();
        }
        let t = ((p - self.p1).dot(&d) / len2).clamp(0.0, 1.0);
        (p - (self.p1 + d * t)).norm()
    }
}

/// Axis-aligned box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Point,
    pub max: Point,
}

impl Bounds2 {
    pub fn square(half: f64) -> Self {
        Self {
            min: Point::new(-half, -half),
            max: Point::new(half, half),
        }
    }

    /// Tight box around `points`; `None` when empty.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = *points.first()?;
        let mut b = Self {
            min: first,
            max: first,
        };
        for p in &points[1..] {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
        }
        Some(b)
    }

    #[inline]
    pub fn overlaps(&self, other: &Bounds2, eps: f64) -> bool {
        self.min.x <= other.max.x + eps
            && other.min.x <= self.max.x + eps
            && self.min.y <= other.max.y + eps
            && other.min.y <= self.max.y + eps
    }

    #[inline]
    pub fn contains(&self, p: Point, eps: f64) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }
}

/// Interior crossing of two segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub point: Point,
    /// Parameter along the first segment, strictly inside `(0, 1)`.
    pub offset: f64,
}

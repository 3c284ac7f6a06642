use nalgebra::Vector2;

use super::types::{GeomCfg, Intersection, Point, Segment};
use crate::error::GeometryError;

#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

#[inline]
pub fn add(a: Point, b: Point) -> Point {
    a + b
}

#[inline]
pub fn subtract(a: Point, b: Point) -> Vector2<f64> {
    a - b
}

#[inline]
pub fn scale(v: Vector2<f64>, s: f64) -> Vector2<f64> {
    v * s
}

/// Polar angle of `v` in `(-π, π]`. The zero vector has no direction.
#[inline]
pub fn angle(v: Vector2<f64>) -> Result<f64, GeometryError> {
    if v.x == 0.0 && v.y == 0.0 {
        return Err(GeometryError::ZeroVector);
    }
    Ok(v.y.atan2(v.x))
}

/// Move `p` by `dist` along direction `theta`.
#[inline]
pub fn translate(p: Point, theta: f64, dist: f64) -> Point {
    Point::new(p.x + theta.cos() * dist, p.y + theta.sin() * dist)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn lerp2(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Interior crossing of `a` and `b`, if any.
///
/// Solves `a.p1 + t (a.p2 - a.p1) = b.p1 + u (b.p2 - b.p1)`. Both parameters
/// must lie strictly inside `(eps_param, 1 - eps_param)`, so shared endpoints
/// and T-junctions at an endpoint never count. Parallel and collinear pairs
/// (|det| <= eps_det * |a| * |b|, i.e. the sine of the angle between them is
/// below `eps_det`) report `None`.
pub fn intersect(a: &Segment, b: &Segment, cfg: &GeomCfg) -> Option<Intersection> {
    let (pa, pb, pc, pd) = (a.p1, a.p2, b.p1, b.p2);
    let t_top = (pd.x - pc.x) * (pa.y - pc.y) - (pd.y - pc.y) * (pa.x - pc.x);
    let u_top = (pc.y - pa.y) * (pa.x - pb.x) - (pc.x - pa.x) * (pa.y - pb.y);
    let bottom = (pd.y - pc.y) * (pb.x - pa.x) - (pd.x - pc.x) * (pb.y - pa.y);
    if bottom.abs() <= cfg.eps_det * a.length() * b.length() {
        return None;
    }
    let t = t_top / bottom;
    let u = u_top / bottom;
    let lo = cfg.eps_param;
    let hi = 1.0 - cfg.eps_param;
    if t > lo && t < hi && u > lo && u < hi {
        Some(Intersection {
            point: lerp2(pa, pb, t),
            offset: t,
        })
    } else {
        None
    }
}

/// Twice the signed area of a closed vertex ring (positive for CCW).
pub fn signed_area2(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let mut acc = 0.0;
    for k in 0..n {
        let p = vertices[k];
        let q = vertices[(k + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    acc
}

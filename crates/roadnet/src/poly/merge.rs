//! Boundary merge algebra: break, multi-break, union.
//!
//! All functions are pure. Polygons are never modified; each call returns new
//! kept-edge lists, so the caller owns the only copy of merge state.
//!
//! Edge removal rule for an edge `e` of polygon `k` against polygon `m`:
//! - midpoint strictly inside `m` → removed;
//! - midpoint on `m`'s boundary with `m`'s interior on the same side as `k`'s
//!   (a duplicated boundary) → removed when `k` lies inside or on `m` and not
//!   the other way round; if neither or both cover the other, removed only
//!   when `k > m`, so exactly one copy survives;
//! - otherwise kept (outside, or touching with interiors on opposite sides).
//!
//! Cutting always works on the original edges. Every pair contributes cut
//! points (interior crossings, endpoints of collinear overlapping edges) to
//! both polygons; once all pairs are done each edge is split at its sorted
//! cuts and every sub-edge is classified against every other polygon. A
//! sub-edge is then wholly inside, wholly outside, or wholly shared for each
//! other polygon. A single touching point never splits anything.

use tracing::{debug, trace};

use super::Polygon;
use crate::cancel::CancelToken;
use crate::error::MergeError;
use crate::geom2::{intersect, GeomCfg, Point, Segment};

/// Cut points along one edge: `(parameter, point)`, unsorted.
type EdgeCuts = Vec<(f64, Point)>;

/// Result of `break_pair`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Broken {
    /// Kept edges of the first polygon.
    pub a: Vec<Segment>,
    /// Kept edges of the second polygon.
    pub b: Vec<Segment>,
    /// Crossing points, in discovery order.
    pub intersections: Vec<Point>,
}

/// Result of `multi_break`: kept edges per input polygon, in input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Merged {
    pub kept: Vec<Vec<Segment>>,
    pub intersections: Vec<Point>,
}

impl Merged {
    /// All kept edges, polygon by polygon.
    pub fn flatten(self) -> Vec<Segment> {
        self.kept.into_iter().flatten().collect()
    }

    pub fn edge_count(&self) -> usize {
        self.kept.iter().map(Vec::len).sum()
    }
}

/// Pairwise break of two polygons on their full edge sets.
///
/// `a` counts as the earlier polygon: if the two coincide, `b` loses its edges.
pub fn break_pair(a: &Polygon, b: &Polygon, cfg: &GeomCfg) -> Broken {
    let (ea, eb) = (a.edges(), b.edges());
    let mut ca = vec![EdgeCuts::new(); ea.len()];
    let mut cb = vec![EdgeCuts::new(); eb.len()];
    let mut intersections = Vec::new();
    collect_cuts((&ea[..], &mut ca[..]), (&eb[..], &mut cb[..]), cfg, &mut intersections);

    let mut ka = cut_edges(&ea, ca);
    let mut kb = cut_edges(&eb, cb);
    ka.retain(|e| !is_removed_by(e, (0, a), (1, b), cfg));
    kb.retain(|e| !is_removed_by(e, (1, b), (0, a), cfg));
    Broken {
        a: ka,
        b: kb,
        intersections,
    }
}

/// Break every pair, then drop edges interior to any other polygon.
pub fn multi_break(polys: &[Polygon], cfg: &GeomCfg) -> Merged {
    match multi_break_cancellable(polys, cfg, &CancelToken::new()) {
        Ok(m) => m,
        // A fresh token is never cancelled.
        Err(MergeError::Cancelled { .. }) => unreachable!("fresh cancel token"),
    }
}

/// `multi_break` that stops with `MergeError::Cancelled` once `cancel` is set.
///
/// The flag is polled before each pair and before classifying each polygon.
pub fn multi_break_cancellable(
    polys: &[Polygon],
    cfg: &GeomCfg,
    cancel: &CancelToken,
) -> Result<Merged, MergeError> {
    let n = polys.len();
    let pairs_total = n * n.saturating_sub(1) / 2;
    let edges: Vec<Vec<Segment>> = polys.iter().map(Polygon::edges).collect();
    let mut cuts: Vec<Vec<EdgeCuts>> = edges
        .iter()
        .map(|row| vec![EdgeCuts::new(); row.len()])
        .collect();
    let mut intersections = Vec::new();

    let mut pairs_done = 0usize;
    for i in 0..n {
        for j in (i + 1)..n {
            if cancel.is_cancelled() {
                return Err(MergeError::Cancelled {
                    pairs_done,
                    pairs_total,
                });
            }
            pairs_done += 1;
            if !polys[i].bounds().overlaps(&polys[j].bounds(), cfg.eps_on) {
                continue;
            }
            let (lo, hi) = cuts.split_at_mut(j);
            let before = intersections.len();
            collect_cuts(
                (&edges[i][..], &mut lo[i][..]),
                (&edges[j][..], &mut hi[0][..]),
                cfg,
                &mut intersections,
            );
            trace!(i, j, hits = intersections.len() - before, "break");
        }
    }

    let mut kept = Vec::with_capacity(n);
    for (k, (row, row_cuts)) in edges.iter().zip(cuts).enumerate() {
        if cancel.is_cancelled() {
            return Err(MergeError::Cancelled {
                pairs_done,
                pairs_total,
            });
        }
        let mut pieces = cut_edges(row, row_cuts);
        pieces.retain(|e| {
            !(0..n).any(|m| m != k && is_removed_by(e, (k, &polys[k]), (m, &polys[m]), cfg))
        });
        kept.push(pieces);
    }

    let merged = Merged {
        kept,
        intersections,
    };
    debug!(
        polygons = n,
        pairs = pairs_total,
        intersections = merged.intersections.len(),
        kept = merged.edge_count(),
        "multi_break"
    );
    Ok(merged)
}

/// `multi_break` flattened into one boundary list.
pub fn union(polys: &[Polygon], cfg: &GeomCfg) -> Vec<Segment> {
    multi_break(polys, cfg).flatten()
}

/// Cancellable `union`.
pub fn union_cancellable(
    polys: &[Polygon],
    cfg: &GeomCfg,
    cancel: &CancelToken,
) -> Result<Vec<Segment>, MergeError> {
    Ok(multi_break_cancellable(polys, cfg, cancel)?.flatten())
}

/// Record the cut points two edge rings induce on each other.
///
/// Crossings cut both edges at the same point and are pushed to `hits`.
/// Collinear overlaps cut each edge at the other's endpoints.
fn collect_cuts(
    a: (&[Segment], &mut [EdgeCuts]),
    b: (&[Segment], &mut [EdgeCuts]),
    cfg: &GeomCfg,
    hits: &mut Vec<Point>,
) {
    let (ea, ca) = a;
    let (eb, cb) = b;
    for (ia, sa) in ea.iter().enumerate() {
        for (ib, sb) in eb.iter().enumerate() {
            if let Some(hit) = intersect(sa, sb, cfg) {
                push_cut(&mut ca[ia], hit.offset, hit.point, cfg);
                push_cut(&mut cb[ib], param_of(sb, hit.point), hit.point, cfg);
                hits.push(hit.point);
            } else {
                collinear_cuts(sa, sb, &mut ca[ia], cfg);
                collinear_cuts(sb, sa, &mut cb[ib], cfg);
            }
        }
    }
}

/// Cut `e` at the endpoints of `other` when both lie on `e`'s line.
fn collinear_cuts(e: &Segment, other: &Segment, cuts: &mut EdgeCuts, cfg: &GeomCfg) {
    let d = e.direction();
    let len = d.norm();
    if len == 0.0 {
        return;
    }
    let off_line = |p: Point| ((p - e.p1).perp(&d) / len).abs();
    if off_line(other.p1) > cfg.eps_on || off_line(other.p2) > cfg.eps_on {
        return;
    }
    for p in [other.p1, other.p2] {
        push_cut(cuts, param_of(e, p), p, cfg);
    }
}

fn param_of(e: &Segment, p: Point) -> f64 {
    let d = e.direction();
    (p - e.p1).dot(&d) / d.norm_squared()
}

fn push_cut(cuts: &mut EdgeCuts, t: f64, p: Point, cfg: &GeomCfg) {
    if t > cfg.eps_param
        && t < 1.0 - cfg.eps_param
        && !cuts.iter().any(|(_, q)| cfg.same_point(*q, p))
    {
        cuts.push((t, p));
    }
}

/// Split each edge at its cuts, keeping edge order and direction.
fn cut_edges(edges: &[Segment], cuts: Vec<EdgeCuts>) -> Vec<Segment> {
    let mut out = Vec::with_capacity(edges.len());
    for (e, mut at) in edges.iter().zip(cuts) {
        at.sort_by(|a, b| a.0.total_cmp(&b.0));
        let mut start = e.p1;
        for (_, p) in at {
            out.push(Segment::new(start, p));
            start = p;
        }
        out.push(Segment::new(start, e.p2));
    }
    out
}

/// Whether `edge` (of `own`) is interior to `other`.
fn is_removed_by(
    edge: &Segment,
    own: (usize, &Polygon),
    other: (usize, &Polygon),
    cfg: &GeomCfg,
) -> bool {
    let (k, own_poly) = own;
    let (m, other_poly) = other;
    let mid = edge.midpoint();
    if !other_poly.bounds().contains(mid, cfg.eps_on) {
        return false;
    }
    if !other_poly.on_boundary(mid, cfg) {
        return other_poly.contains_point(mid, cfg);
    }
    // Shared sub-edge: only a same-side duplicate can go.
    if !other_poly.contains_point(own_poly.interior_probe(edge, cfg), cfg) {
        return false;
    }
    match (own_poly.covered_by(other_poly, cfg), other_poly.covered_by(own_poly, cfg)) {
        (true, false) => true,
        (false, true) => false,
        _ => k > m,
    }
}

use super::*;
use crate::cancel::CancelToken;
use crate::error::MergeError;
use crate::geom2::intersect;
use nalgebra::vector;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    Polygon::new(vec![
        vector![x0, y0],
        vector![x1, y0],
        vector![x1, y1],
        vector![x0, y1],
    ])
    .unwrap()
}

fn assert_no_crossings(edges: &[Segment], cfg: &GeomCfg) {
    for (i, a) in edges.iter().enumerate() {
        for b in &edges[i + 1..] {
            assert!(
                intersect(a, b, cfg).is_none(),
                "kept edges cross: {a:?} x {b:?}"
            );
        }
    }
}

#[test]
fn polygon_needs_three_vertices() {
    let err = Polygon::new(vec![vector![0.0, 0.0], vector![1.0, 0.0]]).unwrap_err();
    assert_eq!(err, GeometryError::TooFewVertices { count: 2 });
}

#[test]
fn edges_close_the_ring() {
    let p = rect(0.0, 0.0, 2.0, 1.0);
    let e = p.edges();
    assert_eq!(e.len(), 4);
    assert_eq!(e[3], Segment::new(vector![0.0, 1.0], vector![0.0, 0.0]));
    assert!(p.is_ccw());
    assert!((p.area() - 2.0).abs() < 1e-12);
}

#[test]
fn containment_is_strict() {
    let cfg = GeomCfg::default();
    let p = rect(0.0, 0.0, 4.0, 4.0);
    assert!(p.contains_point(vector![2.0, 2.0], &cfg));
    assert!(!p.contains_point(vector![5.0, 2.0], &cfg));
    // Boundary and vertices are not inside.
    assert!(!p.contains_point(vector![4.0, 2.0], &cfg));
    assert!(!p.contains_point(vector![0.0, 0.0], &cfg));
    assert!(p.on_boundary(vector![2.0, 0.0], &cfg));

    let inner = Segment::new(vector![1.0, 1.0], vector![3.0, 3.0]);
    let along = Segment::new(vector![0.0, 0.0], vector![4.0, 0.0]);
    assert!(p.contains_segment(&inner, &cfg));
    assert!(!p.contains_segment(&along, &cfg));
}

#[test]
fn containment_clockwise_ring() {
    let cfg = GeomCfg::default();
    let p = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![0.0, 3.0],
        vector![3.0, 3.0],
        vector![3.0, 0.0],
    ])
    .unwrap();
    assert!(!p.is_ccw());
    assert!(p.contains_point(vector![1.0, 1.0], &cfg));
    let e = p.edges()[0];
    assert!(p.contains_point(p.interior_probe(&e, &cfg), &cfg));
}

#[test]
fn break_identical_drops_later_copy() {
    let cfg = GeomCfg::default();
    let a = rect(0.0, 0.0, 4.0, 2.0);
    let out = break_pair(&a, &a.clone(), &cfg);
    assert_eq!(out.a, a.edges());
    assert!(out.b.is_empty());
    assert!(out.intersections.is_empty());
}

#[test]
fn break_contained_polygon_loses_all_edges() {
    let cfg = GeomCfg::default();
    let outer = rect(0.0, 0.0, 10.0, 10.0);
    let inner = rect(2.0, 2.0, 4.0, 4.0);
    // Containment does not depend on argument order.
    let out = break_pair(&inner, &outer, &cfg);
    assert!(out.a.is_empty());
    assert_eq!(out.b, outer.edges());
    let out = break_pair(&outer, &inner, &cfg);
    assert_eq!(out.a, outer.edges());
    assert!(out.b.is_empty());
}

#[test]
fn break_crossing_rectangles() {
    let cfg = GeomCfg::default();
    let a = rect(0.0, -2.0, 10.0, 2.0);
    let b = rect(5.0, -1.0, 15.0, 3.0);
    let out = break_pair(&a, &b, &cfg);
    assert_eq!(out.intersections.len(), 2);
    assert!(out
        .intersections
        .iter()
        .any(|p| (p - vector![10.0, -1.0]).norm() < 1e-9));
    assert!(out
        .intersections
        .iter()
        .any(|p| (p - vector![5.0, 2.0]).norm() < 1e-9));
    assert_eq!(out.a.len(), 4);
    assert_eq!(out.b.len(), 4);
    for e in &out.a {
        assert!(!b.contains_segment(e, &cfg));
    }
    for e in &out.b {
        assert!(!a.contains_segment(e, &cfg));
    }
    // Split points are shared exactly by both sides.
    for p in &out.intersections {
        assert!(out.a.iter().any(|e| e.p1 == *p || e.p2 == *p));
        assert!(out.b.iter().any(|e| e.p1 == *p || e.p2 == *p));
    }
}

#[test]
fn touching_rectangles_keep_everything() {
    let cfg = GeomCfg::default();
    let polys = vec![rect(0.0, -2.0, 10.0, 2.0), rect(10.0, -2.0, 20.0, 2.0)];
    let merged = multi_break(&polys, &cfg);
    assert_eq!(merged.kept[0], polys[0].edges());
    assert_eq!(merged.kept[1], polys[1].edges());
    assert!(merged.intersections.is_empty());
}

#[test]
fn disjoint_polygons_are_a_no_op() {
    let cfg = GeomCfg::default();
    let polys: Vec<Polygon> = (0..5)
        .map(|k| {
            let x = k as f64 * 10.0;
            rect(x, 0.0, x + 5.0, 5.0)
        })
        .collect();
    let merged = multi_break(&polys, &cfg);
    for (p, kept) in polys.iter().zip(&merged.kept) {
        assert_eq!(kept, &p.edges());
    }
}

#[test]
fn three_way_overlap_leaves_no_interior_edges() {
    let cfg = GeomCfg::default();
    let polys = vec![
        rect(0.0, 0.0, 6.0, 2.0),
        rect(4.0, -3.0, 6.0, 5.0),
        rect(3.0, 1.0, 9.0, 4.0),
    ];
    let merged = multi_break(&polys, &cfg);
    for (k, kept) in merged.kept.iter().enumerate() {
        for e in kept {
            for (m, p) in polys.iter().enumerate() {
                if m != k {
                    assert!(!p.contains_segment(e, &cfg), "edge {e:?} of {k} inside {m}");
                }
            }
        }
    }
    let flat = union(&polys, &cfg);
    assert_eq!(flat.len(), merged.edge_count());
    assert_no_crossings(&flat, &cfg);
}

#[test]
fn union_is_flattened_multi_break() {
    let cfg = GeomCfg::default();
    let polys = vec![rect(0.0, -2.0, 10.0, 2.0), rect(5.0, -1.0, 15.0, 3.0)];
    let merged = multi_break(&polys, &cfg);
    let expected: Vec<Segment> = merged.kept.iter().flatten().copied().collect();
    assert_eq!(union(&polys, &cfg), expected);
}

#[test]
fn cancelled_merge_reports_progress() {
    let cfg = GeomCfg::default();
    let polys = vec![rect(0.0, 0.0, 1.0, 1.0), rect(0.5, 0.5, 2.0, 2.0)];
    let token = CancelToken::new();
    token.cancel();
    let err = multi_break_cancellable(&polys, &cfg, &token).unwrap_err();
    assert_eq!(
        err,
        MergeError::Cancelled {
            pairs_done: 0,
            pairs_total: 1
        }
    );
    assert!(union_cancellable(&polys, &cfg, &token).is_err());
}

/// Every kept endpoint starts exactly one kept edge and ends exactly one.
fn assert_closed_outline(edges: &[Segment], cfg: &GeomCfg) {
    for e in edges {
        let starts = edges.iter().filter(|f| cfg.same_point(f.p1, e.p2)).count();
        let ends = edges.iter().filter(|f| cfg.same_point(f.p2, e.p1)).count();
        assert_eq!((starts, ends), (1, 1), "open outline at {e:?}");
    }
}

/// Fails if a point along a kept edge lies inside some polygon, away from its boundary.
fn assert_nothing_buried(edges: &[Segment], polys: &[Polygon], cfg: &GeomCfg) {
    for e in edges {
        for s in 1..20 {
            let p = e.p1 + (e.p2 - e.p1) * (f64::from(s) / 20.0);
            for poly in polys {
                let depth = poly
                    .edges()
                    .iter()
                    .map(|f| f.distance_to_point(p))
                    .fold(f64::INFINITY, f64::min);
                assert!(
                    !(poly.contains_point(p, cfg) && depth > 1e-6),
                    "{e:?} runs {depth} deep into a polygon"
                );
            }
        }
    }
}

#[test]
fn dropped_edges_still_split_later_pairs() {
    // Rect 0's left side is interior to rect 1 after the first pair, yet it
    // still has to cut rect 2's top side.
    let cfg = GeomCfg::default();
    let polys = vec![
        rect(4.0, 2.0, 9.0, 10.0),
        rect(2.0, 1.0, 7.0, 12.0),
        rect(0.0, 0.0, 9.0, 5.0),
    ];
    let merged = multi_break(&polys, &cfg);
    let counts: Vec<usize> = merged.kept.iter().map(Vec::len).collect();
    assert_eq!(counts, vec![3, 3, 4]);
    let flat = merged.flatten();
    assert_closed_outline(&flat, &cfg);
    assert_nothing_buried(&flat, &polys, &cfg);
    assert!(flat.iter().any(|e| e.same_as(
        &Segment::new(vector![2.0, 12.0], vector![2.0, 5.0]),
        &cfg
    )));
}

#[test]
fn contained_polygon_on_the_container_side_loses_its_edges() {
    let cfg = GeomCfg::default();
    let small = rect(3.0, -2.0, 6.0, 2.0);
    let big = rect(0.0, -2.0, 10.0, 2.0);

    let first = multi_break(&[small.clone(), big.clone()], &cfg);
    assert!(first.kept[0].is_empty());
    assert_eq!(first.kept[1].len(), 8);
    assert_closed_outline(&first.kept[1], &cfg);

    let second = multi_break(&[big.clone(), small.clone()], &cfg);
    assert_eq!(second.kept[0].len(), 8);
    assert!(second.kept[1].is_empty());

    let out = break_pair(&small, &big, &cfg);
    assert!(out.a.is_empty());
    assert_eq!(out.b.len(), 8);
}

#[test]
fn collinear_overlap_keeps_one_copy_of_the_common_side() {
    let cfg = GeomCfg::default();
    let polys = vec![rect(0.0, -2.0, 10.0, 2.0), rect(5.0, -2.0, 15.0, 2.0)];
    let flat = union(&polys, &cfg);
    assert_closed_outline(&flat, &cfg);
    assert_nothing_buried(&flat, &polys, &cfg);
    let total: f64 = flat.iter().map(Segment::length).sum();
    assert!((total - 38.0).abs() < 1e-9);
}

#[test]
fn covered_by_includes_the_boundary() {
    let cfg = GeomCfg::default();
    let big = rect(0.0, 0.0, 10.0, 4.0);
    assert!(rect(0.0, 0.0, 5.0, 4.0).covered_by(&big, &cfg));
    assert!(big.covered_by(&big, &cfg));
    assert!(!rect(5.0, 0.0, 11.0, 4.0).covered_by(&big, &cfg));
}

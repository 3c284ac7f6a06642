//! JSON views of generated geometry for the renderer.
//!
//! Shapes are fixed: points are `[x, y]`, segments `[x1, y1, x2, y2]`.

use roadnet::api::{Borders, Marking, Point, Polygon, Segment, World};
use serde_json::{json, Value};

fn point(p: &Point) -> Value {
    json!([p.x, p.y])
}

fn segment(s: &Segment) -> Value {
    json!([s.p1.x, s.p1.y, s.p2.x, s.p2.y])
}

fn vertices(poly: &Polygon) -> Value {
    Value::Array(poly.vertices().iter().map(point).collect())
}

pub fn world(world: &World) -> Value {
    let envelopes: Vec<Value> = world
        .envelopes()
        .iter()
        .map(|e| {
            json!({
                "skeleton": segment(&e.skeleton),
                "width": e.width,
                "roundness": e.roundness,
                "vertices": vertices(&e.poly),
            })
        })
        .collect();
    let (policy, borders) = match world.borders() {
        Borders::PerEnvelope(rows) => (
            "multi-break",
            Value::Array(
                rows.iter()
                    .map(|row| Value::Array(row.iter().map(segment).collect()))
                    .collect(),
            ),
        ),
        Borders::Flat(list) => ("union", Value::Array(list.iter().map(segment).collect())),
    };
    json!({
        "policy": policy,
        "envelopes": envelopes,
        "borders": borders,
        "intersections": world.intersections().iter().map(point).collect::<Vec<_>>(),
    })
}

pub fn marking(m: &Marking) -> Value {
    json!({
        "type": m.kind.name(),
        "center": point(&m.center),
        "directionVector": point(&m.direction),
        "width": m.width,
        "height": m.height,
        "support": segment(&m.support),
        "vertices": vertices(&m.poly),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadnet::api::{Graph, MarkingKind, MergePolicy, RoadParams, WorldCfg};

    fn two_roads(merge: MergePolicy) -> World {
        let graph = Graph::from_segments(vec![
            Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
            Segment::new(Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
        ]);
        let cfg = WorldCfg {
            road: RoadParams {
                width: 4.0,
                roundness: 0,
            },
            merge,
            ..WorldCfg::default()
        };
        World::build(&graph, cfg).unwrap()
    }

    #[test]
    fn per_envelope_borders_are_nested() {
        let v = world(&two_roads(MergePolicy::MultiBreak));
        assert_eq!(v["policy"], "multi-break");
        assert_eq!(v["envelopes"].as_array().unwrap().len(), 2);
        assert_eq!(v["borders"][0].as_array().unwrap().len(), 4);
        assert_eq!(v["borders"][1][0].as_array().unwrap().len(), 4);
    }

    #[test]
    fn union_borders_are_flat() {
        let v = world(&two_roads(MergePolicy::Union));
        assert_eq!(v["policy"], "union");
        assert_eq!(v["borders"].as_array().unwrap().len(), 8);
        assert!(v["intersections"].as_array().unwrap().is_empty());
    }

    #[test]
    fn marking_keeps_editor_field_names() {
        let m = Marking::for_road(
            MarkingKind::Yield,
            Point::new(1.0, 2.0),
            Point::new(1.0, 0.0),
            &RoadParams::default(),
        )
        .unwrap();
        let v = marking(&m);
        assert_eq!(v["type"], "yield");
        assert_eq!(v["directionVector"], json!([1.0, 0.0]));
        assert_eq!(v["vertices"].as_array().unwrap().len(), 4);
    }
}

//! Read-only road graph snapshot.
//!
//! The graph's own editing lives with the caller; generation only reads an
//! ordered segment list through `RoadGraph`.

use crate::geom2::{Point, Segment};

/// Ordered, read-only view of road segments.
///
/// Segment order is output order: envelopes and merged edges follow it.
pub trait RoadGraph {
    fn segments(&self) -> &[Segment];
}

/// Plain graph snapshot: points plus segments between them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    pub points: Vec<Point>,
    pub segments: Vec<Segment>,
}

impl Graph {
    pub fn new(points: Vec<Point>, segments: Vec<Segment>) -> Self {
        Self { points, segments }
    }

    /// Build from segments alone; points are the distinct endpoints in order of
    /// first appearance.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        let mut points: Vec<Point> = Vec::with_capacity(segments.len() + 1);
        for s in &segments {
            for p in [s.p1, s.p2] {
                if !points.contains(&p) {
                    points.push(p);
                }
            }
        }
        Self { points, segments }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl RoadGraph for Graph {
    fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl RoadGraph for [Segment] {
    fn segments(&self) -> &[Segment] {
        self
    }
}

impl RoadGraph for Vec<Segment> {
    fn segments(&self) -> &[Segment] {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_segments_collects_distinct_endpoints_in_order() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        let c = Point::new(10.0, 10.0);
        let g = Graph::from_segments(vec![Segment::new(a, b), Segment::new(b, c)]);
        assert_eq!(g.points, vec![a, b, c]);
        assert_eq!(g.segments().len(), 2);
    }
}

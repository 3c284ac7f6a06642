//! Lane markings: oriented rectangles built from zero-roundness envelopes.
//!
//! A marking sits at `center`, its long axis along `direction`. The support
//! segment spans `height` along that axis and the envelope around it is
//! `width` wide. Road dimensions are passed in explicitly through `RoadParams`.

use std::fmt;
use std::str::FromStr;

use crate::envelope::Envelope;
use crate::error::GeometryError;
use crate::geom2::{angle, translate, Point, Segment};
use crate::poly::Polygon;
use crate::world::RoadParams;

/// Marking kinds known to the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkingKind {
    Plain,
    Zebra,
    Stop,
    Start,
    Light,
    Parking,
    Target,
    Yield,
}

/// Kind name table; the single source for parsing and display.
const KINDS: [(&str, MarkingKind); 8] = [
    ("marking", MarkingKind::Plain),
    ("zebra", MarkingKind::Zebra),
    ("stop", MarkingKind::Stop),
    ("start", MarkingKind::Start),
    ("light", MarkingKind::Light),
    ("parking", MarkingKind::Parking),
    ("target", MarkingKind::Target),
    ("yield", MarkingKind::Yield),
];

impl MarkingKind {
    pub fn all() -> impl Iterator<Item = MarkingKind> {
        KINDS.iter().map(|(_, k)| *k)
    }

    pub fn name(self) -> &'static str {
        KINDS
            .iter()
            .find(|(_, k)| *k == self)
            .map(|(n, _)| *n)
            .unwrap_or("marking")
    }

    /// `(width, height)` for a road of the given width.
    ///
    /// Zebra crossings span the full road; everything else covers one lane.
    pub fn footprint(self, road_width: f64) -> (f64, f64) {
        match self {
            MarkingKind::Zebra => (road_width, road_width / 2.0),
            _ => (road_width / 2.0, road_width / 2.0),
        }
    }
}

impl fmt::Display for MarkingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown marking kind string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown marking kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for MarkingKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KINDS
            .iter()
            .find(|(n, _)| *n == s)
            .map(|(_, k)| *k)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Oriented rectangular marking.
#[derive(Clone, Debug, PartialEq)]
pub struct Marking {
    pub kind: MarkingKind,
    pub center: Point,
    pub direction: Point,
    pub width: f64,
    pub height: f64,
    pub support: Segment,
    pub poly: Polygon,
}

impl Marking {
    pub fn new(
        kind: MarkingKind,
        center: Point,
        direction: Point,
        width: f64,
        height: f64,
    ) -> Result<Self, GeometryError> {
        if !height.is_finite() || height <= 0.0 {
            return Err(GeometryError::InvalidParameter {
                name: "height",
                value: height,
                reason: "must be finite and > 0",
            });
        }
        let theta = angle(direction)?;
        let support = Segment::new(
            translate(center, theta, height / 2.0),
            translate(center, theta, -height / 2.0),
        );
        let poly = Envelope::new(support, width, 0)?.poly;
        Ok(Self {
            kind,
            center,
            direction,
            width,
            height,
            support,
            poly,
        })
    }

    /// Marking sized for `road`.
    pub fn for_road(
        kind: MarkingKind,
        center: Point,
        direction: Point,
        road: &RoadParams,
    ) -> Result<Self, GeometryError> {
        let (width, height) = kind.footprint(road.width);
        Self::new(kind, center, direction, width, height)
    }
}

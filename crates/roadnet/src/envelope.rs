//! Capsule polygons around skeleton segments.
//!
//! An envelope is the road surface of one segment: a rectangle of the given
//! width spanning the skeleton, closed by two rounded caps. `roundness` is the
//! facet count per cap; `0` and `1` both give the plain rectangle.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::GeometryError;
use crate::geom2::{angle, translate, GeomCfg, Segment};
use crate::poly::Polygon;

/// Padded polygon around a skeleton. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    pub skeleton: Segment,
    pub width: f64,
    pub roundness: u32,
    pub poly: Polygon,
}

impl Envelope {
    /// Build the capsule around `skeleton`.
    ///
    /// Vertices: a fan of `max(1, roundness) + 1` points around `p1` from
    /// `alpha - π/2` to `alpha + π/2` (with `alpha` the direction from `p2` to
    /// `p1`), then the same fan around `p2` turned by `π`.
    pub fn new(skeleton: Segment, width: f64, roundness: u32) -> Result<Self, GeometryError> {
        Self::with_cfg(skeleton, width, roundness, &GeomCfg::default())
    }

    pub fn with_cfg(
        skeleton: Segment,
        width: f64,
        roundness: u32,
        cfg: &GeomCfg,
    ) -> Result<Self, GeometryError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GeometryError::InvalidParameter {
                name: "width",
                value: width,
                reason: "must be finite and > 0",
            });
        }
        let coords = [skeleton.p1.x, skeleton.p1.y, skeleton.p2.x, skeleton.p2.y];
        if let Some(&bad) = coords.iter().find(|c| !c.is_finite()) {
            return Err(GeometryError::InvalidParameter {
                name: "skeleton",
                value: bad,
                reason: "coordinates must be finite",
            });
        }
        if skeleton.is_degenerate(cfg) {
            return Err(GeometryError::DegenerateSegment { at: skeleton.p1 });
        }
        let Segment { p1, p2 } = skeleton;
        let radius = width / 2.0;
        let alpha = angle(p1 - p2)?;
        let facets = roundness.max(1);
        let step = PI / f64::from(facets);
        let start = alpha - FRAC_PI_2;
        let end = alpha + FRAC_PI_2 + step / 2.0;

        // Angles are recomputed from the index so the fan is exact and both
        // caps get the same count.
        let fan: Vec<f64> = (0u32..)
            .map(|k| start + f64::from(k) * step)
            .take_while(|theta| *theta <= end)
            .collect();
        let mut points = Vec::with_capacity(2 * fan.len());
        points.extend(fan.iter().map(|&theta| translate(p1, theta, radius)));
        points.extend(fan.iter().map(|&theta| translate(p2, PI + theta, radius)));

        Ok(Self {
            skeleton,
            width,
            roundness,
            poly: Polygon::new(points)?,
        })
    }

    /// Cap points per end.
    #[inline]
    pub fn points_per_cap(&self) -> usize {
        self.poly.vertices().len() / 2
    }
}

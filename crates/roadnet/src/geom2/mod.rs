//! 2D geometry primitives for road envelopes.
//!
//! Purpose
//! - Points are `nalgebra::Vector2<f64>`; segments are plain point pairs.
//! - Keep the helpers small and numerically explicit (every tolerance comes
//!   from `GeomCfg`).
//!
//! Conventions
//! - Angles are radians, measured counterclockwise from +x.
//! - `intersect` reports open-interior crossings only; touching at an endpoint
//!   is not a crossing.

pub mod rand;
mod types;
mod util;

pub use types::{Bounds2, GeomCfg, Intersection, Point, Segment};
pub use util::{
    add, angle, distance, intersect, lerp, lerp2, scale, signed_area2, subtract, translate,
};

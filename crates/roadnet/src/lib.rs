//! Road network geometry: envelopes around graph segments, merged into
//! seamless road borders.
//!
//! Pipeline
//! - `graph`: read-only segment snapshot (`RoadGraph`).
//! - `envelope`: capsule polygon per segment (width + cap roundness).
//! - `poly::merge`: `break_pair`, `multi_break`, `union` over envelope polygons.
//! - `world`: runs the pipeline for one graph snapshot.
//!
//! Everything is synchronous and deterministic: the same graph and parameters
//! always produce the same envelopes and the same edge order.

pub mod api;
pub mod cancel;
pub mod envelope;
pub mod error;
pub mod geom2;
pub mod graph;
pub mod marking;
pub mod poly;
pub mod world;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cancel::CancelToken;
    pub use crate::envelope::Envelope;
    pub use crate::error::{GeometryError, MergeError, WorldError};
    pub use crate::geom2::{GeomCfg, Point, Segment};
    pub use crate::graph::{Graph, RoadGraph};
    pub use crate::marking::{Marking, MarkingKind};
    pub use crate::poly::{break_pair, multi_break, union, Polygon};
    pub use crate::world::{Borders, MergePolicy, RoadParams, World, WorldCfg};
}

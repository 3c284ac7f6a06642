//! Curated surface for the CLI and other callers.
//!
//! Re-exports only; nothing here is stable across versions.

// Primitives
pub use crate::geom2::{
    angle, distance, intersect, lerp, lerp2, translate, Bounds2, GeomCfg, Intersection, Point,
    Segment,
};
// Random graphs
pub use crate::geom2::rand::{draw_graph, GraphCfg};
// Shapes and merging
pub use crate::envelope::Envelope;
pub use crate::marking::{Marking, MarkingKind, UnknownKind};
pub use crate::poly::{
    break_pair, multi_break, multi_break_cancellable, union, union_cancellable, Broken, Merged,
    Polygon,
};
// Orchestration
pub use crate::cancel::CancelToken;
pub use crate::error::{GeometryError, MergeError, WorldError};
pub use crate::graph::{Graph, RoadGraph};
pub use crate::world::{Borders, MergePolicy, RoadParams, World, WorldCfg};

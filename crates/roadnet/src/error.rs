//! Error types shared by geometry construction, merging, and generation.

use thiserror::Error;

use crate::geom2::Point;

/// Construction failures for primitives, polygons, and envelopes.
///
/// These are local to the single shape being built; callers decide whether to
/// skip or abort (the world aborts, see `WorldError`).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    /// Skeleton endpoints coincide, so its direction is undefined.
    #[error("degenerate segment: endpoints coincide at ({}, {})", .at.x, .at.y)]
    DegenerateSegment { at: Point },
    /// A numeric parameter is outside its valid range.
    #[error("invalid parameter `{name}`: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// `angle` of the zero vector.
    #[error("angle of a zero-length vector is undefined")]
    ZeroVector,
    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
}

/// Failures of the merge algebra. Overlap edge cases are outcomes, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("merge cancelled after {pairs_done} of {pairs_total} pairwise breaks")]
    Cancelled { pairs_done: usize, pairs_total: usize },
}

/// Failures of `World::generate`. Any failure leaves the world empty.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum WorldError {
    #[error("segment {index}: {source}")]
    Envelope {
        index: usize,
        #[source]
        source: GeometryError,
    },
    #[error(transparent)]
    Merge(#[from] MergeError),
}

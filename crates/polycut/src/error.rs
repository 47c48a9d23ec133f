//! Error type for projection and splitting.

use thiserror::Error;

/// Errors reported by the projection and splitting operations.
///
/// All of these are contract violations detected before any work is done.
/// No operation returns a partial result alongside an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CutError {
    /// The polygon has fewer than 3 vertices, or every edge has zero length.
    #[error("invalid polygon: {vertices} vertices, need at least 3 with a non-degenerate edge")]
    InvalidPolygon { vertices: usize },

    /// The cut path has fewer than 2 points.
    #[error("invalid cut path: {points} points, need at least 2")]
    InvalidCut { points: usize },

    /// A zero-length segment was passed to segment projection.
    #[error("cannot project onto a zero-length segment")]
    DegenerateSegment,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, CutError>;

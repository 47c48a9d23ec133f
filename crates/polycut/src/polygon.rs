//! Simple 2D polygons and point-to-boundary projection.

use log::trace;
use nalgebra::{Point2, Vector2};

use crate::{CutError, Result, Segment};

/// A simple closed polygon in the plane, defined by an ordered list of vertices.
///
/// The boundary is implicitly closed: an edge joins the last vertex back to the
/// first. Vertices are expected to share one winding direction, which is not
/// checked.
///
/// Edges use backward indexing: edge `i` runs from vertex `i` to vertex `i - 1`,
/// and edge `0` runs from vertex `0` to the last vertex. Edge indices returned by
/// [`Polygon::project_point`] follow this convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2<f32>>,
}

/// The closest point on a polygon's boundary to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Closest boundary point, within the closed segment of `edge`.
    pub point: Point2<f32>,
    /// Backward-indexed edge the point lies on.
    pub edge: usize,
    /// Distance from the query point to `point`.
    pub distance: f32,
}

impl Polygon {
    /// Creates a new polygon from a list of vertices.
    ///
    /// # Panics (debug builds only)
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Point2<f32>>) -> Self {
        debug_assert!(
            vertices.len() >= 3,
            "Polygon must have at least 3 vertices"
        );
        Self { vertices }
    }

    /// Creates a polygon, rejecting inputs with fewer than 3 vertices.
    pub fn try_new(vertices: Vec<Point2<f32>>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(CutError::InvalidPolygon {
                vertices: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point2<f32>] {
        &self.vertices
    }

    /// Consumes the polygon and returns its vertices.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2<f32>> {
        self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices (always false for valid polygons).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns edge `index`, running from vertex `index` to the vertex before it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn edge(&self, index: usize) -> Segment {
        let n = self.vertices.len();
        let previous = (index + n - 1) % n;
        Segment::new(self.vertices[index], self.vertices[previous])
    }

    /// Iterates over all edges in index order.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.vertices.len()).map(move |i| self.edge(i))
    }

    /// Signed area by the shoelace formula.
    ///
    /// Positive when the vertices wind counter-clockwise in a y-up frame
    /// (clockwise on a y-down screen).
    pub fn signed_area(&self) -> f32 {
        let n = self.vertices.len();
        let twice: f32 = (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.0
    }

    /// Absolute area enclosed by the polygon.
    #[inline]
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Computes the vertex centroid (average of the vertices).
    pub fn centroid(&self) -> Point2<f32> {
        let sum: Vector2<f32> = self.vertices.iter().map(|p| p.coords).sum();
        Point2::from(sum / self.vertices.len() as f32)
    }

    /// Even-odd test for whether `point` lies strictly inside the polygon.
    ///
    /// Points exactly on the boundary may be reported either way.
    pub fn contains_point(&self, point: Point2<f32>) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[j];
            if (a.y > point.y) != (b.y > point.y) {
                let x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
                if point.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Returns a copy of the polygon with every vertex shifted by `offset`.
    pub fn translated(&self, offset: Vector2<f32>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| v + offset).collect(),
        }
    }

    /// Finds the closest point on the polygon's boundary to `point`.
    ///
    /// Zero-length edges are skipped. When several edges are at the same
    /// distance the one visited last wins: a candidate replaces the current best
    /// if its distance is less than *or equal to* it. A query sitting exactly on
    /// vertex `i` is therefore reported on edge `i + 1` (or on the last edge for
    /// the last vertex), and the splitter relies on this assignment.
    ///
    /// # Errors
    /// Returns [`CutError::InvalidPolygon`] if the polygon has fewer than 3
    /// vertices or all of its edges are degenerate.
    pub fn project_point(&self, point: Point2<f32>) -> Result<Projection> {
        let invalid = CutError::InvalidPolygon {
            vertices: self.vertices.len(),
        };
        if self.vertices.len() < 3 {
            return Err(invalid);
        }

        let mut best: Option<Projection> = None;
        for (edge, segment) in self.edges().enumerate() {
            if segment.is_degenerate() {
                continue;
            }
            let candidate = segment.project_point(point)?;
            trace!(
                "edge {}: candidate {:?} at distance {}",
                edge, candidate.point, candidate.distance
            );
            // `<=` is deliberate: later edges win ties.
            if best.is_none_or(|b| candidate.distance <= b.distance) {
                best = Some(Projection {
                    point: candidate.point,
                    edge,
                    distance: candidate.distance,
                });
            }
        }

        best.ok_or(invalid)
    }
}

impl From<Polygon> for Vec<Point2<f32>> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

//! Splitting a polygon along a cut path.

use log::debug;
use nalgebra::Point2;

use crate::{CutError, Polygon, Projection, Rectangle, Result};

/// A validated cut path: at least two points.
///
/// The first and last points are snapped onto the polygon boundary before
/// splitting. Interior points are copied verbatim into both resulting loops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutPath<'a> {
    points: &'a [Point2<f32>],
}

impl<'a> CutPath<'a> {
    /// Wraps `points` as a cut path.
    ///
    /// # Errors
    /// Returns [`CutError::InvalidCut`] if fewer than 2 points are given.
    pub fn try_new(points: &'a [Point2<f32>]) -> Result<Self> {
        if points.len() < 2 {
            return Err(CutError::InvalidCut {
                points: points.len(),
            });
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &'a [Point2<f32>] {
        self.points
    }

    /// The loose start point, snapped before splitting.
    #[inline]
    pub fn start(&self) -> Point2<f32> {
        self.points[0]
    }

    /// The loose end point, snapped before splitting.
    #[inline]
    pub fn end(&self) -> Point2<f32> {
        self.points[self.points.len() - 1]
    }

    /// Points strictly between the two endpoints.
    #[inline]
    pub fn interior(&self) -> &'a [Point2<f32>] {
        &self.points[1..self.points.len() - 1]
    }
}

/// The two vertex loops produced by a split.
///
/// Loops are open: the first point is not repeated at the end. `first` runs
/// along the boundary from the snapped start to the snapped end and returns
/// through the cut in reverse; `second` runs from the snapped end back to the
/// snapped start and follows the cut forward. Which region ends up in which
/// field depends on where the cut starts, so it is not a stable identity across
/// repeated cuts.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub first: Vec<Point2<f32>>,
    pub second: Vec<Point2<f32>>,
}

impl Split {
    /// Both loops, `first` then `second`.
    pub fn loops(&self) -> [&[Point2<f32>]; 2] {
        [&self.first, &self.second]
    }

    /// Converts both loops into polygons.
    ///
    /// # Errors
    /// Returns [`CutError::InvalidPolygon`] if either loop has fewer than 3
    /// vertices, as happens for a cut along a single edge with no interior points.
    pub fn into_polygons(self) -> Result<(Polygon, Polygon)> {
        Ok((Polygon::try_new(self.first)?, Polygon::try_new(self.second)?))
    }
}

/// Trait for shapes that can be split along a cut path.
pub trait Cuttable {
    /// Splits the shape along `cut`, snapping its endpoints onto the boundary.
    ///
    /// See [`split_polygon`] for the exact construction.
    fn split(&self, cut: &[Point2<f32>]) -> Result<Split>;
}

impl Cuttable for Polygon {
    fn split(&self, cut: &[Point2<f32>]) -> Result<Split> {
        split_polygon(self, cut)
    }
}

impl Cuttable for Rectangle {
    fn split(&self, cut: &[Point2<f32>]) -> Result<Split> {
        split_polygon(&Polygon::from(self), cut)
    }
}

/// Splits `polygon` into two loops along `cut`.
///
/// Both cut endpoints are snapped with [`Polygon::project_point`]. Each snapped
/// point is inserted into the vertex list in the gap of the edge it was reported
/// on, unless it exactly equals one of that edge's vertices, in which case the
/// vertex itself marks the split. The augmented list is then cut into two arcs
/// at the start and end positions, and the interior cut points close each arc:
/// reversed for the first loop, forward for the second.
///
/// # Errors
/// - [`CutError::InvalidCut`] if `cut` has fewer than 2 points.
/// - [`CutError::InvalidPolygon`] if `polygon` cannot be projected onto.
pub fn split_polygon(polygon: &Polygon, cut: &[Point2<f32>]) -> Result<Split> {
    let cut = CutPath::try_new(cut)?;

    let start = polygon.project_point(cut.start())?;
    let end = polygon.project_point(cut.end())?;

    let (augmented, start_pos, end_pos) = augment(polygon, &start, &end);
    debug!(
        "split: start {:?} on edge {} at {}, end {:?} on edge {} at {}, {} vertices",
        start.point,
        start.edge,
        start_pos,
        end.point,
        end.edge,
        end_pos,
        augmented.len()
    );

    let (mut first, mut second) = if start_pos < end_pos {
        let first = augmented[start_pos..=end_pos].to_vec();
        let second = augmented[end_pos..]
            .iter()
            .chain(&augmented[..=start_pos])
            .copied()
            .collect();
        (first, second)
    } else {
        let first = augmented[start_pos..]
            .iter()
            .chain(&augmented[..=end_pos])
            .copied()
            .collect();
        let second = augmented[end_pos..=start_pos].to_vec();
        (first, second)
    };

    first.extend(cut.interior().iter().rev());
    second.extend(cut.interior());

    Ok(Split { first, second })
}

/// Where a snapped point sits relative to the polygon's vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Coincides with an existing vertex.
    Vertex(usize),
    /// Must be inserted into the gap of this edge.
    Edge(usize),
}

fn anchor(polygon: &Polygon, projection: &Projection) -> Anchor {
    let vertices = polygon.vertices();
    let n = vertices.len();
    let edge = projection.edge;
    let previous = (edge + n - 1) % n;

    // Exact comparison: the projection returns an endpoint verbatim when clamped.
    if projection.point == vertices[edge] {
        Anchor::Vertex(edge)
    } else if projection.point == vertices[previous] {
        Anchor::Vertex(previous)
    } else {
        Anchor::Edge(edge)
    }
}

/// Builds the vertex list with both snapped points in place, returning it with
/// the positions of the start and end points.
fn augment(
    polygon: &Polygon,
    start: &Projection,
    end: &Projection,
) -> (Vec<Point2<f32>>, usize, usize) {
    let vertices = polygon.vertices();
    let n = vertices.len();
    let start_anchor = anchor(polygon, start);
    let end_anchor = anchor(polygon, end);

    let mut augmented = Vec::with_capacity(n + 2);
    let mut start_pos = 0;
    let mut end_pos = 0;

    for (i, &vertex) in vertices.iter().enumerate() {
        if start_anchor == Anchor::Vertex(i) {
            start_pos = augmented.len();
        }
        if end_anchor == Anchor::Vertex(i) {
            end_pos = augmented.len();
        }
        augmented.push(vertex);

        // Edge `k` lies between vertex `k - 1` and vertex `k`, so its gap
        // follows vertex `i` when `k == i + 1` (edge 0 follows the last vertex).
        let gap = Anchor::Edge((i + 1) % n);
        match (start_anchor == gap, end_anchor == gap) {
            (true, true) => {
                // Both on this edge: keep traversal order along it.
                let from_start = manhattan(vertex, start.point);
                let from_end = manhattan(vertex, end.point);
                if from_start <= from_end {
                    start_pos = augmented.len();
                    augmented.push(start.point);
                    end_pos = augmented.len();
                    augmented.push(end.point);
                } else {
                    end_pos = augmented.len();
                    augmented.push(end.point);
                    start_pos = augmented.len();
                    augmented.push(start.point);
                }
            }
            (true, false) => {
                start_pos = augmented.len();
                augmented.push(start.point);
            }
            (false, true) => {
                end_pos = augmented.len();
                augmented.push(end.point);
            }
            (false, false) => {}
        }
    }

    (augmented, start_pos, end_pos)
}

#[inline]
fn manhattan(a: Point2<f32>, b: Point2<f32>) -> f32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

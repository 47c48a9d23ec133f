//! Line segments and point-to-segment projection.

use nalgebra::Point2;

use crate::{CutError, Result};

/// A line segment between two points in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2<f32>,
    end: Point2<f32>,
}

/// The closest point on a segment to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Closest point, always within the closed segment.
    pub point: Point2<f32>,
    /// Euclidean distance from the query point to `point`.
    pub distance: f32,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    #[inline]
    pub fn new(start: Point2<f32>, end: Point2<f32>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> Point2<f32> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point2<f32> {
        self.end
    }

    /// Squared length of the segment.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        (self.end - self.start).norm_squared()
    }

    /// Returns true if both endpoints are the same point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length_squared() == 0.0
    }

    /// Projects `point` onto the segment.
    ///
    /// The projection parameter `t = ((C - A) · (B - A)) / |B - A|²` is clamped
    /// to `[0, 1]`, so the result is the start point for `t < 0`, the end point
    /// for `t > 1`, and `A + t (B - A)` otherwise.
    ///
    /// # Errors
    /// Returns [`CutError::DegenerateSegment`] if the segment has zero length.
    pub fn project_point(&self, point: Point2<f32>) -> Result<SegmentProjection> {
        let direction = self.end - self.start;
        let length_squared = direction.norm_squared();
        if length_squared == 0.0 {
            return Err(CutError::DegenerateSegment);
        }

        let t = (point - self.start).dot(&direction) / length_squared;
        let projected = if t < 0.0 {
            self.start
        } else if t > 1.0 {
            self.end
        } else {
            self.start + direction * t
        };

        Ok(SegmentProjection {
            point: projected,
            distance: nalgebra::distance(&point, &projected),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn segment(a: [f32; 2], b: [f32; 2]) -> Segment {
        Segment::new(Point2::new(a[0], a[1]), Point2::new(b[0], b[1]))
    }

    #[test]
    fn projects_onto_interior() {
        let seg = segment([0.0, 0.0], [10.0, 0.0]);
        let proj = seg.project_point(Point2::new(4.0, 3.0)).unwrap();

        assert_eq!(proj.point, Point2::new(4.0, 0.0));
        assert_relative_eq!(proj.distance, 3.0);
    }

    #[test]
    fn clamps_before_start() {
        let seg = segment([0.0, 0.0], [10.0, 0.0]);
        let proj = seg.project_point(Point2::new(-3.0, 4.0)).unwrap();

        assert_eq!(proj.point, seg.start());
        assert_relative_eq!(proj.distance, 5.0);
    }

    #[test]
    fn clamps_past_end() {
        let seg = segment([0.0, 0.0], [10.0, 0.0]);
        let proj = seg.project_point(Point2::new(13.0, -4.0)).unwrap();

        assert_eq!(proj.point, seg.end());
        assert_relative_eq!(proj.distance, 5.0);
    }

    #[test]
    fn point_on_segment_has_zero_distance() {
        let seg = segment([1.0, 1.0], [5.0, 5.0]);
        let proj = seg.project_point(Point2::new(3.0, 3.0)).unwrap();

        assert_relative_eq!(proj.point, Point2::new(3.0, 3.0), epsilon = 1e-6);
        assert_relative_eq!(proj.distance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn diagonal_projection_stays_on_segment() {
        let seg = segment([0.0, 0.0], [4.0, 2.0]);
        let query = Point2::new(1.0, 3.0);
        let proj = seg.project_point(query).unwrap();

        // Result is collinear with the segment and inside its bounding box
        let ab = seg.end() - seg.start();
        let ap = proj.point - seg.start();
        assert_relative_eq!(ab.perp(&ap), 0.0, epsilon = 1e-5);
        assert!((0.0..=4.0).contains(&proj.point.x));
        assert!((0.0..=2.0).contains(&proj.point.y));
        assert_relative_eq!(proj.distance, nalgebra::distance(&query, &proj.point));
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        let seg = segment([2.0, 2.0], [2.0, 2.0]);

        assert!(seg.is_degenerate());
        assert_eq!(
            seg.project_point(Point2::new(0.0, 0.0)),
            Err(CutError::DegenerateSegment)
        );
    }
}

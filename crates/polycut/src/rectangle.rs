//! Axis-aligned rectangle, the usual starting shape for cutting.

use nalgebra::{Point2, Vector2};

use crate::Polygon;

/// An axis-aligned rectangle defined by a corner and its extents.
///
/// The four vertices are:
/// - `origin`
/// - `origin + (width, 0)`
/// - `origin + (width, height)`
/// - `origin + (0, height)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    origin: Point2<f32>,
    width: f32,
    height: f32,
}

impl Rectangle {
    /// Creates a new rectangle from an origin corner and its width and height.
    pub fn new(origin: Point2<f32>, width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Creates a rectangle spanning two opposite corners, in any order.
    pub fn from_corners(a: Point2<f32>, b: Point2<f32>) -> Self {
        let origin = Point2::new(a.x.min(b.x), a.y.min(b.y));
        Self {
            origin,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Point2<f32> {
        self.origin
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the four corner vertices in winding order.
    pub fn vertices(&self) -> [Point2<f32>; 4] {
        let o = self.origin;
        [
            o,
            o + Vector2::new(self.width, 0.0),
            o + Vector2::new(self.width, self.height),
            o + Vector2::new(0.0, self.height),
        ]
    }

    /// Area of the rectangle.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Point2<f32> {
        self.origin + Vector2::new(self.width, self.height) / 2.0
    }
}

impl From<Rectangle> for Polygon {
    fn from(rectangle: Rectangle) -> Self {
        Polygon::new(rectangle.vertices().to_vec())
    }
}

impl From<&Rectangle> for Polygon {
    fn from(rectangle: &Rectangle) -> Self {
        Polygon::new(rectangle.vertices().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_wind_from_origin() {
        let rect = Rectangle::new(Point2::new(10.0, 20.0), 30.0, 40.0);
        let [a, b, c, d] = rect.vertices();

        assert_eq!(a, Point2::new(10.0, 20.0));
        assert_eq!(b, Point2::new(40.0, 20.0));
        assert_eq!(c, Point2::new(40.0, 60.0));
        assert_eq!(d, Point2::new(10.0, 60.0));
    }

    #[test]
    fn from_corners_normalizes_order() {
        let rect = Rectangle::from_corners(Point2::new(5.0, 8.0), Point2::new(1.0, 2.0));

        assert_eq!(rect.origin(), Point2::new(1.0, 2.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 6.0);
        assert_eq!(rect.center(), Point2::new(3.0, 5.0));
    }

    #[test]
    fn converts_to_polygon_with_same_area() {
        let rect = Rectangle::new(Point2::origin(), 300.0, 150.0);
        let poly = Polygon::from(&rect);

        assert_eq!(poly.len(), 4);
        assert_eq!(poly.area(), rect.area());
        assert_eq!(poly.vertices()[0], rect.origin());
    }
}

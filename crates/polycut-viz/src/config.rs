use macroquad::color::Color;
use nalgebra::{Point2, Vector2};
use polycut::Rectangle;

/// All interactive settings in one struct.
/// Adjustable before the window opens; the session copies what it needs.
#[derive(Debug, Clone)]
pub struct VizConfig {
    // -- Coordinates --
    /// Screen position of the scene origin. Pointer positions are shifted by
    /// this before reaching the engine.
    pub offset: Vector2<f32>,
    /// Shape shown when the window opens, in scene coordinates.
    pub initial_shape: Rectangle,

    // -- Cut drawing --
    /// Pointer samples closer than this to the previous cut point are dropped.
    pub min_point_spacing: f32,

    // -- Rendering --
    /// Radius of the hover marker drawn at the snapped boundary point.
    pub snap_marker_radius: f32,
    /// Dash length of the preview line from the last cut point to the pointer.
    pub dash_length: f32,
    pub outline_thickness: f32,
    pub background: Color,
    pub outline: Color,
    pub cut: Color,
    pub marker: Color,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            offset: Vector2::new(100.0, 100.0),
            initial_shape: Rectangle::new(Point2::origin(), 300.0, 300.0),
            min_point_spacing: 4.0,
            snap_marker_radius: 6.0,
            dash_length: 8.0,
            outline_thickness: 2.0,
            background: Color::from_rgba(20, 20, 30, 255),
            outline: Color::from_rgba(230, 230, 230, 255),
            cut: Color::from_rgba(255, 200, 60, 255),
            marker: Color::from_rgba(80, 220, 120, 255),
        }
    }
}

impl VizConfig {
    /// Screen-space pointer position to scene coordinates.
    #[inline]
    pub fn to_scene(&self, screen: (f32, f32)) -> Point2<f32> {
        Point2::new(screen.0, screen.1) - self.offset
    }

    /// Scene coordinates to screen space.
    #[inline]
    pub fn to_screen(&self, scene: Point2<f32>) -> Point2<f32> {
        scene + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_and_screen_round_trip() {
        let config = VizConfig::default();
        let scene = config.to_scene((250.0, 130.0));

        assert_eq!(scene, Point2::new(150.0, 30.0));
        assert_eq!(config.to_screen(scene), Point2::new(250.0, 130.0));
    }
}

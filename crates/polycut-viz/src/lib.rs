//! Drawing helpers and the interactive session for cutting polygons.

use std::hash::{Hash, Hasher};

use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::*;
use nalgebra::Point2;
use polycut::Polygon;

pub mod config;
pub mod session;

pub use config::VizConfig;
pub use session::{CutSession, SessionState};

/// Generates a deterministic color from a vertex loop using hashing.
/// Pieces produced by a split keep their colors across frames.
pub fn loop_color(vertices: &[Point2<f32>]) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for v in vertices {
        v.x.to_bits().hash(&mut hasher);
        v.y.to_bits().hash(&mut hasher);
    }
    let hash = hasher.finish();

    let r = ((hash >> 16) & 0xFF) as u8;
    let g = ((hash >> 8) & 0xFF) as u8;
    let b = (hash & 0xFF) as u8;

    // Keep colors away from the dark background
    Color::from_rgba(r.max(60), g.max(60), b.max(60), 255)
}

/// Fills a vertex loop with a triangle fan from its first vertex.
///
/// The fill is exact for convex loops only; the outline is always exact.
fn fill_loop(config: &VizConfig, vertices: &[Point2<f32>], color: Color) {
    if vertices.len() < 3 {
        return;
    }

    let mesh_vertices: Vec<Vertex> = vertices
        .iter()
        .map(|p| {
            let s = config.to_screen(*p);
            Vertex::new2(vec3(s.x, s.y, 0.0), vec2(0.0, 0.0), color)
        })
        .collect();

    let mut indices: Vec<u16> = Vec::with_capacity((vertices.len() - 2) * 3);
    for i in 1..vertices.len() - 1 {
        indices.push(0);
        indices.push(i as u16);
        indices.push((i + 1) as u16);
    }

    draw_mesh(&Mesh {
        vertices: mesh_vertices,
        indices,
        texture: None,
    });
}

/// Draws the closed outline of a vertex loop.
fn outline_loop(config: &VizConfig, vertices: &[Point2<f32>], color: Color) {
    let n = vertices.len();
    for i in 0..n {
        let a = config.to_screen(vertices[i]);
        let b = config.to_screen(vertices[(i + 1) % n]);
        draw_line(a.x, a.y, b.x, b.y, config.outline_thickness, color);
    }
}

/// Draws a polygon filled with its hashed color and outlined.
pub fn draw_polygon(config: &VizConfig, polygon: &Polygon) {
    let vertices = polygon.vertices();
    fill_loop(config, vertices, loop_color(vertices));
    outline_loop(config, vertices, config.outline);
}

/// Draws one split candidate with the given fill opacity.
pub fn draw_loop(config: &VizConfig, vertices: &[Point2<f32>], alpha: f32) {
    let mut color = loop_color(vertices);
    color.a = alpha;
    fill_loop(config, vertices, color);
    outline_loop(config, vertices, config.outline);
}

/// Draws the hover marker at a snapped boundary point.
pub fn draw_snap_marker(config: &VizConfig, point: Point2<f32>) {
    let s = config.to_screen(point);
    draw_circle_lines(s.x, s.y, config.snap_marker_radius, 2.0, config.marker);
}

/// Draws a dashed line between two scene points.
pub fn draw_dashed_line(config: &VizConfig, from: Point2<f32>, to: Point2<f32>, color: Color) {
    let a = config.to_screen(from);
    let b = config.to_screen(to);
    let length = nalgebra::distance(&a, &b);
    if length == 0.0 {
        return;
    }

    let direction = (b - a) / length;
    let dash = config.dash_length;
    let mut travelled = 0.0;
    while travelled < length {
        let start = a + direction * travelled;
        let end = a + direction * (travelled + dash).min(length);
        draw_line(start.x, start.y, end.x, end.y, config.outline_thickness, color);
        travelled += dash * 2.0;
    }
}

/// Draws the cut in progress.
///
/// The committed part runs from the snapped start through the drawn points;
/// a dashed segment joins the last point to the pointer.
pub fn draw_cut_preview(
    config: &VizConfig,
    points: &[Point2<f32>],
    snapped_start: Option<Point2<f32>>,
    pointer: Point2<f32>,
) {
    let Some(&last) = points.last() else {
        return;
    };

    let head = snapped_start.unwrap_or(points[0]);
    let mut previous = head;
    for &point in &points[1..] {
        let a = config.to_screen(previous);
        let b = config.to_screen(point);
        draw_line(a.x, a.y, b.x, b.y, config.outline_thickness, config.cut);
        previous = point;
    }

    draw_snap_marker(config, head);
    draw_dashed_line(config, last, pointer, config.cut);
}

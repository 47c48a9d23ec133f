//! Interactive cut session: decides when the engine is asked to snap or split.

use log::{debug, info, warn};
use macroquad::prelude::*;
use nalgebra::Point2;
use polycut::{Cuttable, Polygon, Projection, Split};

use crate::{draw_cut_preview, draw_loop, draw_snap_marker, VizConfig};

/// Where the session is in the idle → drawing → choosing-side protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Nothing in progress; the pointer only previews snapping.
    Idle,
    /// The user is dragging out a cut path.
    Drawing { points: Vec<Point2<f32>> },
    /// A split has been computed and the user picks which side to keep.
    ChoosingSide { split: Split },
}

/// Owns the cut in progress. The engine itself never sees this state.
#[derive(Debug, Clone)]
pub struct CutSession {
    state: SessionState,
    min_point_spacing: f32,
}

impl Default for CutSession {
    fn default() -> Self {
        Self::new(VizConfig::default().min_point_spacing)
    }
}

impl CutSession {
    /// Creates an idle session.
    pub fn new(min_point_spacing: f32) -> Self {
        Self {
            state: SessionState::Idle,
            min_point_spacing,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Cut points drawn so far, empty unless drawing.
    pub fn cut_points(&self) -> &[Point2<f32>] {
        match &self.state {
            SessionState::Drawing { points } => points,
            _ => &[],
        }
    }

    /// Starts a cut at `point`. Ignored unless idle.
    pub fn begin(&mut self, point: Point2<f32>) {
        if self.state == SessionState::Idle {
            debug!("cut started at {:?}", point);
            self.state = SessionState::Drawing {
                points: vec![point],
            };
        }
    }

    /// Appends `point` to the cut if it is far enough from the previous one.
    pub fn extend(&mut self, point: Point2<f32>) {
        if let SessionState::Drawing { points } = &mut self.state {
            let far_enough = points
                .last()
                .is_none_or(|last| nalgebra::distance(last, &point) >= self.min_point_spacing);
            if far_enough {
                points.push(point);
            }
        }
    }

    /// Ends the cut and splits `polygon` along it.
    ///
    /// On success the session moves to choosing a side. On failure the cut is
    /// discarded and the session returns to idle.
    pub fn finish(&mut self, polygon: &Polygon) -> polycut::Result<()> {
        let points = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Drawing { points } => points,
            other => {
                self.state = other;
                return Ok(());
            }
        };

        match polygon.split(&points) {
            Ok(split) => {
                debug!(
                    "split into {} and {} vertices",
                    split.first.len(),
                    split.second.len()
                );
                self.state = SessionState::ChoosingSide { split };
                Ok(())
            }
            Err(err) => {
                warn!("cut rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Keeps the side under `pointer`, replacing `polygon` with it.
    ///
    /// Falls back to the larger side when the pointer is inside neither.
    /// Returns true if `polygon` was replaced.
    pub fn choose(&mut self, pointer: Point2<f32>, polygon: &mut Polygon) -> bool {
        let split = match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::ChoosingSide { split } => split,
            other => {
                self.state = other;
                return false;
            }
        };

        match pick_side(split, pointer) {
            Some(kept) => {
                info!("kept side with {} vertices, area {}", kept.len(), kept.area());
                *polygon = kept;
                true
            }
            None => {
                warn!("neither side of the cut is a polygon");
                false
            }
        }
    }

    /// Drops any cut in progress.
    pub fn cancel(&mut self) {
        if self.state != SessionState::Idle {
            debug!("cut cancelled");
        }
        self.state = SessionState::Idle;
    }

    /// Live snap of the pointer onto the polygon boundary.
    pub fn preview(&self, polygon: &Polygon, pointer: Point2<f32>) -> Option<Projection> {
        polygon.project_point(pointer).ok()
    }

    /// Handles mouse and keyboard input.
    /// Returns true if `polygon` was replaced.
    pub fn update(&mut self, config: &VizConfig, polygon: &mut Polygon) -> bool {
        let pointer = config.to_scene(mouse_position());

        if is_key_pressed(KeyCode::Escape) {
            self.cancel();
            return false;
        }

        match self.state {
            SessionState::Idle => {
                if is_mouse_button_pressed(MouseButton::Left) {
                    self.begin(pointer);
                }
                false
            }
            SessionState::Drawing { .. } => {
                self.extend(pointer);
                if is_mouse_button_released(MouseButton::Left) {
                    // Errors are logged by `finish`; the session is idle again.
                    let _ = self.finish(polygon);
                }
                false
            }
            SessionState::ChoosingSide { .. } => {
                if is_mouse_button_pressed(MouseButton::Left) {
                    self.choose(pointer, polygon)
                } else {
                    false
                }
            }
        }
    }

    /// Draws the cut in progress, the snap marker, and the candidate sides.
    pub fn render(&self, config: &VizConfig, polygon: &Polygon) {
        let pointer = config.to_scene(mouse_position());

        match &self.state {
            SessionState::Idle => {
                if let Some(snap) = self.preview(polygon, pointer) {
                    draw_snap_marker(config, snap.point);
                }
            }
            SessionState::Drawing { points } => {
                let snapped_start = self.preview(polygon, points[0]).map(|p| p.point);
                let snapped_end = self.preview(polygon, pointer).map(|p| p.point);
                draw_cut_preview(config, points, snapped_start, pointer);
                if let Some(end) = snapped_end {
                    draw_snap_marker(config, end);
                }
            }
            SessionState::ChoosingSide { split } => {
                let hovered = hovered_side(split, pointer);
                for (i, part) in split.loops().into_iter().enumerate() {
                    let alpha = if hovered == Some(i) { 0.9 } else { 0.35 };
                    draw_loop(config, part, alpha);
                }
            }
        }
    }

    /// Draws the status overlay.
    pub fn draw_ui(&self, polygon: &Polygon, y_offset: f32) {
        let status = match &self.state {
            SessionState::Idle => "Drag across the shape to cut it".to_string(),
            SessionState::Drawing { points } => format!("Drawing cut: {} points", points.len()),
            SessionState::ChoosingSide { .. } => "Click the side to keep".to_string(),
        };

        draw_text(&status, 10.0, y_offset, 18.0, WHITE);
        draw_text(
            &format!("Shape: {} vertices, area {:.0}", polygon.len(), polygon.area()),
            10.0,
            y_offset + 20.0,
            18.0,
            YELLOW,
        );
        draw_text("[Esc] cancel", 10.0, y_offset + 40.0, 16.0, DARKGRAY);
    }
}

/// Index of the loop containing `pointer`, if any.
fn hovered_side(split: &Split, pointer: Point2<f32>) -> Option<usize> {
    split.loops().into_iter().position(|part| {
        Polygon::try_new(part.to_vec())
            .map(|p| p.contains_point(pointer))
            .unwrap_or(false)
    })
}

/// Picks the loop to keep: the one under the pointer, else the larger one.
fn pick_side(split: Split, pointer: Point2<f32>) -> Option<Polygon> {
    let sides: Vec<Polygon> = [split.first, split.second]
        .into_iter()
        .filter_map(|part| Polygon::try_new(part).ok())
        .collect();

    if let Some(under) = sides.iter().position(|p| p.contains_point(pointer)) {
        return sides.into_iter().nth(under);
    }
    sides
        .into_iter()
        .max_by(|a, b| a.area().total_cmp(&b.area()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use polycut::CutError;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(300.0, 0.0),
            Point2::new(300.0, 300.0),
            Point2::new(0.0, 300.0),
        ])
    }

    fn drawn_session(points: &[[f32; 2]]) -> CutSession {
        let mut session = CutSession::new(4.0);
        session.begin(Point2::new(points[0][0], points[0][1]));
        for p in &points[1..] {
            session.extend(Point2::new(p[0], p[1]));
        }
        session
    }

    #[test]
    fn new_session_is_idle() {
        let session = CutSession::default();
        assert_eq!(session.state(), &SessionState::Idle);
        assert!(session.cut_points().is_empty());
    }

    #[test]
    fn begin_and_extend_collect_points() {
        let session = drawn_session(&[[150.0, -10.0], [150.0, 100.0], [150.0, 310.0]]);
        assert_eq!(session.cut_points().len(), 3);
    }

    #[test]
    fn extend_drops_close_points() {
        let session = drawn_session(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [10.0, 0.0]]);
        assert_eq!(
            session.cut_points(),
            &[Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]
        );
    }

    #[test]
    fn begin_is_ignored_while_drawing() {
        let mut session = drawn_session(&[[0.0, 0.0], [50.0, 0.0]]);
        session.begin(Point2::new(99.0, 99.0));
        assert_eq!(session.cut_points()[0], Point2::new(0.0, 0.0));
    }

    #[test]
    fn finish_moves_to_choosing_side() {
        let mut session = drawn_session(&[[150.0, -10.0], [150.0, 310.0]]);
        assert!(session.finish(&square()).is_ok());
        assert!(matches!(session.state(), SessionState::ChoosingSide { .. }));
    }

    #[test]
    fn finish_with_single_point_returns_to_idle() {
        let mut session = CutSession::new(4.0);
        session.begin(Point2::new(10.0, 10.0));

        assert_eq!(
            session.finish(&square()),
            Err(CutError::InvalidCut { points: 1 })
        );
        assert_eq!(session.state(), &SessionState::Idle);
    }

    #[test]
    fn choose_keeps_side_under_pointer() {
        let mut polygon = square();
        let mut session = drawn_session(&[[100.0, -10.0], [100.0, 310.0]]);
        session.finish(&polygon).unwrap();

        assert!(session.choose(Point2::new(50.0, 150.0), &mut polygon));
        assert_relative_eq!(polygon.area(), 30_000.0, epsilon = 1e-1);
        assert_eq!(session.state(), &SessionState::Idle);
    }

    #[test]
    fn choose_outside_keeps_larger_side() {
        let mut polygon = square();
        let mut session = drawn_session(&[[100.0, -10.0], [100.0, 310.0]]);
        session.finish(&polygon).unwrap();

        assert!(session.choose(Point2::new(-50.0, -50.0), &mut polygon));
        assert_relative_eq!(polygon.area(), 60_000.0, epsilon = 1e-1);
    }

    #[test]
    fn choose_skips_sliver_side() {
        let mut polygon = square();
        let mut session = drawn_session(&[[100.0, 0.0], [200.0, 0.0]]);
        session.finish(&polygon).unwrap();

        assert!(session.choose(Point2::new(150.0, 150.0), &mut polygon));
        assert_eq!(polygon.len(), 6);
    }

    #[test]
    fn choose_is_ignored_when_idle() {
        let mut polygon = square();
        let mut session = CutSession::new(4.0);
        assert!(!session.choose(Point2::new(10.0, 10.0), &mut polygon));
        assert_eq!(polygon, square());
    }

    #[test]
    fn choose_is_ignored_while_drawing() {
        let mut polygon = square();
        let mut session = drawn_session(&[[0.0, 0.0], [50.0, 0.0]]);
        assert!(!session.choose(Point2::new(10.0, 10.0), &mut polygon));
        assert_eq!(session.cut_points().len(), 2);
    }

    #[test]
    fn cancel_discards_cut() {
        let mut session = drawn_session(&[[0.0, 0.0], [50.0, 0.0]]);
        session.cancel();
        assert_eq!(session.state(), &SessionState::Idle);
    }

    #[test]
    fn preview_snaps_to_boundary() {
        let session = CutSession::default();
        let snap = session.preview(&square(), Point2::new(150.0, -20.0)).unwrap();
        assert_eq!(snap.point, Point2::new(150.0, 0.0));
        assert_eq!(snap.edge, 1);
    }
}

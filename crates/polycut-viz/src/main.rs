use log::info;
use macroquad::prelude::*;
use polycut::Polygon;
use polycut_viz::{draw_polygon, CutSession, VizConfig};

#[macroquad::main("Polygon Cut")]
async fn main() {
    env_logger::init();

    let config = VizConfig::default();
    let mut polygon = Polygon::from(config.initial_shape);
    let mut session = CutSession::new(config.min_point_spacing);
    info!("starting with {} vertices", polygon.len());

    loop {
        if session.update(&config, &mut polygon) {
            info!("shape now has {} vertices", polygon.len());
        }
        if is_key_pressed(KeyCode::R) {
            session.cancel();
            polygon = Polygon::from(config.initial_shape);
        }

        clear_background(config.background);

        if !matches!(session.state(), polycut_viz::SessionState::ChoosingSide { .. }) {
            draw_polygon(&config, &polygon);
        }
        session.render(&config, &polygon);

        draw_text("Polygon Cut", 10.0, 24.0, 24.0, WHITE);
        session.draw_ui(&polygon, 48.0);
        draw_text("[R]eset", 10.0, 108.0, 16.0, DARKGRAY);

        next_frame().await
    }
}

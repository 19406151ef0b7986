use hop_engine::{Color, Surface};

use crate::config::Tuning;

const BAR_X: f32 = 10.0;
const BAR_Y: f32 = 10.0;
const BAR_HEIGHT: f32 = 20.0;
const LABEL_X: f32 = 10.0;
const LABEL_Y: f32 = 50.0;

/// Health bar and numeric label, drawn over the world.
/// The bar width is not clamped; it tracks `health * health_bar_scale` exactly.
pub fn draw_hud(surface: &mut dyn Surface, health: i32, tuning: &Tuning) {
    let width = health as f32 * tuning.health_bar_scale;
    surface.fill_rect(BAR_X, BAR_Y, width, BAR_HEIGHT, Color::Red);
    surface.fill_text(&format!("Health: {health}"), LABEL_X, LABEL_Y, Color::White);
}

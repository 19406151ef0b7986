//! Immediate-mode drawing target.
//!
//! The browser implementation lives in `hop-web` (Canvas2D). Anything that can
//! clear itself, fill a rectangle and print a line of text can host a game.

/// A flat fill color. Only the colors the games actually draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Red,
}

impl Color {
    /// CSS color keyword, as accepted by `CanvasRenderingContext2D.fillStyle`.
    pub fn css(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
        }
    }
}

/// Width and height of a surface in pixels, as sampled at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Sample the current size of `surface`.
    pub fn of(surface: &dyn Surface) -> Self {
        Self::new(surface.width(), surface.height())
    }
}

/// A 2D drawing target.
///
/// `width` and `height` are queried, never cached by callers across frames:
/// a surface may be resized between ticks.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Clear the full drawable area.
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color);
}

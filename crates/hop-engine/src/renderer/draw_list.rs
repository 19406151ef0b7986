use super::surface::{Color, Surface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    FillText {
        text: String,
        x: f32,
        y: f32,
        color: Color,
    },
}

/// A headless [`Surface`] that records every call of the current frame.
///
/// `clear` starts a new frame: previously recorded commands are dropped and a
/// single `Clear` command is recorded in their place.
#[derive(Debug, Clone)]
pub struct DrawList {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(64),
        }
    }

    /// Change the surface dimensions. Takes effect on the next query.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Rectangles recorded this frame, in draw order.
    pub fn rects(&self) -> impl Iterator<Item = (f32, f32, f32, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::FillRect { x, y, w, h, color } => Some((x, y, w, h, color)),
            _ => None,
        })
    }

    /// Text recorded this frame, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Surface for DrawList {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear {
            width: self.width,
            height: self.height,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            x,
            y,
            color,
        });
    }
}

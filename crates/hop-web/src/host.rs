use hop_engine::{Game, InputEvent};

use crate::canvas::CanvasSurface;
use crate::runner::GameRunner;

/// A runner bound to the canvas it draws on.
pub struct WebHost<G: Game> {
    runner: GameRunner<G>,
    surface: CanvasSurface,
}

impl<G: Game> WebHost<G> {
    pub fn new(game: G, surface: CanvasSurface) -> Self {
        Self {
            runner: GameRunner::new(game),
            surface,
        }
    }

    pub fn init(&mut self) {
        self.runner.init();
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.runner.push_input(event);
    }

    /// One update + render onto the canvas.
    pub fn tick(&mut self) {
        self.runner.tick(&mut self.surface);
    }

    pub fn load_levels(&mut self, json: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.runner.load_levels(json)
    }
}

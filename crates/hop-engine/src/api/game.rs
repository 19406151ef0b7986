use crate::input::queue::KeyState;
use crate::renderer::surface::{Surface, SurfaceSize};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Surface width assumed before the host reports a real one (default: 800).
    pub surface_width: f32,
    /// Surface height assumed before the host reports a real one (default: 600).
    pub surface_height: f32,
    /// Maximum level forwarded to the host logger (default: Info).
    pub log_level: log::Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: 800.0,
            surface_height: 600.0,
            log_level: log::Level::Info,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One simulation tick. Input and surface size in `ctx` are fixed for the
    /// duration of the call.
    fn update(&mut self, ctx: &mut EngineContext);

    /// Draw the current state. Must not mutate game state.
    fn render(&self, ctx: &mut RenderContext);

    /// Replace the game's levels with ones parsed from `json` and restart.
    /// Games without loadable levels reject every call.
    fn load_levels(&mut self, _json: &str) -> Result<(), Box<dyn std::error::Error>> {
        Err("this game has no loadable levels".into())
    }
}

/// Per-tick engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    /// Held keys as of the start of this tick.
    pub input: KeyState,
    /// Surface dimensions sampled at the start of this tick.
    pub surface: SurfaceSize,
    frame: u64,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            input: KeyState::new(),
            surface: SurfaceSize::new(config.surface_width, config.surface_height),
            frame: 0,
        }
    }

    /// Y coordinate of the floor line (the bottom edge of the surface).
    pub fn floor_y(&self) -> f32 {
        self.surface.height
    }

    /// Number of completed ticks.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Called by the runner after each tick.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

/// Render context for Game::render.
pub struct RenderContext<'a> {
    pub surface: &'a mut dyn Surface,
}

impl<'a> RenderContext<'a> {
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        Self { surface }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl Game for Fixed {
        fn init(&mut self, _ctx: &mut EngineContext) {}
        fn update(&mut self, _ctx: &mut EngineContext) {}
        fn render(&self, _ctx: &mut RenderContext) {}
    }

    #[test]
    fn load_levels_is_rejected_by_default() {
        let err = Fixed.load_levels("[]").unwrap_err();
        assert_eq!(err.to_string(), "this game has no loadable levels");
    }

    #[test]
    fn context_starts_from_config_size() {
        let config = GameConfig {
            surface_width: 320.0,
            surface_height: 200.0,
            ..GameConfig::default()
        };
        let ctx = EngineContext::new(&config);
        assert_eq!(ctx.floor_y(), 200.0);
        assert_eq!(ctx.frame(), 0);
    }
}

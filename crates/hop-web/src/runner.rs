use hop_engine::{EngineContext, Game, InputEvent, InputQueue, RenderContext, Surface, SurfaceSize};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `platformer`) creates a `thread_local!` runner
/// through [`export_game!`](crate::export_game) and exports free functions via
/// `#[wasm_bindgen]`, because wasm-bindgen cannot export generic structs directly.
///
/// Nothing here touches the browser, so the same runner drives headless tests.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::new(&config),
            game,
            input: InputQueue::new(),
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue. Applied at the start of the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one tick: snapshot input and surface size, update, then render.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        if !self.initialized {
            return;
        }

        // Input snapshot for this tick
        let events = self.input.drain();
        self.ctx.input.apply_all(&events);

        self.ctx.surface = SurfaceSize::of(&*surface);
        self.game.update(&mut self.ctx);

        {
            let mut render_ctx = RenderContext::new(surface);
            self.game.render(&mut render_ctx);
        }

        self.ctx.advance_frame();
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    /// Hand level JSON to the game (the `game_load_levels` export).
    pub fn load_levels(&mut self, json: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.game.load_levels(json)
    }
}

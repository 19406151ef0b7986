pub mod canvas;
pub mod host;
pub mod runner;
pub mod schedule;

pub use canvas::CanvasSurface;
pub use host::WebHost;
pub use runner::GameRunner;
pub use schedule::{listen_keys, run_animation_loop};

pub use hop_engine;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the [`WebHost`]
/// - a `with_host()` helper that reports use-before-init as a JS error
/// - `game_init(canvas_id)`: logging, panic hook, canvas lookup, `Game::init`
/// - `game_start()`: keyboard listeners and the requestAnimationFrame loop
/// - `game_load_levels(json)`: swap in custom levels via `Game::load_levels`
/// - `game_tick()`, `game_key_down(key)`, `game_key_up(key)` for hosts that
///   drive the loop themselves
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// hop_web::export_game!(MyGame, "my-game");
/// ```
///
/// The game type needs a `new()` constructor. The calling crate must depend on
/// `wasm-bindgen`, `log`, `console_log` and `console_error_panic_hook`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static HOST: RefCell<Option<$crate::WebHost<$game_type>>> = RefCell::new(None);
        }

        fn with_host<R>(
            f: impl FnOnce(&mut $crate::WebHost<$game_type>) -> R,
        ) -> Result<R, wasm_bindgen::JsValue> {
            HOST.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let host = borrow.as_mut().ok_or_else(|| {
                    wasm_bindgen::JsValue::from_str(concat!(
                        $game_name,
                        ": not initialized, call game_init() first"
                    ))
                })?;
                Ok(f(host))
            })
        }

        #[wasm_bindgen]
        pub fn game_init(canvas_id: &str) -> Result<(), wasm_bindgen::JsValue> {
            console_error_panic_hook::set_once();

            let game = <$game_type>::new();
            let config = $crate::hop_engine::Game::config(&game);
            let _ = console_log::init_with_level(config.log_level);

            let surface = $crate::CanvasSurface::from_element_id(canvas_id)?;
            let mut host = $crate::WebHost::new(game, surface);
            host.init();

            HOST.with(|cell| {
                *cell.borrow_mut() = Some(host);
            });

            log::info!("{}: initialized on #{}", $game_name, canvas_id);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn game_start() -> Result<(), wasm_bindgen::JsValue> {
            with_host(|_| ())?;

            $crate::listen_keys(|event| {
                if let Err(err) = with_host(|h| h.push_input(event)) {
                    log::error!("{}: dropped key event: {:?}", $game_name, err);
                }
            })?;

            $crate::run_animation_loop(|| {
                if let Err(err) = with_host(|h| h.tick()) {
                    log::error!("{}: tick skipped: {:?}", $game_name, err);
                }
            })?;

            log::info!("{}: animation loop started", $game_name);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn game_load_levels(json: &str) -> Result<(), wasm_bindgen::JsValue> {
            with_host(|h| h.load_levels(json))?.map_err(|err| {
                log::error!("{}: level load failed: {}", $game_name, err);
                wasm_bindgen::JsValue::from_str(&err.to_string())
            })
        }

        #[wasm_bindgen]
        pub fn game_tick() -> Result<(), wasm_bindgen::JsValue> {
            with_host(|h| h.tick())
        }

        #[wasm_bindgen]
        pub fn game_key_down(key: String) -> Result<(), wasm_bindgen::JsValue> {
            with_host(|h| h.push_input($crate::hop_engine::InputEvent::KeyDown { key }))
        }

        #[wasm_bindgen]
        pub fn game_key_up(key: String) -> Result<(), wasm_bindgen::JsValue> {
            with_host(|h| h.push_input($crate::hop_engine::InputEvent::KeyUp { key }))
        }
    };
}

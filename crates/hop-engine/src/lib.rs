pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use crate::api::game::{EngineContext, Game, GameConfig, RenderContext};
pub use crate::components::body::Body;
pub use crate::core::physics;
pub use crate::core::scene::Scene;
pub use crate::input::queue::{keys, InputEvent, InputQueue, KeyState};
pub use crate::renderer::{Color, DrawCommand, DrawList, Surface, SurfaceSize};

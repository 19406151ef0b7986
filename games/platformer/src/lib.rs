use wasm_bindgen::prelude::*;

pub mod ai;
pub mod config;
pub mod entity;
pub mod error;
pub mod game;
pub mod level;
pub mod ui;
pub mod world;

pub use config::Tuning;
pub use entity::{Entity, EntityKind};
pub use error::LevelError;
pub use game::Platformer;
pub use level::{EnemyDesc, Level, LevelSet, PlatformDesc};
pub use world::World;

hop_web::export_game!(Platformer, "platformer");

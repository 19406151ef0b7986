pub mod physics;
pub mod scene;

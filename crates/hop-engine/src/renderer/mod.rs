pub mod draw_list;
pub mod surface;

pub use draw_list::{DrawCommand, DrawList};
pub use surface::{Color, Surface, SurfaceSize};

use glam::Vec2;

/// Replacement for a non-positive width or height.
pub const MIN_EXTENT: f32 = 1.0;

/// Kinematic state shared by every simulated object.
///
/// `pos` is the top-left corner in surface pixels (Y grows downward).
/// `size` is fixed at construction; there is no setter.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Top-left corner.
    pub pos: Vec2,
    size: Vec2,
    /// Velocity in pixels per tick.
    pub vel: Vec2,
    /// Added to `vel.y` once per tick.
    pub gravity: f32,
}

impl Body {
    /// Create a body at rest. A width or height `<= 0` becomes [`MIN_EXTENT`];
    /// positive sizes are kept as given, however small.
    pub fn new(pos: Vec2, size: Vec2, gravity: f32) -> Self {
        let clamped = Vec2::select(size.cmple(Vec2::ZERO), Vec2::splat(MIN_EXTENT), size);
        if clamped != size {
            log::warn!(
                "body at ({}, {}) had non-positive size {}x{}, clamped to {}x{}",
                pos.x,
                pos.y,
                size.x,
                size.y,
                clamped.x,
                clamped.y
            );
        }
        Self {
            pos,
            size: clamped,
            vel: Vec2::ZERO,
            gravity,
        }
    }

    // -- Builder pattern --

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True when the bottom edge is at or below `floor_y`.
    /// Derived from position every call; nothing is cached.
    pub fn is_grounded(&self, floor_y: f32) -> bool {
        self.bottom() >= floor_y
    }
}

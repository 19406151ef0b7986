use glam::Vec2;

/// Gameplay constants. Units are pixels and pixels-per-tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Added to every entity's vertical velocity each tick.
    pub gravity: f32,
    /// Horizontal speed while ArrowLeft / ArrowRight is held.
    pub walk_speed: f32,
    /// Vertical velocity set by a grounded jump (negative is up).
    pub jump_velocity: f32,
    /// Enemies chase while strictly closer than this on the X axis.
    pub chase_radius: f32,
    /// Horizontal speed of a chasing enemy.
    pub chase_speed: f32,
    /// Where a fresh player appears on reset.
    pub spawn: [f32; 2],
    pub player_size: [f32; 2],
    pub enemy_size: [f32; 2],
    pub starting_health: i32,
    /// Health bar pixels per health point.
    pub health_bar_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            walk_speed: 3.0,
            jump_velocity: -10.0,
            chase_radius: 200.0,
            chase_speed: 1.0,
            spawn: [50.0, 500.0],
            player_size: [50.0, 50.0],
            enemy_size: [50.0, 50.0],
            starting_health: 100,
            health_bar_scale: 2.0,
        }
    }
}

impl Tuning {
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::from(self.spawn)
    }

    pub fn player_extent(&self) -> Vec2 {
        Vec2::from(self.player_size)
    }

    pub fn enemy_extent(&self) -> Vec2 {
        Vec2::from(self.enemy_size)
    }
}

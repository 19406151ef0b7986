//! Enemy pursuit: walk toward the player when they are close on the X axis.
//!
//! No vertical behaviour, no smoothing, no obstacle awareness.

use hop_engine::Body;

use crate::config::Tuning;

/// Horizontal velocity an enemy at `enemy_x` should have given the player at `player_x`.
pub fn chase_velocity(enemy_x: f32, player_x: f32, tuning: &Tuning) -> f32 {
    if (enemy_x - player_x).abs() < tuning.chase_radius {
        if player_x > enemy_x {
            tuning.chase_speed
        } else {
            -tuning.chase_speed
        }
    } else {
        0.0
    }
}

/// Overwrite the enemy's horizontal velocity.
pub fn apply_chase(enemy: &mut Body, player_x: f32, tuning: &Tuning) {
    enemy.vel.x = chase_velocity(enemy.pos.x, player_x, tuning);
}

//! Per-tick kinematics: gravity, explicit Euler integration, floor clamp.
//!
//! The floor (the bottom edge of the drawing surface) is the only collider.
//! Bodies pass through each other and through anything drawn above the floor.

use crate::components::body::Body;

/// Advance `body` by one tick against a floor at `floor_y`.
///
/// Order matters: velocity is updated before position, so gravity added this
/// tick already moves the body this tick.
pub fn step(body: &mut Body, floor_y: f32) {
    body.vel.y += body.gravity;
    body.pos += body.vel;

    if body.bottom() > floor_y {
        body.pos.y = floor_y - body.height();
        body.vel.y = 0.0;
    }
}

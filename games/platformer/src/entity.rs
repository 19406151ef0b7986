use glam::Vec2;
use hop_engine::{keys, physics, Body, Color, KeyState, Surface};

use crate::ai;
use crate::config::Tuning;

/// Behaviour variant. `health` only exists on the player.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    /// Falls and lands, nothing else. Platforms are generic entities.
    Generic,
    Player { health: i32 },
    Enemy,
}

/// Everything `Entity::update` may read besides the entity itself.
pub struct UpdateContext<'a> {
    pub floor_y: f32,
    pub input: &'a KeyState,
    /// Player X at the start of the update phase.
    pub player_x: f32,
    pub tuning: &'a Tuning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub body: Body,
    pub kind: EntityKind,
}

impl Entity {
    /// A decorative platform. It falls like anything else: platforms are not
    /// solid and nothing collides with them.
    pub fn platform(x: f32, y: f32, width: f32, height: f32, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(Vec2::new(x, y), Vec2::new(width, height), tuning.gravity),
            kind: EntityKind::Generic,
        }
    }

    pub fn player(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(pos, tuning.player_extent(), tuning.gravity),
            kind: EntityKind::Player {
                health: tuning.starting_health,
            },
        }
    }

    pub fn enemy(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(pos, tuning.enemy_extent(), tuning.gravity),
            kind: EntityKind::Enemy,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, EntityKind::Player { .. })
    }

    pub fn health(&self) -> Option<i32> {
        match self.kind {
            EntityKind::Player { health } => Some(health),
            _ => None,
        }
    }

    /// Advance one tick. Physics always runs first, then the kind's own rule.
    /// Only `self` is mutated.
    pub fn update(&mut self, ctx: &UpdateContext) {
        physics::step(&mut self.body, ctx.floor_y);

        match self.kind {
            EntityKind::Generic => {}
            EntityKind::Player { .. } => steer_player(&mut self.body, ctx),
            EntityKind::Enemy => ai::apply_chase(&mut self.body, ctx.player_x, ctx.tuning),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        let b = &self.body;
        surface.fill_rect(b.pos.x, b.pos.y, b.width(), b.height(), Color::White);
    }
}

/// Arrow-key control, applied after physics.
///
/// Left and right are checked in that order and both assign, so holding both
/// moves right. Releasing both keeps the current horizontal velocity.
/// Jumping needs the bottom edge on or below the floor line.
fn steer_player(body: &mut Body, ctx: &UpdateContext) {
    let speed = ctx.tuning.walk_speed;
    if ctx.input.is_pressed(keys::ARROW_LEFT) {
        body.vel.x = -speed;
    }
    if ctx.input.is_pressed(keys::ARROW_RIGHT) {
        body.vel.x = speed;
    }
    if ctx.input.is_pressed(keys::ARROW_UP) && body.is_grounded(ctx.floor_y) {
        body.vel.y = ctx.tuning.jump_velocity;
    }
}

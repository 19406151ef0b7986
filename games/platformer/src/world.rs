use hop_engine::{KeyState, Scene, Surface};

use crate::config::Tuning;
use crate::entity::{Entity, UpdateContext};
use crate::level::Level;

/// The live entities of the current level instance, in draw order:
/// platforms, then enemies, then the player.
///
/// The world owns every entity. `player` is the slot of the one player entity
/// inside `entities`, not a second copy.
#[derive(Debug, Clone)]
pub struct World {
    entities: Scene<Entity>,
    player: usize,
}

impl World {
    /// Build a world from `level` with `player` appended last.
    pub fn build(level: &Level, player: Entity, tuning: &Tuning) -> Self {
        let mut world = Self {
            entities: Scene::with_capacity(level.entity_count()),
            player: 0,
        };
        world.reload(level, player, tuning);
        world
    }

    /// Drop every entity and append `level`'s entities followed by `player`.
    pub fn reload(&mut self, level: &Level, player: Entity, tuning: &Tuning) {
        self.entities.clear();
        for p in &level.platforms {
            self.entities
                .spawn(Entity::platform(p.x, p.y, p.width, p.height, tuning));
        }
        for e in &level.enemies {
            self.entities.spawn(Entity::enemy(e.pos(), tuning));
        }
        self.player = self.entities.spawn(player);
    }

    pub fn player(&self) -> &Entity {
        &self.entities[self.player]
    }

    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.entities[self.player]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Update every entity once, in world order.
    ///
    /// The entity list cannot change during the pass, and every enemy sees
    /// the player's X as it was when the pass began.
    pub fn update(&mut self, floor_y: f32, input: &KeyState, tuning: &Tuning) {
        let ctx = UpdateContext {
            floor_y,
            input,
            player_x: self.player().body.pos.x,
            tuning,
        };
        for entity in self.entities.iter_mut() {
            entity.update(&ctx);
        }
    }

    /// Draw every entity back to front.
    pub fn render(&self, surface: &mut dyn Surface) {
        for entity in self.entities.iter() {
            entity.render(surface);
        }
    }
}

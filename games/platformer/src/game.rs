use hop_engine::{EngineContext, Game, RenderContext};

use crate::config::Tuning;
use crate::entity::{Entity, EntityKind};
use crate::error::LevelError;
use crate::level::LevelSet;
use crate::ui;
use crate::world::World;

/// The platformer: one world, one player, reset in place on death.
///
/// There is a single running state. A tick is update, then the health check
/// (which may reset the world), then render.
pub struct Platformer {
    levels: LevelSet,
    current_level: usize,
    tuning: Tuning,
    world: World,
}

impl Platformer {
    /// Builtin levels and default tuning, starting on level 0.
    pub fn new() -> Self {
        Self::with_levels(LevelSet::builtin(), Tuning::default())
    }

    /// Start on level 0 of `levels`.
    pub fn with_levels(levels: LevelSet, tuning: Tuning) -> Self {
        let player = Entity::player(tuning.spawn_point(), &tuning);
        let world = World::build(levels.first(), player, &tuning);
        Self {
            levels,
            current_level: 0,
            tuning,
            world,
        }
    }

    /// Fresh player at the spawn point, world rebuilt from the current level.
    /// The current level index is kept.
    pub fn reset(&mut self) -> Result<(), LevelError> {
        let level = self.levels.get(self.current_level)?;
        let player = Entity::player(self.tuning.spawn_point(), &self.tuning);
        self.world.reload(level, player, &self.tuning);
        log::debug!(
            "reset: level {} reloaded with {} entities",
            self.current_level,
            self.world.len()
        );
        Ok(())
    }

    /// Switch to another level and reset into it. On error nothing changes.
    pub fn set_level(&mut self, index: usize) -> Result<(), LevelError> {
        self.levels.get(index)?;
        self.current_level = index;
        self.reset()?;
        log::info!("level {} loaded: {} entities", index, self.world.len());
        Ok(())
    }

    /// Replace the level set with levels parsed from `json` and reset into
    /// level 0. On error the current levels and world are kept.
    pub fn load_levels(&mut self, json: &str) -> Result<(), LevelError> {
        self.levels = LevelSet::from_json(json)?;
        self.current_level = 0;
        self.reset()?;
        log::info!(
            "{} levels loaded, level 0 has {} entities",
            self.levels.len(),
            self.world.len()
        );
        Ok(())
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Entity {
        self.world.player()
    }

    pub fn player_health(&self) -> i32 {
        self.world.player().health().unwrap_or(0)
    }

    /// Overwrite the player's health. Takes effect at the next health check.
    pub fn set_player_health(&mut self, value: i32) {
        if let EntityKind::Player { health } = &mut self.world.player_mut().kind {
            *health = value;
        }
    }

    /// Update phase followed by the health check.
    pub fn step(&mut self, ctx: &EngineContext) {
        self.world.update(ctx.floor_y(), &ctx.input, &self.tuning);

        if self.player_health() <= 0 {
            log::debug!("player died on frame {}", ctx.frame());
            if let Err(err) = self.reset() {
                // current_level was validated when it was set.
                log::error!("reset failed: {err}");
            }
        }
    }
}

impl Default for Platformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Platformer {
    fn init(&mut self, _ctx: &mut EngineContext) {
        log::info!(
            "level {} loaded: {} entities",
            self.current_level,
            self.world.len()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        self.step(ctx);
    }

    fn render(&self, ctx: &mut RenderContext) {
        ctx.surface.clear();
        self.world.render(ctx.surface);
        ui::draw_hud(ctx.surface, self.player_health(), &self.tuning);
    }

    fn load_levels(&mut self, json: &str) -> Result<(), Box<dyn std::error::Error>> {
        Ok(Platformer::load_levels(self, json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use hop_engine::{keys, Color, DrawCommand, DrawList, InputEvent};
    use hop_web::GameRunner;

    fn running() -> (GameRunner<Platformer>, DrawList) {
        let mut runner = GameRunner::new(Platformer::new());
        runner.init();
        (runner, DrawList::new(800.0, 600.0))
    }

    #[test]
    fn builtin_world_has_four_entities() {
        let game = Platformer::new();
        assert_eq!(game.world().len(), 4);
        assert_eq!(game.player().body.pos, Vec2::new(50.0, 500.0));
        assert_eq!(game.player_health(), 100);
    }

    #[test]
    fn first_tick_integrates_but_does_not_clamp() {
        let (mut runner, mut surface) = running();
        runner.tick(&mut surface);

        let player = runner.game().player();
        assert_eq!(player.body.vel.y, 0.5);
        assert_eq!(player.body.pos.y, 500.5);
        assert!(player.body.bottom() < 600.0);

        let entities: Vec<_> = runner.game().world().iter().collect();
        // Floor slab lands immediately, ledge starts falling.
        assert_eq!(entities[0].body.pos.y, 550.0);
        assert_eq!(entities[0].body.vel.y, 0.0);
        assert_eq!(entities[1].body.pos.y, 400.5);
        // Enemy at x=400 is 350px from the player: idle.
        assert_eq!(entities[2].body.vel.x, 0.0);
    }

    #[test]
    fn render_order_is_clear_entities_hud() {
        let (mut runner, mut surface) = running();
        runner.tick(&mut surface);

        let cmds = surface.commands();
        assert_eq!(cmds.len(), 1 + 4 + 2);
        assert_eq!(cmds[0], DrawCommand::Clear { width: 800.0, height: 600.0 });
        let rects: Vec<_> = surface.rects().collect();
        assert!(rects[..4].iter().all(|r| r.4 == Color::White));
        // Player drawn last among entities.
        assert_eq!(rects[3], (50.0, 500.5, 50.0, 50.0, Color::White));
        assert_eq!(rects[4], (10.0, 10.0, 200.0, 20.0, Color::Red));
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["Health: 100"]);
    }

    #[test]
    fn death_resets_within_the_same_tick() {
        let (mut runner, mut surface) = running();
        for _ in 0..30 {
            runner.tick(&mut surface);
        }
        runner.game_mut().set_player_health(0);
        runner.tick(&mut surface);

        let game = runner.game();
        assert_eq!(game.player_health(), 100);
        assert_eq!(game.player().body.pos, Vec2::new(50.0, 500.0));
        assert_eq!(game.world().len(), 4);
        assert_eq!(game.current_level(), 0);
        // The frame drawn after the reset already shows a full bar.
        assert_eq!(surface.rects().nth(4), Some((10.0, 10.0, 200.0, 20.0, Color::Red)));
        assert_eq!(surface.rects().nth(3), Some((50.0, 500.0, 50.0, 50.0, Color::White)));
    }

    #[test]
    fn negative_health_also_resets() {
        let mut game = Platformer::new();
        game.set_player_health(-5);
        game.step(&EngineContext::default());
        assert_eq!(game.player_health(), 100);
    }

    #[test]
    fn player_lands_and_jumps() {
        let (mut runner, mut surface) = running();
        // y after n ticks is 500 + n(n+1)/4, first past 550 at n = 14.
        for _ in 0..14 {
            runner.tick(&mut surface);
        }
        assert_eq!(runner.game().player().body.bottom(), 600.0);

        runner.push_input(InputEvent::KeyDown { key: keys::ARROW_UP.into() });
        runner.tick(&mut surface);
        assert_eq!(runner.game().player().body.vel.y, -10.0);

        // Still holding up while airborne: gravity only.
        runner.tick(&mut surface);
        assert_eq!(runner.game().player().body.vel.y, -9.5);
    }

    #[test]
    fn walking_right_brings_enemy_into_chase() {
        let (mut runner, mut surface) = running();
        runner.push_input(InputEvent::KeyDown { key: keys::ARROW_RIGHT.into() });
        // Player x after n ticks is 50 + 3(n-1); within 200 of 400 once x > 200.
        for _ in 0..55 {
            runner.tick(&mut surface);
        }
        let enemy_vx = runner.game().world().iter().nth(2).map(|e| e.body.vel.x);
        assert_eq!(enemy_vx, Some(-1.0));
    }

    #[test]
    fn shrinking_surface_moves_the_floor() {
        let (mut runner, mut surface) = running();
        surface.resize(800.0, 300.0);
        runner.tick(&mut surface);
        assert_eq!(runner.game().player().body.bottom(), 300.0);
        assert_eq!(
            surface.commands()[0],
            DrawCommand::Clear { width: 800.0, height: 300.0 }
        );
    }

    #[test]
    fn set_level_validates_index() {
        let mut game = Platformer::new();
        assert!(matches!(
            game.set_level(3),
            Err(LevelError::UnknownLevel { index: 3, count: 1 })
        ));
        assert_eq!(game.current_level(), 0);
    }

    #[test]
    fn set_level_switches_and_survives_reset() {
        let json = r#"[
            { "platforms": [], "enemies": [] },
            { "platforms": [], "enemies": [{ "x": 10, "y": 10 }, { "x": 20, "y": 10 }] }
        ]"#;
        let levels = LevelSet::from_json(json).unwrap();
        let mut game = Platformer::with_levels(levels, Tuning::default());
        assert_eq!(game.world().len(), 1);

        game.set_level(1).unwrap();
        assert_eq!(game.world().len(), 3);

        game.set_player_health(0);
        game.step(&EngineContext::default());
        assert_eq!(game.current_level(), 1);
        assert_eq!(game.world().len(), 3);
    }

    #[test]
    fn loading_levels_through_the_runner_restarts_on_level_zero() {
        let (mut runner, mut surface) = running();
        for _ in 0..20 {
            runner.tick(&mut surface);
        }
        let json = r#"[
            { "platforms": [{ "x": 0, "y": 580, "width": 640, "height": 20 }],
              "enemies": [{ "x": 300, "y": 100 }, { "x": 500, "y": 100 }] }
        ]"#;
        runner.load_levels(json).unwrap();

        let game = runner.game();
        assert_eq!(game.current_level(), 0);
        assert_eq!(game.world().len(), 4);
        assert_eq!(game.player().body.pos, Vec2::new(50.0, 500.0));

        // The next death reloads the new level, not the builtin one.
        runner.game_mut().set_player_health(0);
        runner.tick(&mut surface);
        let enemies: Vec<_> = runner.game().world().iter().skip(1).take(2).collect();
        assert_eq!(enemies[0].body.pos, Vec2::new(300.0, 100.0));
        assert_eq!(enemies[1].body.pos, Vec2::new(500.0, 100.0));
    }

    #[test]
    fn bad_level_json_keeps_the_current_world() {
        let mut game = Platformer::new();
        game.set_player_health(42);
        assert!(matches!(game.load_levels("[]"), Err(LevelError::Empty)));
        assert!(matches!(game.load_levels("{"), Err(LevelError::Parse(_))));
        assert_eq!(game.world().len(), 4);
        assert_eq!(game.player_health(), 42);
    }

    #[test]
    fn init_keeps_the_world_built_by_new() {
        let (runner, _) = running();
        assert_eq!(runner.game().player().body.pos, Vec2::new(50.0, 500.0));
        assert_eq!(runner.game().world().len(), 4);
    }
}

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// A platform rectangle, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformDesc {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// An enemy spawn point. Enemy size comes from tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyDesc {
    pub x: f32,
    pub y: f32,
}

impl EnemyDesc {
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Static description of one level.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Level {
    #[serde(default)]
    pub platforms: Vec<PlatformDesc>,
    #[serde(default)]
    pub enemies: Vec<EnemyDesc>,
}

impl Level {
    /// The compiled-in level: a floor-width slab, one floating ledge, one enemy.
    pub fn builtin() -> Self {
        Self {
            platforms: vec![
                PlatformDesc {
                    x: 0.0,
                    y: 550.0,
                    width: 800.0,
                    height: 50.0,
                },
                PlatformDesc {
                    x: 200.0,
                    y: 400.0,
                    width: 100.0,
                    height: 20.0,
                },
            ],
            enemies: vec![EnemyDesc { x: 400.0, y: 500.0 }],
        }
    }

    /// Entities this level produces once the player is added.
    pub fn entity_count(&self) -> usize {
        self.platforms.len() + self.enemies.len() + 1
    }
}

/// Every level the game knows about, addressed by index.
/// Never empty: every constructor rejects an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    pub fn new(levels: Vec<Level>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::Empty);
        }
        Ok(Self { levels })
    }

    /// Just [`Level::builtin`].
    pub fn builtin() -> Self {
        Self {
            levels: vec![Level::builtin()],
        }
    }

    /// Parse a JSON array of levels.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Level 0, which always exists.
    pub fn first(&self) -> &Level {
        &self.levels[0]
    }

    pub fn get(&self, index: usize) -> Result<&Level, LevelError> {
        self.levels.get(index).ok_or(LevelError::UnknownLevel {
            index,
            count: self.levels.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::builtin()
    }
}

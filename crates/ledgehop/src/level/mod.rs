//! Level geometry and entities for one attempt.

pub mod builder;
pub mod error;
pub mod grid;

pub use error::{LevelError, Malformed};
pub use grid::{Tile, TileGrid};

use glam::Vec2;

use crate::components::enemy::Enemy;
use crate::components::platform::{Coin, Goal, Platform};
use crate::core::geometry::Aabb;

/// Everything the simulation mutates during an attempt, plus the immutable goal.
///
/// Platforms and coins only ever shrink. A restart replaces the whole `Level` with a
/// freshly built one.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub goal: Goal,
    pub level_width: f32,
    coins_total: u32,
}

impl Level {
    /// Remove every coin overlapping `rect`. Returns how many were collected.
    pub fn collect_coins(&mut self, rect: &Aabb) -> u32 {
        let mut collected = 0;
        for coin in self.coins.iter_mut() {
            if !coin.collected && coin.rect.overlaps(rect) {
                coin.collected = true;
                collected += 1;
            }
        }
        if collected > 0 {
            self.coins.retain(|c| !c.collected);
        }
        collected
    }

    /// Number of enemies overlapping `rect`.
    pub fn enemy_contacts(&self, rect: &Aabb) -> usize {
        self.enemies.iter().filter(|e| e.rect().overlaps(rect)).count()
    }

    pub fn touches_goal(&self, rect: &Aabb) -> bool {
        self.goal.rect.overlaps(rect)
    }

    /// The platform containing `point`, if any.
    pub fn platform_at(&self, point: Vec2) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.rect.contains(point))
    }

    /// Coins placed in the grid at build time.
    pub fn coins_total(&self) -> u32 {
        self.coins_total
    }

    pub fn coins_remaining(&self) -> usize {
        self.coins.len()
    }
}

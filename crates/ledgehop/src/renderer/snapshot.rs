use serde::Serialize;

use crate::components::platform::PlatformKind;
use crate::components::Facing;
use crate::core::geometry::Aabb;
use crate::game::{GameState, World};

/// Read-only copy of everything a renderer or HUD needs for one frame.
/// All rectangles are in world space; subtract `camera_offset` for screen x.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub state: GameState,
    pub frame: u64,
    pub camera_offset: f32,
    pub level_width: f32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub coins: Vec<Aabb>,
    pub platforms: Vec<PlatformView>,
    pub goal: Aabb,
    pub coins_collected: u32,
    pub coins_total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub rect: Aabb,
    pub facing: Facing,
    pub health: u8,
    pub max_health: u8,
    pub invincible: u32,
    pub on_ground: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub rect: Aabb,
    pub facing: Facing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformView {
    pub rect: Aabb,
    pub kind: PlatformKind,
}

impl FrameSnapshot {
    pub fn capture(state: GameState, world: &World) -> Self {
        let player = &world.player;
        Self {
            state,
            frame: world.frame,
            camera_offset: world.camera.offset,
            level_width: world.level.level_width,
            player: PlayerView {
                rect: *player.rect(),
                facing: player.facing,
                health: player.health,
                max_health: player.max_health,
                invincible: player.invincible,
                on_ground: player.on_ground(),
            },
            enemies: world
                .level
                .enemies
                .iter()
                .map(|e| EnemyView { rect: *e.rect(), facing: e.facing })
                .collect(),
            coins: world.level.coins.iter().map(|c| c.rect).collect(),
            platforms: world
                .level
                .platforms
                .iter()
                .map(|p| PlatformView { rect: p.rect, kind: p.kind })
                .collect(),
            goal: world.level.goal.rect,
            coins_collected: world.coins_collected,
            coins_total: world.level.coins_total(),
        }
    }

    /// Number of rectangles a packed frame needs: player, enemies, coins, goal, platforms.
    pub fn rect_count(&self) -> usize {
        1 + self.enemies.len() + self.coins.len() + 1 + self.platforms.len()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::level::TileGrid;

    fn world() -> World {
        let grid = TileGrid::from_rows(&["C..EG", "..B..", "#####"]).unwrap();
        World::new(&grid, &GameConfig::default()).unwrap()
    }

    #[test]
    fn captures_every_entity() {
        let snap = FrameSnapshot::capture(GameState::StartMenu, &world());
        assert_eq!(snap.platforms.len(), 6);
        assert_eq!(snap.enemies.len(), 1);
        assert_eq!(snap.coins.len(), 1);
        assert_eq!(snap.coins_total, 1);
        assert_eq!(snap.player.health, 3);
        assert_eq!(snap.level_width, 250.0);
        assert_eq!(snap.rect_count(), 10);
    }

    #[test]
    fn json_has_expected_fields() {
        let snap = FrameSnapshot::capture(GameState::Playing, &world());
        let json = snap.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["state"], "Playing");
        assert_eq!(value["player"]["facing"], "Right");
        assert_eq!(value["platforms"][0]["kind"], "Breakable");
        assert_eq!(value["goal"]["x"], 200.0);
    }
}

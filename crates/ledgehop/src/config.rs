//! Tunable constants for a platformer session.
//!
//! Every field has a default (60 fps, 960×540 viewport,
//! 50 px tiles). Games can override any subset from JSON:
//!
//! ```
//! let cfg = ledgehop::GameConfig::from_json(r#"{ "player": { "jump_speed": -14.0 } }"#).unwrap();
//! assert_eq!(cfg.player.jump_speed, -14.0);
//! assert_eq!(cfg.tile_width, 50.0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::keys;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config field `{field}` {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Gravity integration parameters shared by every kinematic body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to `vy` every frame (px/frame²).
    pub gravity: f32,
    /// Upper bound on downward speed (px/frame). Must stay below `tile_height` so a
    /// falling body cannot pass through a platform between two frames.
    pub terminal_vy: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            terminal_vy: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    /// Top-left corner of the player at the start of every attempt.
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Horizontal speed while a direction is held (px/frame).
    pub speed_x: f32,
    /// Vertical velocity applied on jump. Negative is upward.
    pub jump_speed: f32,
    pub max_health: u8,
    /// Frames of damage immunity after a hit.
    pub invincible_frames: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 70.0,
            spawn_x: 100.0,
            spawn_y: 150.0,
            speed_x: 5.0,
            jump_speed: -12.0,
            max_health: 3,
            invincible_frames: 60,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub width: f32,
    pub height: f32,
    /// Patrol speed magnitude (px/frame).
    pub speed: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 40.0,
            speed: 2.0,
        }
    }
}

/// Browser `KeyboardEvent.keyCode` values mapped to intents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<u32>,
    pub right: Vec<u32>,
    pub jump: Vec<u32>,
    pub start: Vec<u32>,
    pub restart: Vec<u32>,
    pub quit: Vec<u32>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec![keys::A, keys::ARROW_LEFT],
            right: vec![keys::D, keys::ARROW_RIGHT],
            jump: vec![keys::SPACE, keys::W, keys::ARROW_UP],
            start: vec![keys::ENTER, keys::SPACE],
            restart: vec![keys::R],
            quit: vec![keys::ESCAPE],
        }
    }
}

/// Configuration for a platformer session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds per simulation step (default: 1/60).
    pub fixed_dt: f32,
    /// Most steps a single host frame may run before backlog is dropped.
    pub max_steps_per_tick: u32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub tile_width: f32,
    pub tile_height: f32,
    /// How far below the viewport the player's top edge may sink before the attempt is lost.
    pub fall_margin: f32,
    /// Width of the camera dead-zone margin on each side of the viewport.
    pub scroll_area: f32,
    pub coin_size: f32,
    pub goal_width: f32,
    pub goal_height: f32,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bindings: KeyBindings,
    /// Rectangle records per packed frame buffer.
    pub max_records: usize,
    /// Game events per packed frame buffer.
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_tick: 10,
            viewport_width: 960.0,
            viewport_height: 540.0,
            tile_width: 50.0,
            tile_height: 50.0,
            fall_margin: 200.0,
            scroll_area: 300.0,
            coin_size: 20.0,
            goal_width: 50.0,
            goal_height: 50.0,
            physics: PhysicsConfig::default(),
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            bindings: KeyBindings::default(),
            max_records: 1024,
            max_events: 32,
        }
    }
}

fn positive(field: &'static str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: "must be a finite number greater than zero" })
    }
}

impl GameConfig {
    /// Parse a (possibly partial) config from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("fixed_dt", self.fixed_dt)?;
        positive("viewport_width", self.viewport_width)?;
        positive("viewport_height", self.viewport_height)?;
        positive("tile_width", self.tile_width)?;
        positive("tile_height", self.tile_height)?;
        positive("coin_size", self.coin_size)?;
        positive("goal_width", self.goal_width)?;
        positive("goal_height", self.goal_height)?;
        positive("physics.terminal_vy", self.physics.terminal_vy)?;
        positive("player.width", self.player.width)?;
        positive("player.height", self.player.height)?;
        positive("player.speed_x", self.player.speed_x)?;
        positive("enemy.width", self.enemy.width)?;
        positive("enemy.height", self.enemy.height)?;
        positive("enemy.speed", self.enemy.speed)?;

        if self.max_steps_per_tick == 0 {
            return Err(ConfigError::Invalid { field: "max_steps_per_tick", reason: "must be at least 1" });
        }
        if !(self.physics.gravity.is_finite() && self.physics.gravity >= 0.0) {
            return Err(ConfigError::Invalid { field: "physics.gravity", reason: "must be finite and non-negative" });
        }
        if !(self.player.jump_speed.is_finite() && self.player.jump_speed < 0.0) {
            return Err(ConfigError::Invalid { field: "player.jump_speed", reason: "must be negative (upward)" });
        }
        if self.physics.terminal_vy >= self.tile_height {
            return Err(ConfigError::Invalid { field: "physics.terminal_vy", reason: "must be less than tile_height" });
        }
        if -self.player.jump_speed >= self.tile_height {
            return Err(ConfigError::Invalid { field: "player.jump_speed", reason: "must be shallower than tile_height" });
        }
        if self.player.max_health == 0 {
            return Err(ConfigError::Invalid { field: "player.max_health", reason: "must be at least 1" });
        }
        if !(self.scroll_area.is_finite() && self.scroll_area >= 0.0 && self.scroll_area * 2.0 < self.viewport_width) {
            return Err(ConfigError::Invalid { field: "scroll_area", reason: "must leave a non-empty band inside the viewport" });
        }
        if !self.fall_margin.is_finite() {
            return Err(ConfigError::Invalid { field: "fall_margin", reason: "must be finite" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(r#"{ "tile_width": 32.0, "enemy": { "speed": 3.0 } }"#).unwrap();
        assert_eq!(cfg.tile_width, 32.0);
        assert_eq!(cfg.tile_height, 50.0);
        assert_eq!(cfg.enemy.speed, 3.0);
        assert_eq!(cfg.enemy.width, 40.0);
        assert_eq!(cfg.player.max_health, 3);
    }

    #[test]
    fn rejects_bad_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn rejects_downward_jump() {
        let err = GameConfig::from_json(r#"{ "player": { "jump_speed": 4.0 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "player.jump_speed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_fall_speed_that_skips_a_tile() {
        let err = GameConfig::from_json(r#"{ "physics": { "terminal_vy": 600.0, "gravity": 200.0 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "physics.terminal_vy"),
            other => panic!("unexpected error: {other}"),
        }

        // The bound follows tile_height, not the default
        let cfg = GameConfig {
            tile_height: 32.0,
            physics: PhysicsConfig { gravity: 0.5, terminal_vy: 32.0 },
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = GameConfig {
            tile_height: 32.0,
            physics: PhysicsConfig { gravity: 0.5, terminal_vy: 31.5 },
            ..GameConfig::default()
        };
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_jump_that_skips_a_tile() {
        let err = GameConfig::from_json(r#"{ "player": { "jump_speed": -50.0 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "player.jump_speed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_scroll_area_wider_than_half_viewport() {
        let cfg = GameConfig {
            scroll_area: 480.0,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_tile() {
        let cfg = GameConfig {
            tile_height: 0.0,
            ..GameConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("tile_height"));
    }
}

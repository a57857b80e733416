//! Headless side-scrolling platformer core.
//!
//! A [`Session`] owns one level source and drives attempts at it through the
//! start-menu / playing / game-over / level-complete state machine. Hosts feed it one
//! resolved [`Intent`] per simulated frame and read back a [`FrameSnapshot`] or a
//! packed [`FrameBuffer`].

pub mod api;
pub mod bridge;
pub mod components;
pub mod config;
pub mod core;
pub mod game;
pub mod input;
pub mod level;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::types::{EventRecord, GameEvent, GameOverCause};
pub use bridge::protocol::{FrameBuffer, ProtocolLayout};
pub use components::enemy::Enemy;
pub use components::platform::{Coin, Goal, Platform, PlatformKind};
pub use components::player::Player;
pub use components::Facing;
pub use config::{ConfigError, EnemyConfig, GameConfig, KeyBindings, PhysicsConfig, PlayerConfig};
pub use crate::core::geometry::{overlaps, Aabb};
pub use crate::core::time::FrameClock;
pub use game::{Flow, GameState, Session, SessionError, World};
pub use input::{InputEvent, InputQueue, Intent, KeyState};
pub use level::{Level, LevelError, Malformed, Tile, TileGrid};
pub use renderer::camera::ScrollCamera;
pub use renderer::instance::{RecordKind, RectRecord};
pub use renderer::snapshot::FrameSnapshot;
pub use systems::kinematics::{KinematicBody, StepReport};

use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Stable numeric codes for [`GameEvent::kind`]. Shared with the JS side.
pub mod kinds {
    pub const STARTED: u32 = 1;
    pub const COIN_COLLECTED: u32 = 2;
    pub const BLOCK_BROKEN: u32 = 3;
    pub const PLAYER_HIT: u32 = 4;
    pub const LEVEL_COMPLETE: u32 = 5;
    pub const GAME_OVER: u32 = 6;
    pub const RESTARTED: u32 = 7;
}

/// Why an attempt ended in `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum GameOverCause {
    OutOfHealth = 1,
    FellOut = 2,
}

impl GameOverCause {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Something that happened during a step, for audio and HUD collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    Started,
    /// `total` is the running count for this attempt.
    CoinCollected { total: u32 },
    /// Top-left corner of the destroyed block.
    BlockBroken { x: f32, y: f32 },
    /// `health` is what the player has left after the hit.
    PlayerHit { health: u8 },
    LevelComplete { coins: u32 },
    GameOver { cause: GameOverCause },
    Restarted,
}

impl GameEvent {
    pub fn kind(&self) -> u32 {
        match self {
            GameEvent::Started => kinds::STARTED,
            GameEvent::CoinCollected { .. } => kinds::COIN_COLLECTED,
            GameEvent::BlockBroken { .. } => kinds::BLOCK_BROKEN,
            GameEvent::PlayerHit { .. } => kinds::PLAYER_HIT,
            GameEvent::LevelComplete { .. } => kinds::LEVEL_COMPLETE,
            GameEvent::GameOver { .. } => kinds::GAME_OVER,
            GameEvent::Restarted => kinds::RESTARTED,
        }
    }

    /// Up to three payload values; unused slots are zero.
    pub fn payload(&self) -> [f32; 3] {
        match *self {
            GameEvent::CoinCollected { total } => [total as f32, 0.0, 0.0],
            GameEvent::BlockBroken { x, y } => [x, y, 0.0],
            GameEvent::PlayerHit { health } => [health as f32, 0.0, 0.0],
            GameEvent::LevelComplete { coins } => [coins as f32, 0.0, 0.0],
            GameEvent::GameOver { cause } => [cause.as_u8() as f32, 0.0, 0.0],
            GameEvent::Started | GameEvent::Restarted => [0.0; 3],
        }
    }

    pub fn to_record(&self) -> EventRecord {
        let [a, b, c] = self.payload();
        EventRecord {
            kind: self.kind() as f32,
            a,
            b,
            c,
        }
    }
}

/// Wire form of a [`GameEvent`]: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;
}

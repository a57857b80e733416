use serde::Serialize;

/// Top-level mode of a session. Only `Playing` advances the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[repr(u8)]
pub enum GameState {
    #[default]
    StartMenu = 0,
    Playing = 1,
    GameOver = 2,
    LevelComplete = 3,
}

impl GameState {
    /// Wire code written into the frame header.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// True for the two end-of-attempt states that accept a restart.
    pub fn is_finished(self) -> bool {
        matches!(self, GameState::GameOver | GameState::LevelComplete)
    }
}

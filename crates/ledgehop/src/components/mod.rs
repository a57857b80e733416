pub mod enemy;
pub mod platform;
pub mod player;

use serde::Serialize;

/// Horizontal facing, for sprite flipping and enemy patrol direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a horizontal velocity or intent; `None` when it is zero.
    pub fn from_sign(v: f32) -> Option<Facing> {
        if v > 0.0 {
            Some(Facing::Right)
        } else if v < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

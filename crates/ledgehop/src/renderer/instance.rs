use bytemuck::{Pod, Zeroable};

use crate::components::Facing;
use crate::core::geometry::Aabb;

/// What a packed rectangle depicts. The JS renderer picks a sprite by this code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RecordKind {
    Player = 1,
    Enemy = 2,
    Coin = 3,
    Solid = 4,
    Breakable = 5,
    Goal = 6,
}

impl RecordKind {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// One drawable rectangle in the shared frame buffer.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RectRecord {
    /// [`RecordKind`] code.
    pub kind: f32,
    /// Top-left corner in world space.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// -1.0 facing left, 1.0 facing right, 0.0 for static geometry.
    pub facing: f32,
    /// 1.0 while the player is invincible (renderer blinks the sprite).
    pub flash: f32,
    pub reserved: f32,
}

impl RectRecord {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(kind: RecordKind, rect: &Aabb) -> Self {
        Self {
            kind: kind.as_u8() as f32,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            ..Self::default()
        }
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = facing.sign();
        self
    }

    pub fn with_flash(mut self, on: bool) -> Self {
        self.flash = if on { 1.0 } else { 0.0 };
        self
    }

    pub fn as_floats(&self) -> [f32; Self::FLOATS] {
        bytemuck::cast(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_matches_float_count() {
        assert_eq!(std::mem::size_of::<RectRecord>(), RectRecord::STRIDE_BYTES);
    }

    #[test]
    fn floats_follow_field_order() {
        let rec = RectRecord::new(RecordKind::Enemy, &Aabb::new(1.0, 2.0, 3.0, 4.0))
            .with_facing(Facing::Left)
            .with_flash(true);
        assert_eq!(rec.as_floats(), [2.0, 1.0, 2.0, 3.0, 4.0, -1.0, 1.0, 0.0]);
    }
}

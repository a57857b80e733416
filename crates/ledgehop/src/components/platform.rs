use serde::Serialize;

use crate::core::geometry::Aabb;

/// How a platform reacts to being struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlatformKind {
    /// Blocks from every direction, forever.
    Solid,
    /// Blocks from above and the sides; destroyed when hit from below.
    Breakable,
}

/// Static level geometry occupying one rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Platform {
    pub rect: Aabb,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn solid(rect: Aabb) -> Self {
        Self { rect, kind: PlatformKind::Solid }
    }

    pub fn breakable(rect: Aabb) -> Self {
        Self { rect, kind: PlatformKind::Breakable }
    }

    pub fn is_breakable(&self) -> bool {
        self.kind == PlatformKind::Breakable
    }
}

/// A pickup. Collected coins are compacted out of the level's coin list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coin {
    pub rect: Aabb,
    pub collected: bool,
}

impl Coin {
    pub fn new(rect: Aabb) -> Self {
        Self { rect, collected: false }
    }
}

/// The level exit. Touching it completes the level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Goal {
    pub rect: Aabb,
}

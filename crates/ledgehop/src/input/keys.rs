//! Browser `KeyboardEvent.keyCode` values used by the default bindings.

pub const ENTER: u32 = 13;
pub const ESCAPE: u32 = 27;
pub const SPACE: u32 = 32;
pub const ARROW_LEFT: u32 = 37;
pub const ARROW_UP: u32 = 38;
pub const ARROW_RIGHT: u32 = 39;
pub const A: u32 = 65;
pub const D: u32 = 68;
pub const R: u32 = 82;
pub const W: u32 = 87;

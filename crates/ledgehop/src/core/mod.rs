pub mod geometry;
pub mod time;

pub use geometry::{overlaps, Aabb};
pub use time::FrameClock;

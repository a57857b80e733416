//! Read-only views of the simulation for renderers: camera, snapshot, packed records.

pub mod camera;
pub mod instance;
pub mod snapshot;

pub use camera::ScrollCamera;
pub use instance::{RecordKind, RectRecord};
pub use snapshot::{EnemyView, FrameSnapshot, PlatformView, PlayerView};

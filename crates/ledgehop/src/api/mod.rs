pub mod types;

pub use types::{EventRecord, GameEvent, GameOverCause};

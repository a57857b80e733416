pub mod intent;
pub mod keys;
pub mod queue;

pub use intent::{Intent, KeyState};
pub use queue::{InputEvent, InputQueue};

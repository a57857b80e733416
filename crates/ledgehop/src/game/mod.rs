//! Game state machine and per-attempt world.

pub mod error;
pub mod session;
pub mod state;
pub mod world;

pub use error::SessionError;
pub use session::{Flow, Session};
pub use state::GameState;
pub use world::{Outcome, World};

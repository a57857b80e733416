use thiserror::Error;

use crate::config::ConfigError;
use crate::level::LevelError;

/// Why a session could not be created.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Level(#[from] LevelError),
}

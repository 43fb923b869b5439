//! Simulation errors.

use warden_core::ConfigError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    /// The character's configuration is unusable; it was not spawned or changed.
    #[error("invalid character configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("no character with id {0}")]
    UnknownCharacter(u32),
}

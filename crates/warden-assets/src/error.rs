//! Asset storage errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// No file for the requested asset.
    #[error("asset '{0}' not found")]
    NotFound(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize asset '{stem}': {source}")]
    Serialize {
        stem: String,
        source: serde_json::Error,
    },

    /// Two files claim the same id, usually a copied asset file.
    #[error("asset id {id} is used by both '{first}' and '{second}'")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },
}

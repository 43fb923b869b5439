//! The identity block shared by every asset.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Id, name and description of an asset.
///
/// The id is read-only from outside: it is either loaded from disk or
/// generated once by [`ensure_identifier`](Self::ensure_identifier).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    #[serde(default)]
    unique_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    /// Set when the in-memory asset differs from what is on disk.
    #[serde(skip)]
    dirty: bool,
}

impl AssetInfo {
    /// A fresh, unsaved info block. Has no id until validated.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn reset_name(&mut self) {
        self.name.clear();
    }

    pub fn reset_description(&mut self) {
        self.description.clear();
    }

    /// Assign a random v4 UUID if no id is set yet.
    ///
    /// Returns `true` only on the call that actually assigned the id; that
    /// call also marks the asset dirty. Every other call is a no-op.
    pub fn ensure_identifier(&mut self) -> bool {
        if !self.unique_id.is_empty() {
            return false;
        }
        self.unique_id = Uuid::new_v4().to_string();
        self.dirty = true;
        info!(id = %self.unique_id, name = %self.name, "assigned asset id");
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Call once the asset has been written out.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

/// An asset type built on top of [`AssetInfo`].
pub trait DataAsset {
    fn info(&self) -> &AssetInfo;

    fn info_mut(&mut self) -> &mut AssetInfo;

    /// Reset the type's own fields to their defaults.
    ///
    /// Leaves id, name and description alone. Must be idempotent.
    fn reset(&mut self) {}

    fn unique_id(&self) -> &str {
        self.info().unique_id()
    }

    fn ensure_identifier(&mut self) -> bool {
        self.info_mut().ensure_identifier()
    }
}

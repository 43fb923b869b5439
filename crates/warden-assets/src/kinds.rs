//! Concrete asset types.

use serde::{Deserialize, Serialize};

use warden_core::types::Position;
use warden_fsm::Blackboard;

use crate::asset::{AssetInfo, DataAsset};

/// An inventory item definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    #[serde(flatten)]
    pub info: AssetInfo,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    #[serde(default)]
    pub value: u32,
}

fn default_max_stack() -> u32 {
    1
}

impl ItemData {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            info: AssetInfo::new(name, description),
            tags: Vec::new(),
            max_stack: default_max_stack(),
            value: 0,
        }
    }
}

impl DataAsset for ItemData {
    fn info(&self) -> &AssetInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut AssetInfo {
        &mut self.info
    }

    fn reset(&mut self) {
        self.tags.clear();
        self.max_stack = default_max_stack();
        self.value = 0;
    }
}

/// A named patrol route that can be handed to a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatrolRouteData {
    #[serde(flatten)]
    pub info: AssetInfo,
    #[serde(default)]
    pub waypoints: Vec<Position>,
}

impl PatrolRouteData {
    pub fn new(name: impl Into<String>, waypoints: Vec<Position>) -> Self {
        Self {
            info: AssetInfo::new(name, ""),
            waypoints,
        }
    }

    /// Blackboard for a character that should walk this route.
    pub fn to_blackboard(&self) -> Blackboard {
        Blackboard::with_waypoints(self.waypoints.clone())
    }
}

impl DataAsset for PatrolRouteData {
    fn info(&self) -> &AssetInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut AssetInfo {
        &mut self.info
    }

    fn reset(&mut self) {
        self.waypoints.clear();
    }
}

/// Any asset file, read without knowing its concrete type.
///
/// Fields other than the info block are kept verbatim so a validation pass
/// can write the file back without losing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericAsset {
    #[serde(flatten)]
    pub info: AssetInfo,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DataAsset for GenericAsset {
    fn info(&self) -> &AssetInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut AssetInfo {
        &mut self.info
    }
}

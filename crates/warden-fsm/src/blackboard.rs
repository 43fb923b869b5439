//! Shared context read by character states.

use serde::{Deserialize, Serialize};

use warden_core::types::Position;

/// Per-character configuration that states read when they are built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blackboard {
    /// Ordered patrol route. `None` when the character has no route at all.
    #[serde(default)]
    pub waypoints: Option<Vec<Position>>,
}

impl Blackboard {
    pub fn with_waypoints(waypoints: Vec<Position>) -> Self {
        Self {
            waypoints: Some(waypoints),
        }
    }
}

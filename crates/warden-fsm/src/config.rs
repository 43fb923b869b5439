//! Tuning for individual states.

use serde::{Deserialize, Serialize};

use warden_core::constants::{DEFAULT_BLEND_SECS, IDLE_CLIP, WALK_CLIP};
use warden_core::ConfigError;

/// Patrol tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatrolConfig {
    /// Clip to cross-fade into on entry.
    pub walk_clip: String,
    /// Cross-fade duration in seconds.
    pub walk_blend_secs: f64,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            walk_clip: WALK_CLIP.to_string(),
            walk_blend_secs: DEFAULT_BLEND_SECS,
        }
    }
}

/// Idle tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleConfig {
    pub idle_clip: String,
    pub idle_blend_secs: f64,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            idle_clip: IDLE_CLIP.to_string(),
            idle_blend_secs: DEFAULT_BLEND_SECS,
        }
    }
}

pub(crate) fn check_blend(field: &'static str, secs: f64) -> Result<(), ConfigError> {
    if secs.is_finite() && secs >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("blend duration must be a non-negative number, got {secs}"),
        })
    }
}

//! Events emitted by the simulation for presentation layers.

use serde::{Deserialize, Serialize};

use crate::enums::StateKind;
use crate::types::Position;

/// Something observable happened to a character this tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CharacterEvent {
    /// Character spawned into the world.
    Spawned { character_id: u32 },
    /// State machine switched behavior.
    StateChanged {
        character_id: u32,
        from: StateKind,
        to: StateKind,
    },
    /// A new destination was issued to the character's agent.
    DestinationSet {
        character_id: u32,
        destination: Position,
    },
    /// Animation cross-fade started.
    CrossFade {
        character_id: u32,
        clip: String,
        blend_secs: f64,
    },
}

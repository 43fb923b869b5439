//! Commands that drive character state transitions.
//!
//! Transition rules live outside the state machine: whoever owns the
//! simulation decides when a character patrols or halts and queues a command.
//! Commands are processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// External requests for a single character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CharacterCommand {
    /// Start (or restart) patrolling the character's blackboard route.
    Patrol { character_id: u32 },
    /// Stop and stand idle.
    Halt { character_id: u32 },
    /// Pause the whole simulation.
    Pause,
    /// Resume a paused simulation.
    Resume,
}

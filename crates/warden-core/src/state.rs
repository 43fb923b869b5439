//! World snapshot: the complete visible state produced after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{SimPhase, StateKind};
use crate::events::CharacterEvent;
use crate::types::{Position, SimTime};

/// Everything a viewer needs to draw one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub characters: Vec<CharacterView>,
    pub events: Vec<CharacterEvent>,
}

/// One character as seen from outside.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterView {
    pub character_id: u32,
    pub name: String,
    pub position: Position,
    pub state: StateKind,
    /// Current agent destination, if any.
    pub destination: Option<Position>,
    /// Index of the waypoint being walked to while patrolling.
    pub waypoint_index: Option<usize>,
    /// Clip currently playing (or being blended in).
    pub clip: String,
    /// Cross-fade progress, 0.0 = just started, 1.0 = complete.
    pub blend: f64,
}

//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which behavior a character's state machine is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateKind {
    /// Standing still, no destination.
    #[default]
    Idle,
    /// Walking a cyclic waypoint route.
    Patrol,
}

/// Overall simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    #[default]
    Running,
    Paused,
}

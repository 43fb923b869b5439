//! ECS components owned by the simulation.
//!
//! Agent and animator components live in their own modules because they
//! implement the state capabilities.

use warden_fsm::{Blackboard, StateMachine};

/// Identity of a simulated character.
#[derive(Debug, Clone)]
pub struct Character {
    pub character_id: u32,
    pub name: String,
}

/// The character's behavior and the blackboard its states read from.
#[derive(Debug)]
pub struct Behavior {
    pub machine: StateMachine,
    pub blackboard: Blackboard,
}

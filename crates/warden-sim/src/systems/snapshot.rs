//! Snapshot system: queries the ECS world and builds a WorldSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use warden_core::enums::SimPhase;
use warden_core::events::CharacterEvent;
use warden_core::state::{CharacterView, WorldSnapshot};
use warden_core::types::{Position, SimTime};

use crate::agent::SteeringAgent;
use crate::animator::CrossFadeAnimator;
use crate::components::{Behavior, Character};

/// Build a complete WorldSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: SimPhase,
    events: Vec<CharacterEvent>,
) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        phase,
        characters: build_characters(world),
        events,
    }
}

/// One view per character, ordered by character id.
fn build_characters(world: &World) -> Vec<CharacterView> {
    let mut query = world.query::<(
        &Character,
        &Position,
        &Behavior,
        &SteeringAgent,
        &CrossFadeAnimator,
    )>();
    let mut views: Vec<CharacterView> = query
        .iter()
        .map(|(_, (character, pos, behavior, agent, animator))| CharacterView {
            character_id: character.character_id,
            name: character.name.clone(),
            position: *pos,
            state: behavior.machine.current_kind(),
            destination: agent.destination(),
            waypoint_index: behavior.machine.current().waypoint_index(),
            clip: animator.clip().to_string(),
            blend: animator.blend(),
        })
        .collect();
    views.sort_by_key(|v| v.character_id);
    views
}

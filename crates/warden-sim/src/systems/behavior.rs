//! Behavior system: forwards one tick to every character's state machine.
//!
//! Each machine borrows its own entity's agent and animator for the call.

use hecs::World;

use warden_core::events::CharacterEvent;
use warden_fsm::StateContext;

use crate::agent::SteeringAgent;
use crate::animator::CrossFadeAnimator;
use crate::components::{Behavior, Character};

/// Tick every state machine once and report new commands they issued.
pub fn run(world: &mut World, events: &mut Vec<CharacterEvent>) {
    for (_entity, (character, behavior, agent, animator)) in world.query_mut::<(
        &Character,
        &mut Behavior,
        &mut SteeringAgent,
        &mut CrossFadeAnimator,
    )>() {
        let issued = agent.issued();
        let fades = animator.fades();

        behavior
            .machine
            .tick(&mut StateContext::new(&mut *agent, &mut *animator));

        collect_events(character.character_id, agent, animator, issued, fades, events);
    }
}

/// Push events for destinations and cross-fades issued since the given counts.
pub fn collect_events(
    character_id: u32,
    agent: &SteeringAgent,
    animator: &CrossFadeAnimator,
    issued_before: u64,
    fades_before: u64,
    events: &mut Vec<CharacterEvent>,
) {
    if animator.fades() > fades_before {
        events.push(CharacterEvent::CrossFade {
            character_id,
            clip: animator.clip().to_string(),
            blend_secs: animator.blend_secs(),
        });
    }
    if agent.issued() > issued_before {
        if let Some(destination) = agent.destination() {
            events.push(CharacterEvent::DestinationSet {
                character_id,
                destination,
            });
        }
    }
}

//! Entity spawn factories and route generation.

use std::f64::consts::TAU;

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use warden_core::enums::StateKind;
use warden_core::types::Position;
use warden_fsm::{
    Blackboard, CharacterState, IdleState, PatrolState, StateContext, StateMachine,
};

use crate::agent::SteeringAgent;
use crate::animator::CrossFadeAnimator;
use crate::components::{Behavior, Character};
use crate::config::SimConfig;
use crate::error::SimError;

/// Build a fresh state of the requested kind.
///
/// Patrol construction reads the blackboard and fails without waypoints.
pub fn build_state(
    kind: StateKind,
    blackboard: &Blackboard,
    config: &SimConfig,
) -> Result<Box<dyn CharacterState>, SimError> {
    let state: Box<dyn CharacterState> = match kind {
        StateKind::Idle => Box::new(IdleState::new(config.idle.clone())?),
        StateKind::Patrol => Box::new(PatrolState::new(blackboard, config.patrol.clone())?),
    };
    Ok(state)
}

/// Spawn a character with its full component bundle and enter `initial`.
///
/// Everything is built before anything is spawned, so a configuration error
/// leaves the world untouched.
pub fn spawn_character(
    world: &mut World,
    config: &SimConfig,
    character: Character,
    position: Position,
    blackboard: Blackboard,
    initial: StateKind,
) -> Result<hecs::Entity, SimError> {
    let mut agent = SteeringAgent::new(config.agent, position)?;
    let mut animator = CrossFadeAnimator::default();
    let state = build_state(initial, &blackboard, config)?;

    let machine = StateMachine::start(state, &mut StateContext::new(&mut agent, &mut animator));

    Ok(world.spawn((
        character,
        position,
        agent,
        animator,
        Behavior {
            machine,
            blackboard,
        },
    )))
}

/// Generate a closed patrol loop of `points` waypoints around `center`.
///
/// Waypoints are spread evenly by angle with a random radius between 60% and
/// 100% of `radius`, so the route is always a convex-ish loop.
pub fn random_route(
    rng: &mut ChaCha8Rng,
    center: Position,
    radius: f64,
    points: usize,
) -> Vec<Position> {
    let offset = rng.gen_range(0.0..TAU);
    (0..points)
        .map(|i| {
            let angle = offset + TAU * i as f64 / points as f64;
            let r = radius * rng.gen_range(0.6..=1.0);
            Position::new(center.x + r * angle.sin(), center.y + r * angle.cos(), center.z)
        })
        .collect()
}

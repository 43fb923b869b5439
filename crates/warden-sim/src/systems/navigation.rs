//! Navigation system: moves agents and syncs their Position component.

use hecs::World;

use warden_core::constants::DT;
use warden_core::types::Position;

use crate::agent::SteeringAgent;

/// Step every agent one tick and copy its position back to the entity.
pub fn run(world: &mut World) {
    for (_entity, (pos, agent)) in world.query_mut::<(&mut Position, &mut SteeringAgent)>() {
        agent.step(DT);
        *pos = agent.position();
    }
}

//! Animation system: advances cross-fade progress.

use hecs::World;

use warden_core::constants::DT;

use crate::animator::CrossFadeAnimator;

pub fn run(world: &mut World) {
    for (_entity, animator) in world.query_mut::<&mut CrossFadeAnimator>() {
        animator.advance(DT);
    }
}

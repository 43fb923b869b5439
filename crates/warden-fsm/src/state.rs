//! The character state abstraction.

use warden_core::enums::StateKind;

use crate::capabilities::{AnimationTrigger, NavigationAgent};

/// Capabilities lent to a state for one lifecycle call.
pub struct StateContext<'a> {
    pub agent: &'a mut dyn NavigationAgent,
    pub animator: &'a mut dyn AnimationTrigger,
}

impl<'a> StateContext<'a> {
    pub fn new(
        agent: &'a mut dyn NavigationAgent,
        animator: &'a mut dyn AnimationTrigger,
    ) -> Self {
        Self { agent, animator }
    }
}

/// One behavior of a character.
///
/// A state is either active (its owner forwards `tick` once per simulation
/// tick) or not referenced at all. States never pick their successor;
/// transitions are decided by whoever owns the [`StateMachine`](crate::StateMachine).
pub trait CharacterState: Send + Sync {
    fn kind(&self) -> StateKind;

    /// Entry action, called once when the state becomes active.
    fn enter(&mut self, ctx: &mut StateContext<'_>);

    /// Called once per tick while active.
    fn tick(&mut self, ctx: &mut StateContext<'_>);

    /// Exit action, called once before the state is dropped.
    fn exit(&mut self, _ctx: &mut StateContext<'_>) {}

    /// Route progress, for states that follow waypoints.
    fn waypoint_index(&self) -> Option<usize> {
        None
    }
}

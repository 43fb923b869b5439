//! Holds the active state and forwards lifecycle calls to it.

use tracing::info;

use warden_core::enums::StateKind;

use crate::state::{CharacterState, StateContext};

/// Owner of exactly one active [`CharacterState`].
pub struct StateMachine {
    current: Box<dyn CharacterState>,
}

impl StateMachine {
    /// Activate `initial` (runs its entry action).
    pub fn start(mut initial: Box<dyn CharacterState>, ctx: &mut StateContext<'_>) -> Self {
        initial.enter(ctx);
        Self { current: initial }
    }

    /// Forward one tick to the active state.
    pub fn tick(&mut self, ctx: &mut StateContext<'_>) {
        self.current.tick(ctx);
    }

    /// Exit the active state, drop it, and enter `next`.
    /// Returns the kind of the state that was left.
    pub fn transition_to(
        &mut self,
        next: Box<dyn CharacterState>,
        ctx: &mut StateContext<'_>,
    ) -> StateKind {
        let from = self.current.kind();
        self.current.exit(ctx);
        self.current = next;
        self.current.enter(ctx);
        info!(?from, to = ?self.current.kind(), "state transition");
        from
    }

    pub fn current_kind(&self) -> StateKind {
        self.current.kind()
    }

    pub fn current(&self) -> &dyn CharacterState {
        self.current.as_ref()
    }
}

impl std::fmt::Debug for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current.kind())
            .finish()
    }
}

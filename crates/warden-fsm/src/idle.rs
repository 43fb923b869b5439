//! Idle: stand still.

use warden_core::enums::StateKind;
use warden_core::ConfigError;

use crate::config::{check_blend, IdleConfig};
use crate::state::{CharacterState, StateContext};

#[derive(Debug, Clone)]
pub struct IdleState {
    config: IdleConfig,
}

impl IdleState {
    pub fn new(config: IdleConfig) -> Result<Self, ConfigError> {
        check_blend("idle_blend_secs", config.idle_blend_secs)?;
        Ok(Self { config })
    }
}

impl CharacterState for IdleState {
    fn kind(&self) -> StateKind {
        StateKind::Idle
    }

    fn enter(&mut self, ctx: &mut StateContext<'_>) {
        ctx.animator
            .cross_fade(&self.config.idle_clip, self.config.idle_blend_secs);
        ctx.agent.reset_path();
    }

    fn tick(&mut self, _ctx: &mut StateContext<'_>) {}
}

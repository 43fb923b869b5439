//! Patrol: walk a waypoint route forever, wrapping at the end.

use tracing::debug;

use warden_core::enums::StateKind;
use warden_core::types::Position;
use warden_core::ConfigError;

use crate::blackboard::Blackboard;
use crate::capabilities::NavigationAgent;
use crate::config::{check_blend, PatrolConfig};
use crate::state::{CharacterState, StateContext};

/// Cycles through the blackboard's waypoints.
///
/// The route is copied out of the blackboard at construction and never
/// changes afterwards, so `current` always indexes into it.
#[derive(Debug, Clone)]
pub struct PatrolState {
    waypoints: Vec<Position>,
    current: usize,
    config: PatrolConfig,
}

impl PatrolState {
    /// Build a patrol over the blackboard's route.
    ///
    /// Fails with [`ConfigError::NoWaypoints`] when the route is missing or
    /// empty: a patrol with nowhere to go is an authoring error.
    pub fn new(blackboard: &Blackboard, config: PatrolConfig) -> Result<Self, ConfigError> {
        let waypoints = match &blackboard.waypoints {
            Some(w) if !w.is_empty() => w.clone(),
            _ => return Err(ConfigError::NoWaypoints),
        };
        check_blend("walk_blend_secs", config.walk_blend_secs)?;

        Ok(Self {
            waypoints,
            current: 0,
            config,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_waypoint(&self) -> Position {
        self.waypoints[self.current]
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    /// Move on to the next waypoint, wrapping to the first after the last.
    fn advance(&mut self) -> Position {
        self.current = (self.current + 1) % self.waypoints.len();
        self.current_waypoint()
    }
}

/// Agent is within stopping distance and not still computing a path.
pub fn has_arrived(agent: &dyn NavigationAgent) -> bool {
    agent.remaining_distance() <= agent.stopping_distance() && !agent.path_pending()
}

impl CharacterState for PatrolState {
    fn kind(&self) -> StateKind {
        StateKind::Patrol
    }

    fn enter(&mut self, ctx: &mut StateContext<'_>) {
        ctx.animator
            .cross_fade(&self.config.walk_clip, self.config.walk_blend_secs);
        ctx.agent.set_destination(self.current_waypoint());
    }

    fn tick(&mut self, ctx: &mut StateContext<'_>) {
        if !has_arrived(&*ctx.agent) {
            return;
        }
        let next = self.advance();
        debug!(index = self.current, ?next, "patrol waypoint reached, advancing");
        ctx.agent.set_destination(next);
    }

    fn waypoint_index(&self) -> Option<usize> {
        Some(self.current)
    }
}

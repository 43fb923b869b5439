//! Straight-line navigation agent.
//!
//! Stands in for a navmesh agent: no obstacles, no path search, constant
//! speed. It does model the asynchronous part of path computation, reporting
//! `path_pending` for a configurable number of ticks after each new
//! destination.

use warden_core::types::Position;
use warden_core::ConfigError;
use warden_fsm::NavigationAgent;

use crate::config::AgentConfig;

/// ECS component: walks its owner toward a destination.
#[derive(Debug, Clone)]
pub struct SteeringAgent {
    config: AgentConfig,
    position: Position,
    destination: Option<Position>,
    /// Ticks left before the current path is ready.
    pending_ticks: u32,
    /// Number of destinations issued so far.
    issued: u64,
}

impl SteeringAgent {
    pub fn new(config: AgentConfig, position: Position) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            position,
            destination: None,
            pending_ticks: 0,
            issued: 0,
        })
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn destination(&self) -> Option<Position> {
        self.destination
    }

    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Advance one tick of `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        if self.pending_ticks > 0 {
            self.pending_ticks -= 1;
            return;
        }
        if let Some(dest) = self.destination {
            self.position = self.position.step_toward(&dest, self.config.speed * dt);
        }
    }
}

impl NavigationAgent for SteeringAgent {
    fn set_destination(&mut self, destination: Position) {
        self.destination = Some(destination);
        self.pending_ticks = self.config.path_latency_ticks;
        self.issued += 1;
    }

    fn reset_path(&mut self) {
        self.destination = None;
        self.pending_ticks = 0;
    }

    fn remaining_distance(&self) -> f64 {
        match self.destination {
            Some(dest) => self.position.distance_to(&dest),
            None => 0.0,
        }
    }

    fn stopping_distance(&self) -> f64 {
        self.config.stopping_distance
    }

    fn path_pending(&self) -> bool {
        self.pending_ticks > 0
    }
}

//! Simulation configuration.

use serde::{Deserialize, Serialize};

use warden_core::constants::{AGENT_PATH_LATENCY_TICKS, AGENT_SPEED, AGENT_STOPPING_DISTANCE};
use warden_core::ConfigError;
use warden_fsm::{IdleConfig, PatrolConfig};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub agent: AgentConfig,
    pub patrol: PatrolConfig,
    pub idle: IdleConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            agent: AgentConfig::default(),
            patrol: PatrolConfig::default(),
            idle: IdleConfig::default(),
        }
    }
}

/// Movement tuning for the built-in navigation agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Walking speed (m/s).
    pub speed: f64,
    /// Arrival threshold (m).
    pub stopping_distance: f64,
    /// Ticks spent "computing" a path after each new destination.
    pub path_latency_ticks: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speed: AGENT_SPEED,
            stopping_distance: AGENT_STOPPING_DISTANCE,
            path_latency_ticks: AGENT_PATH_LATENCY_TICKS,
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "speed",
                reason: format!("must be a positive number, got {}", self.speed),
            });
        }
        if !(self.stopping_distance.is_finite() && self.stopping_distance >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "stopping_distance",
                reason: format!("must be non-negative, got {}", self.stopping_distance),
            });
        }
        Ok(())
    }
}

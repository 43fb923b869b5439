//! Headless character simulation for WARDEN.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces WorldSnapshots for viewers and tools.

pub mod agent;
pub mod animator;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod systems;
pub mod world_setup;

pub use warden_core as core;
pub use config::{AgentConfig, SimConfig};
pub use engine::SimulationEngine;
pub use error::SimError;

#[cfg(test)]
mod tests;

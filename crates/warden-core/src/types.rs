//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in world space (meters).
/// x = East, y = North, z = Up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance to another position in meters (3D).
    pub fn distance_to(&self, other: &Position) -> f64 {
        DVec3::from(*self).distance(DVec3::from(*other))
    }

    /// Horizontal distance (ignoring height).
    pub fn horizontal_distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Move toward `target` by at most `max_step` meters.
    /// Lands exactly on the target when it is within reach.
    pub fn step_toward(&self, target: &Position, max_step: f64) -> Position {
        let from = DVec3::from(*self);
        let to = DVec3::from(*target);
        let offset = to - from;
        let dist = offset.length();
        if dist <= max_step || dist == 0.0 {
            return *target;
        }
        (from + offset / dist * max_step).into()
    }
}

impl From<Position> for DVec3 {
    fn from(p: Position) -> Self {
        DVec3::new(p.x, p.y, p.z)
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Position::new(v.x, v.y, v.z)
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

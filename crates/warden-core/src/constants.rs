//! Simulation constants and tuning defaults.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Animation ---

/// Clip played while a character walks between waypoints.
pub const WALK_CLIP: &str = "Walk_N";

/// Clip played while a character stands still.
pub const IDLE_CLIP: &str = "Idle";

/// Default cross-fade duration (seconds) when switching clips.
pub const DEFAULT_BLEND_SECS: f64 = 0.1;

// --- Navigation ---

/// Walking speed of a navigation agent (m/s).
pub const AGENT_SPEED: f64 = 3.5;

/// Distance to the destination at which an agent counts as arrived (m).
pub const AGENT_STOPPING_DISTANCE: f64 = 0.5;

/// Ticks an agent spends computing a path after receiving a destination.
pub const AGENT_PATH_LATENCY_TICKS: u32 = 2;

// --- Route generation ---

/// Default number of waypoints in a generated patrol loop.
pub const GENERATED_ROUTE_POINTS: usize = 4;

/// Default radius (m) of a generated patrol loop.
pub const GENERATED_ROUTE_RADIUS: f64 = 20.0;

//! Capabilities a character state needs from its host.
//!
//! Path computation and animation playback are someone else's job; states
//! only issue commands and read back a handful of values.

use warden_core::types::Position;

/// Something that can walk a character toward a destination.
pub trait NavigationAgent {
    /// Start moving toward `destination`. Path computation may finish later;
    /// until then [`path_pending`](Self::path_pending) reports `true`.
    fn set_destination(&mut self, destination: Position);

    /// Drop the current destination and stand still.
    fn reset_path(&mut self);

    /// Distance left along the current path (meters).
    fn remaining_distance(&self) -> f64;

    /// Distance at which the agent counts as arrived (meters).
    fn stopping_distance(&self) -> f64;

    /// Whether a path is still being computed.
    fn path_pending(&self) -> bool;
}

/// Something that can blend a character's animation into a named clip.
pub trait AnimationTrigger {
    /// Begin a cross-fade to `clip` over `blend_secs` seconds. Non-blocking.
    fn cross_fade(&mut self, clip: &str, blend_secs: f64);
}

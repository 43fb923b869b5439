//! Configuration errors raised while building character behavior.

/// Authoring mistakes detected when a character is assembled.
///
/// These are not runtime conditions: a character whose configuration fails
/// must not be started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A patrol was requested but the blackboard holds no waypoints.
    #[error("no waypoints found on the blackboard")]
    NoWaypoints,

    /// A tuning value is outside its valid range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

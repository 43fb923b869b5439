//! Character behavior state machines for WARDEN.
//!
//! States are plain data driven through two narrow capabilities: a navigation
//! agent and an animation trigger. No ECS dependency; the owner lends the
//! capabilities for each lifecycle call through a [`StateContext`].

pub mod blackboard;
pub mod capabilities;
pub mod config;
pub mod idle;
pub mod machine;
pub mod patrol;
pub mod state;

pub use blackboard::Blackboard;
pub use capabilities::{AnimationTrigger, NavigationAgent};
pub use config::{IdleConfig, PatrolConfig};
pub use idle::IdleState;
pub use machine::StateMachine;
pub use patrol::PatrolState;
pub use state::{CharacterState, StateContext};

pub use warden_core as core;

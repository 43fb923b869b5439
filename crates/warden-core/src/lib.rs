//! Core types and definitions for WARDEN.
//!
//! This crate defines the vocabulary shared across all other crates:
//! positions, commands, snapshots, events, constants and configuration errors.
//! It has no dependency on the ECS or on any asset storage.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::ConfigError;

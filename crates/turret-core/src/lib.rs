//! Core types and definitions for the turret controller.
//!
//! This crate defines the vocabulary shared across all other crates:
//! modes, snapshots, configuration, components, events and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

pub use error::{ConfigError, Result};

#[cfg(test)]
mod tests;

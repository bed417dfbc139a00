//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! Turret controllers live outside the world and are passed in explicitly.

pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod turret;

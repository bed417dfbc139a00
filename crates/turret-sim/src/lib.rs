//! Turret simulation for a static defense unit.
//!
//! Holds the per-tick turret controller, the host interfaces it depends on,
//! and a headless hecs-backed engine that runs controllers against a world.

pub mod controller;
pub mod engine;
pub mod host;
pub mod orient;
pub mod sense;
pub mod systems;
pub mod world_setup;

pub use controller::TurretController;
pub use engine::{SimConfig, SimulationEngine, Turret};
pub use host::{Candidate, ProjectileOrder, TurretHost, WorldHost};
pub use systems::snapshot::FrameReport;
pub use turret_core as core;

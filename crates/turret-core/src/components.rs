//! ECS components for hecs entities.
//!
//! Components are plain data structs with no logic.
//! Game logic lives in systems, not components.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World position and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Linear velocity (units per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub linear: Vec3,
}

/// Category label used by turrets to find what to engage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag(pub String);

impl Tag {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}

/// Marks an entity as a turret base.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TurretBase;

/// A spawned shot. Flight is owned by whoever consumes these entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: String,
}

/// Beam damage received by an entity.
/// `slow` holds the strongest slow applied this tick and is cleared by movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BeamExposure {
    pub damage_taken: f32,
    pub slow: f32,
}

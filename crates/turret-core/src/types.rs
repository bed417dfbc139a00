//! Fundamental geometric and simulation types.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MUZZLE_OFFSET;

/// The minimal read of world state a turret decides on each tick.
/// Rebuilt every tick and dropped after evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldSnapshot {
    /// At least one candidate of the engagement tag exists.
    pub target_visible: bool,
    /// Distance to the nearest candidate, infinite if none.
    pub nearest_distance: f32,
    /// Seconds until the weapon may fire again. May be negative.
    pub cooldown_remaining: f32,
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self {
            target_visible: false,
            nearest_distance: f32::INFINITY,
            cooldown_remaining: 0.0,
        }
    }
}

/// The transforms a turret reads and writes: its base, its steerable head,
/// and where shots leave from.
/// y is up; a head with identity rotation faces +Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurretRig {
    pub base: Vec3,
    pub head: Quat,
    /// Fire origin relative to the base, rotated with the head.
    pub muzzle_offset: Vec3,
}

impl TurretRig {
    pub fn new(base: Vec3) -> Self {
        Self {
            base,
            head: Quat::IDENTITY,
            muzzle_offset: Vec3::from_array(DEFAULT_MUZZLE_OFFSET),
        }
    }

    /// World-space fire origin: position and orientation.
    pub fn fire_origin(&self) -> (Vec3, Quat) {
        (self.base + self.head * self.muzzle_offset, self.head)
    }

    /// Current head heading in radians about +Y.
    pub fn yaw(&self) -> f32 {
        self.head.to_euler(EulerRot::YXZ).0
    }
}

impl Default for TurretRig {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt as f64;
    }
}

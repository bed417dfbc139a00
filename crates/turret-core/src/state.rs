//! Turret status views produced for the host after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::TurretMode;

/// Externally visible state of one turret controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TurretStatus {
    pub mode: TurretMode,
    pub cooldown_remaining: f32,
    /// Distance to the nearest candidate at the last sense step, if any.
    pub nearest_distance: Option<f32>,
    pub has_target: bool,
    /// Head heading in radians about +Y.
    pub yaw: f32,
}

//! Enumeration types used throughout the controller.

use serde::{Deserialize, Serialize};

/// Behavioral mode of a turret. Recomputed from scratch every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurretMode {
    /// No visible target; head relaxes toward its rest heading.
    #[default]
    Idle,
    /// Target locked and followed, cooldown counting down.
    Tracking,
    /// Target within range and cooldown elapsed; weapon discharges this tick.
    Firing,
}

impl TurretMode {
    /// Every mode, in declaration order.
    pub const ALL: [TurretMode; 3] = [TurretMode::Idle, TurretMode::Tracking, TurretMode::Firing];

    /// Whether this mode holds a target lock.
    pub fn is_engaged(self) -> bool {
        !matches!(self, TurretMode::Idle)
    }
}

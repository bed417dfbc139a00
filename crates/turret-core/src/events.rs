//! Events emitted by turret controllers each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Something a turret did or noticed. `H` is the host's entity handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TurretEvent<H> {
    /// A new nearest target was locked.
    TargetAcquired { target: H, distance: f32 },
    /// The lock was released on going idle.
    TargetLost { target: H },
    /// A projectile was spawned toward the target.
    ProjectileFired { target: H, kind: String, origin: Vec3 },
    /// Beam damage was applied to the target.
    BeamApplied { target: H, damage: f32, slow: f32 },
    /// The locked target vanished before it could be used.
    StaleTarget { target: H },
}

impl<H> TurretEvent<H> {
    /// The entity this event concerns.
    pub fn target(&self) -> &H {
        match self {
            TurretEvent::TargetAcquired { target, .. }
            | TurretEvent::TargetLost { target }
            | TurretEvent::ProjectileFired { target, .. }
            | TurretEvent::BeamApplied { target, .. }
            | TurretEvent::StaleTarget { target } => target,
        }
    }

    /// Re-key the event onto another handle type.
    pub fn map_target<U>(self, f: impl FnOnce(H) -> U) -> TurretEvent<U> {
        match self {
            TurretEvent::TargetAcquired { target, distance } => TurretEvent::TargetAcquired {
                target: f(target),
                distance,
            },
            TurretEvent::TargetLost { target } => TurretEvent::TargetLost { target: f(target) },
            TurretEvent::ProjectileFired {
                target,
                kind,
                origin,
            } => TurretEvent::ProjectileFired {
                target: f(target),
                kind,
                origin,
            },
            TurretEvent::BeamApplied {
                target,
                damage,
                slow,
            } => TurretEvent::BeamApplied {
                target: f(target),
                damage,
                slow,
            },
            TurretEvent::StaleTarget { target } => TurretEvent::StaleTarget { target: f(target) },
        }
    }
}

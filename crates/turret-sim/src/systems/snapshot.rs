//! Frame report builder: collects turret status and events after a tick.

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use turret_core::components::Projectile;
use turret_core::events::TurretEvent;
use turret_core::state::TurretStatus;
use turret_core::types::SimTime;

use crate::engine::Turret;

/// One turret's state in a frame report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurretView {
    /// Turret entity id (hecs entity bits).
    pub id: u64,
    pub status: TurretStatus,
}

/// Everything the host needs to know after one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub time: SimTime,
    pub turrets: Vec<TurretView>,
    /// Events emitted during the tick, targets keyed by entity bits.
    pub events: Vec<TurretEvent<u64>>,
    /// Projectile entities alive after cleanup.
    pub projectiles: u32,
}

/// Stable numeric id for an entity.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// Build the frame report, draining `events`.
pub fn build_report(
    world: &World,
    time: &SimTime,
    turrets: &[Turret],
    events: &mut Vec<TurretEvent<Entity>>,
) -> FrameReport {
    let turrets = turrets
        .iter()
        .map(|turret| TurretView {
            id: entity_id(turret.entity),
            status: turret.controller.status(),
        })
        .collect();

    let events = events
        .drain(..)
        .map(|event| event.map_target(entity_id))
        .collect();

    let projectiles = {
        let mut query = world.query::<&Projectile>();
        query.iter().count() as u32
    };

    FrameReport {
        time: *time,
        turrets,
        events,
        projectiles,
    }
}

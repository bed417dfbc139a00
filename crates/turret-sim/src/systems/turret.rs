//! Turret system: ticks every turret controller against the world.

use hecs::{Entity, World};

use turret_core::components::Transform;
use turret_core::events::TurretEvent;

use crate::engine::Turret;
use crate::host::WorldHost;

/// Run every turret for one tick, then write each head rotation back to
/// the turret entity's Transform.
pub fn run(world: &mut World, turrets: &mut [Turret], dt: f32, events: &mut Vec<TurretEvent<Entity>>) {
    for turret in turrets.iter_mut() {
        let base = world
            .get::<&Transform>(turret.entity)
            .map(|transform| transform.position)
            .ok();
        // A turret whose base was removed stays dormant.
        let Some(base) = base else {
            continue;
        };
        turret.rig.base = base;

        let mut host = WorldHost::new(world);
        turret
            .controller
            .tick(dt, &mut turret.rig, &mut host, events);

        if let Ok(mut transform) = world.get::<&mut Transform>(turret.entity) {
            transform.rotation = turret.rig.head;
        }
    }
}

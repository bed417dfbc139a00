//! Cleanup system: removes entities that are out of bounds, queued for removal,
//! or projectiles that have expired or whose target no longer exists.
//!
//! Projectiles have no flight model here; they live for `PROJECTILE_LIFETIME`
//! seconds or until their target goes, whichever comes first.

use hecs::{Entity, World};

use turret_core::components::{Projectile, Tag, Transform};
use turret_core::constants::WORLD_RADIUS;

use crate::host::Homing;

/// Despawn queued entities plus anything cleanup decides is dead.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, dt: f32, queued: &mut Vec<Entity>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    despawn_buffer.append(queued);

    let radius_sq = WORLD_RADIUS * WORLD_RADIUS;

    // Remove tagged entities that wandered beyond WORLD_RADIUS from origin.
    for (entity, (transform, _tag)) in world.query_mut::<(&Transform, &Tag)>() {
        if transform.position.length_squared() > radius_sq {
            despawn_buffer.push(entity);
        }
    }

    // Age projectiles and drop the expired ones.
    for (entity, (_projectile, homing)) in world.query_mut::<(&Projectile, &mut Homing)>() {
        homing.expires_in -= dt;
        if homing.expires_in <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    // Remove projectiles chasing a target that is gone or about to go.
    {
        let mut query = world.query::<(&Projectile, &Homing)>();
        let orphaned: Vec<Entity> = query
            .iter()
            .filter(|(entity, (_, homing))| {
                !despawn_buffer.contains(entity)
                    && (!world.contains(homing.target)
                        || despawn_buffer.contains(&homing.target))
            })
            .map(|(entity, _)| entity)
            .collect();
        despawn_buffer.extend(orphaned);
    }

    // Despawn collected entities.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

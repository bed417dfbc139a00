//! Entity spawn factories for setting up the simulation world.
//!
//! Creates turret bases and enemy entities with the component bundles the
//! turret host expects.

use std::f32::consts::TAU;

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use turret_core::components::*;

/// Spawn a turret base at `base`.
pub fn spawn_turret(world: &mut World, base: Vec3) -> Entity {
    world.spawn((TurretBase, Transform::at(base)))
}

/// Spawn an entity tagged `tag` at `position` moving with `velocity`.
pub fn spawn_enemy(world: &mut World, tag: &str, position: Vec3, velocity: Vec3) -> Entity {
    world.spawn((
        Tag::new(tag),
        Transform::at(position),
        Velocity { linear: velocity },
        BeamExposure::default(),
    ))
}

/// Spawn `count` enemies on a ground-level ring of `radius` around `center`,
/// at random bearings, each heading for the center at `speed`.
pub fn spawn_enemy_ring(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tag: &str,
    center: Vec3,
    count: usize,
    radius: f32,
    speed: f32,
) -> Vec<Entity> {
    (0..count)
        .map(|_| {
            let bearing: f32 = rng.gen_range(0.0..TAU);
            let offset = Vec3::new(bearing.sin(), 0.0, bearing.cos()) * radius;
            let heading = -offset.normalize_or_zero();
            spawn_enemy(world, tag, center + offset, heading * speed)
        })
        .collect()
}

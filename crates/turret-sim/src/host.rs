//! Host interfaces a turret controller depends on.
//!
//! The controller never touches an entity registry directly. Whatever runs it
//! supplies a `TurretHost`: an in-memory double in tests, or `WorldHost` over
//! a hecs world.

use std::fmt;

use glam::{Quat, Vec3};
use hecs::{Entity, World};

use turret_core::components::{BeamExposure, Projectile, Tag, Transform};
use turret_core::constants::PROJECTILE_LIFETIME;

/// One entity returned by a tag query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<H> {
    pub handle: H,
    pub position: Vec3,
}

/// Request to spawn a projectile and send it after `target`.
/// Fire-and-forget: the controller keeps no handle to the projectile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileOrder<H> {
    pub kind: String,
    pub origin: Vec3,
    pub rotation: Quat,
    pub target: H,
}

/// Everything a turret needs from the runtime around it.
pub trait TurretHost {
    type Handle: Copy + PartialEq + fmt::Debug;

    /// All live entities carrying `tag`, with their positions.
    fn tagged(&self, tag: &str) -> Vec<Candidate<Self::Handle>>;

    /// Current position of `target`, or `None` if it no longer exists.
    fn position_of(&self, target: Self::Handle) -> Option<Vec3>;

    fn spawn_projectile(&mut self, order: ProjectileOrder<Self::Handle>);

    fn apply_beam(&mut self, target: Self::Handle, damage: f32, slow: f32);
}

/// Steering order attached to spawned projectiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Homing {
    pub target: Entity,
    /// Seconds left before cleanup removes the projectile.
    pub expires_in: f32,
}

/// `TurretHost` backed by a hecs world.
pub struct WorldHost<'w> {
    world: &'w mut World,
}

impl<'w> WorldHost<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }
}

impl TurretHost for WorldHost<'_> {
    type Handle = Entity;

    fn tagged(&self, tag: &str) -> Vec<Candidate<Entity>> {
        let mut query = self.world.query::<(&Tag, &Transform)>();
        query
            .iter()
            .filter(|(_, (t, _))| t.is(tag))
            .map(|(entity, (_, transform))| Candidate {
                handle: entity,
                position: transform.position,
            })
            .collect()
    }

    fn position_of(&self, target: Entity) -> Option<Vec3> {
        self.world
            .get::<&Transform>(target)
            .ok()
            .map(|transform| transform.position)
    }

    fn spawn_projectile(&mut self, order: ProjectileOrder<Entity>) {
        self.world.spawn((
            Projectile { kind: order.kind },
            Transform {
                position: order.origin,
                rotation: order.rotation,
            },
            Homing {
                target: order.target,
                expires_in: PROJECTILE_LIFETIME,
            },
        ));
    }

    fn apply_beam(&mut self, target: Entity, damage: f32, slow: f32) {
        if let Ok(mut exposure) = self.world.get::<&mut BeamExposure>(target) {
            exposure.damage_taken += damage;
            exposure.slow = exposure.slow.max(slow);
            return;
        }
        // Target without exposure tracking yet; a despawned one is ignored.
        let _ = self.world.insert_one(
            target,
            BeamExposure {
                damage_taken: damage,
                slow,
            },
        );
    }
}

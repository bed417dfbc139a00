//! Kinematic integration system.
//!
//! Updates Transform from Velocity each tick: position += velocity * dt,
//! scaled down by any beam slow applied during the previous tick.

use hecs::World;

use turret_core::components::{BeamExposure, Transform, Velocity};

/// Run kinematic integration for all entities with Transform + Velocity.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (transform, vel, exposure)) in
        world.query_mut::<(&mut Transform, &Velocity, Option<&mut BeamExposure>)>()
    {
        let speed_scale = match exposure {
            Some(exposure) => {
                let scale = 1.0 - exposure.slow;
                // Slow lasts only while the beam keeps hitting.
                exposure.slow = 0.0;
                scale
            }
            None => 1.0,
        };
        transform.position += vel.linear * speed_scale * dt;
    }
}

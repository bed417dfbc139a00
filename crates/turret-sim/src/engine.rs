//! Simulation engine: a headless host for turret controllers.
//!
//! `SimulationEngine` owns the hecs world, the turrets, and the sim clock,
//! runs all systems, and produces `FrameReport`s. Completely headless,
//! enabling deterministic testing.

use glam::Vec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use turret_core::config::TurretConfig;
use turret_core::enums::TurretMode;
use turret_core::error::Result;
use turret_core::events::TurretEvent;
use turret_core::types::{SimTime, TurretRig};
use turret_decision::DecisionNode;

use crate::controller::TurretController;
use crate::systems;
use crate::systems::snapshot::FrameReport;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// A turret placed in the world. Stored by the engine, NOT as an ECS component,
/// so systems can borrow the world while ticking controllers.
#[derive(Debug, Clone)]
pub struct Turret {
    pub entity: Entity,
    pub rig: TurretRig,
    pub controller: TurretController<Entity>,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    turrets: Vec<Turret>,
    events: Vec<TurretEvent<Entity>>,
    pending_despawn: Vec<Entity>,
    despawn_buffer: Vec<Entity>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            turrets: Vec::new(),
            events: Vec::new(),
            pending_despawn: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Place a turret at `base` running the standard engagement policy.
    pub fn add_turret(&mut self, base: Vec3, config: TurretConfig) -> Result<Entity> {
        let controller = TurretController::new(config)?;
        Ok(self.place(base, controller))
    }

    /// Place a turret at `base` running a custom policy.
    pub fn add_turret_with_policy(
        &mut self,
        base: Vec3,
        config: TurretConfig,
        policy: DecisionNode<TurretMode>,
    ) -> Result<Entity> {
        let controller = TurretController::with_policy(config, policy)?;
        Ok(self.place(base, controller))
    }

    fn place(&mut self, base: Vec3, controller: TurretController<Entity>) -> Entity {
        let entity = world_setup::spawn_turret(&mut self.world, base);
        debug!(?entity, ?base, range = controller.config().range, "turret placed");
        self.turrets.push(Turret {
            entity,
            rig: TurretRig::new(base),
            controller,
        });
        entity
    }

    /// Spawn an enemy tagged `tag`.
    pub fn spawn_enemy(&mut self, tag: &str, position: Vec3, velocity: Vec3) -> Entity {
        world_setup::spawn_enemy(&mut self.world, tag, position, velocity)
    }

    /// Spawn a seeded ring of inbound enemies around `center`.
    pub fn spawn_enemy_ring(
        &mut self,
        tag: &str,
        center: Vec3,
        count: usize,
        radius: f32,
        speed: f32,
    ) -> Vec<Entity> {
        world_setup::spawn_enemy_ring(
            &mut self.world,
            &mut self.rng,
            tag,
            center,
            count,
            radius,
            speed,
        )
    }

    /// Queue an entity for removal at the end of the next tick.
    pub fn despawn(&mut self, entity: Entity) {
        self.pending_despawn.push(entity);
    }

    /// Remove an entity immediately. Returns false if it was already gone.
    pub fn despawn_now(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    /// Advance the simulation by `dt` seconds and return the resulting report.
    pub fn tick(&mut self, dt: f32) -> FrameReport {
        self.run_systems(dt);
        self.time.advance(dt);
        systems::snapshot::build_report(&self.world, &self.time, &self.turrets, &mut self.events)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the placed turrets.
    pub fn turrets(&self) -> &[Turret] {
        &self.turrets
    }

    /// Look up the turret whose base is `entity`.
    pub fn turret(&self, entity: Entity) -> Option<&Turret> {
        self.turrets.iter().find(|turret| turret.entity == entity)
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Movement integration
        systems::movement::run(&mut self.world, dt);
        // 2. Turrets (sense, decide, turn, fire)
        systems::turret::run(&mut self.world, &mut self.turrets, dt, &mut self.events);
        // 3. Cleanup (queued, OOB, expired or orphaned projectiles)
        systems::cleanup::run(
            &mut self.world,
            dt,
            &mut self.pending_despawn,
            &mut self.despawn_buffer,
        );
    }
}

//! Turret controller: sense, classify, act, once per tick.
//!
//! Each tick the controller scans for the nearest candidate, hands a
//! `WorldSnapshot` to its decision tree, and carries out the resulting mode:
//! relax the head when idle, follow the target while tracking, discharge the
//! weapon when firing. The mode is derived from the snapshot every tick, never
//! patched incrementally.

use glam::Vec3;
use tracing::{debug, trace, warn};

use turret_core::config::{TurretConfig, WeaponKind};
use turret_core::enums::TurretMode;
use turret_core::error::Result;
use turret_core::events::TurretEvent;
use turret_core::state::TurretStatus;
use turret_core::types::{TurretRig, WorldSnapshot};
use turret_decision::{engagement_policy, DecisionNode};

use crate::host::{ProjectileOrder, TurretHost};
use crate::orient;
use crate::sense;

/// Controller for one static turret. `H` is the host's entity handle.
#[derive(Debug, Clone)]
pub struct TurretController<H> {
    config: TurretConfig,
    policy: DecisionNode<TurretMode>,
    mode: TurretMode,
    /// Seconds until the next projectile may leave. Not clamped; may go negative.
    cooldown: f32,
    /// Locked target. Never owned; checked for presence before every use.
    target: Option<H>,
    nearest_distance: f32,
    last_yaw: f32,
}

impl<H: Copy + PartialEq + std::fmt::Debug> TurretController<H> {
    /// Build a controller running the standard engagement policy for `config.range`.
    pub fn new(config: TurretConfig) -> Result<Self> {
        let policy = engagement_policy(config.range);
        Self::with_policy(config, policy)
    }

    /// Build a controller with a custom decision policy.
    pub fn with_policy(config: TurretConfig, policy: DecisionNode<TurretMode>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            policy,
            mode: TurretMode::Idle,
            cooldown: 0.0,
            target: None,
            nearest_distance: f32::INFINITY,
            last_yaw: 0.0,
        })
    }

    pub fn config(&self) -> &TurretConfig {
        &self.config
    }

    pub fn policy(&self) -> &DecisionNode<TurretMode> {
        &self.policy
    }

    pub fn mode(&self) -> TurretMode {
        self.mode
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown
    }

    pub fn target(&self) -> Option<H> {
        self.target
    }

    pub fn status(&self) -> TurretStatus {
        TurretStatus {
            mode: self.mode,
            cooldown_remaining: self.cooldown,
            nearest_distance: self
                .nearest_distance
                .is_finite()
                .then_some(self.nearest_distance),
            has_target: self.target.is_some(),
            yaw: self.last_yaw,
        }
    }

    /// Advance the turret by `elapsed` seconds. Returns the mode in effect
    /// after the tick.
    pub fn tick<T>(
        &mut self,
        elapsed: f32,
        rig: &mut TurretRig,
        host: &mut T,
        events: &mut Vec<TurretEvent<H>>,
    ) -> TurretMode
    where
        T: TurretHost<Handle = H>,
    {
        // 1. Sense
        let candidates = host.tagged(&self.config.engagement_tag);
        let sighting = sense::nearest(rig.base, &candidates);
        self.nearest_distance = sighting.distance;

        // 2. Classify
        let snapshot = WorldSnapshot {
            target_visible: sighting.target.is_some(),
            nearest_distance: sighting.distance,
            cooldown_remaining: self.cooldown,
        };
        let mode = self.policy.evaluate(&snapshot);
        trace!(?snapshot, steps = ?self.policy.trace(&snapshot), "turret decision");
        if mode != self.mode {
            debug!(from = ?self.mode, to = ?mode, distance = sighting.distance, "turret mode change");
        }
        self.mode = mode;

        // 3. Act
        match (mode, sighting.target) {
            (TurretMode::Tracking, Some(nearest)) => {
                if self.lock_on(nearest, sighting.distance, elapsed, rig, host, events) {
                    self.cooldown -= elapsed;
                }
            }
            (TurretMode::Firing, Some(nearest)) => {
                if self.lock_on(nearest, sighting.distance, elapsed, rig, host, events) {
                    self.fire(nearest, elapsed, rig, host, events);
                }
            }
            // Idle, or a custom policy engaging with nothing in sight.
            _ => self.idle(elapsed, rig, events),
        }

        self.last_yaw = rig.yaw();
        self.mode
    }

    fn idle(&mut self, elapsed: f32, rig: &mut TurretRig, events: &mut Vec<TurretEvent<H>>) {
        self.mode = TurretMode::Idle;
        if let Some(previous) = self.target.take() {
            debug!(entity = ?previous, "turret released target");
            events.push(TurretEvent::TargetLost { target: previous });
        }
        let rest = orient::rest_rotation(self.config.rest_yaw);
        rig.head = orient::turn_toward(rig.head, rest, self.config.turn_speed, elapsed);
    }

    /// Lock `nearest` and turn toward it. Returns false, leaving the turret
    /// idle for this tick, if the target has already vanished.
    fn lock_on<T>(
        &mut self,
        nearest: H,
        distance: f32,
        elapsed: f32,
        rig: &mut TurretRig,
        host: &T,
        events: &mut Vec<TurretEvent<H>>,
    ) -> bool
    where
        T: TurretHost<Handle = H>,
    {
        let Some(position) = host.position_of(nearest) else {
            warn!(entity = ?nearest, "turret target vanished before use");
            if let Some(previous) = self.target.take() {
                if previous != nearest {
                    debug!(entity = ?previous, "turret released target");
                    events.push(TurretEvent::TargetLost { target: previous });
                }
            }
            events.push(TurretEvent::StaleTarget { target: nearest });
            self.mode = TurretMode::Idle;
            return false;
        };

        if self.target != Some(nearest) {
            debug!(entity = ?nearest, distance, "turret acquired target");
            events.push(TurretEvent::TargetAcquired {
                target: nearest,
                distance,
            });
            self.target = Some(nearest);
        }

        self.face(position, elapsed, rig);
        true
    }

    fn face(&self, position: Vec3, elapsed: f32, rig: &mut TurretRig) {
        if let Some(desired) = orient::look_rotation(rig.base, position) {
            rig.head = orient::turn_toward(rig.head, desired, self.config.turn_speed, elapsed);
        }
    }

    fn fire<T>(
        &mut self,
        target: H,
        elapsed: f32,
        rig: &TurretRig,
        host: &mut T,
        events: &mut Vec<TurretEvent<H>>,
    ) where
        T: TurretHost<Handle = H>,
    {
        match &self.config.weapon {
            WeaponKind::Projectile { kind } => {
                let (origin, rotation) = rig.fire_origin();
                host.spawn_projectile(ProjectileOrder {
                    kind: kind.clone(),
                    origin,
                    rotation,
                    target,
                });
                self.cooldown = self.config.fire_interval();
                debug!(entity = ?target, %kind, "turret fired");
                events.push(TurretEvent::ProjectileFired {
                    target,
                    kind: kind.clone(),
                    origin,
                });
            }
            WeaponKind::Beam {
                damage_per_second,
                slow_factor,
            } => {
                let damage = damage_per_second * elapsed;
                host.apply_beam(target, damage, *slow_factor);
                events.push(TurretEvent::BeamApplied {
                    target,
                    damage,
                    slow: *slow_factor,
                });
            }
        }
    }
}

//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- World bounds ---

/// Entities farther than this from the origin are removed by cleanup.
pub const WORLD_RADIUS: f32 = 200.0;

// --- Turret defaults ---

/// Default sensing/engagement range (distance units).
pub const DEFAULT_RANGE: f32 = 15.0;

/// Default fire rate (shots per second).
pub const DEFAULT_FIRE_RATE: f32 = 1.0;

/// Default head turn speed (interpolation factor per second).
pub const DEFAULT_TURN_SPEED: f32 = 10.0;

/// Default category a turret engages.
pub const DEFAULT_ENGAGEMENT_TAG: &str = "Enemy";

/// Default projectile kind spawned when firing.
pub const DEFAULT_PROJECTILE_KIND: &str = "Bullet";

/// Fire origin relative to the turret base, in head space (+Z is forward).
pub const DEFAULT_MUZZLE_OFFSET: [f32; 3] = [0.0, 1.5, 1.0];

/// Seconds a spawned projectile stays in the world before cleanup removes it.
pub const PROJECTILE_LIFETIME: f32 = 3.0;

// --- Beam weapon ---

/// Damage per second dealt by the beam variant.
pub const BEAM_DAMAGE_PER_SECOND: f32 = 30.0;

/// Fraction of speed removed from a target while the beam holds it.
pub const BEAM_SLOW_FACTOR: f32 = 0.5;

// --- Enemies ---

/// Default inbound speed for scenario enemies (units per second).
pub const ENEMY_SPEED: f32 = 4.0;

//! Turret configuration.
//!
//! Every field has a default taken from `constants`, so a JSON document only
//! needs to name the fields it overrides. Validation happens once, when a
//! controller is built; a validated config can never yield a non-finite
//! cooldown.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, Result};

/// What the turret discharges on a Firing tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WeaponKind {
    /// Spawn one projectile per shot and reset the cooldown.
    Projectile { kind: String },
    /// Continuous damage-over-time beam. Never resets the cooldown.
    Beam {
        damage_per_second: f32,
        slow_factor: f32,
    },
}

impl Default for WeaponKind {
    fn default() -> Self {
        WeaponKind::Projectile {
            kind: DEFAULT_PROJECTILE_KIND.to_string(),
        }
    }
}

impl WeaponKind {
    /// Beam weapon with the stock damage and slow values.
    pub fn beam() -> Self {
        WeaponKind::Beam {
            damage_per_second: BEAM_DAMAGE_PER_SECOND,
            slow_factor: BEAM_SLOW_FACTOR,
        }
    }
}

/// Per-turret settings, fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurretConfig {
    /// Sensing/engagement range.
    pub range: f32,
    /// Shots per second.
    pub fire_rate: f32,
    /// Head interpolation speed (fraction of remaining turn per second).
    pub turn_speed: f32,
    /// Category of entities this turret engages.
    pub engagement_tag: String,
    pub weapon: WeaponKind,
    /// Heading the head relaxes to when idle (radians about +Y).
    pub rest_yaw: f32,
}

impl Default for TurretConfig {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE,
            fire_rate: DEFAULT_FIRE_RATE,
            turn_speed: DEFAULT_TURN_SPEED,
            engagement_tag: DEFAULT_ENGAGEMENT_TAG.to_string(),
            weapon: WeaponKind::default(),
            rest_yaw: 0.0,
        }
    }
}

impl TurretConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TurretConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would produce non-finite timers or headings.
    pub fn validate(&self) -> Result<()> {
        // A subnormal rate passes the sign check but its interval overflows.
        if !(self.fire_rate.is_finite() && self.fire_rate > 0.0 && self.fire_interval().is_finite())
        {
            return Err(ConfigError::InvalidFireRate(self.fire_rate));
        }
        if !(self.range.is_finite() && self.range >= 0.0) {
            return Err(ConfigError::InvalidRange(self.range));
        }
        if !(self.turn_speed.is_finite() && self.turn_speed > 0.0) {
            return Err(ConfigError::InvalidTurnSpeed(self.turn_speed));
        }
        if !self.rest_yaw.is_finite() {
            return Err(ConfigError::InvalidRestYaw(self.rest_yaw));
        }
        if self.engagement_tag.is_empty() {
            return Err(ConfigError::EmptyName("engagement tag"));
        }
        match &self.weapon {
            WeaponKind::Projectile { kind } => {
                if kind.is_empty() {
                    return Err(ConfigError::EmptyName("projectile kind"));
                }
            }
            WeaponKind::Beam {
                damage_per_second,
                slow_factor,
            } => {
                if !(damage_per_second.is_finite() && *damage_per_second >= 0.0) {
                    return Err(ConfigError::InvalidBeamDamage(*damage_per_second));
                }
                if !(0.0..=1.0).contains(slow_factor) {
                    return Err(ConfigError::InvalidSlowFactor(*slow_factor));
                }
            }
        }
        Ok(())
    }

    /// Seconds between projectile shots.
    pub fn fire_interval(&self) -> f32 {
        1.0 / self.fire_rate
    }
}

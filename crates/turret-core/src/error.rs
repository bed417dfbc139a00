//! Errors raised while building a turret.

use thiserror::Error;

/// A turret configuration that cannot drive a controller.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("fire rate must be a positive finite number with a finite interval, got {0}")]
    InvalidFireRate(f32),

    #[error("engagement range must be a non-negative finite number, got {0}")]
    InvalidRange(f32),

    #[error("turn speed must be a positive finite number, got {0}")]
    InvalidTurnSpeed(f32),

    #[error("rest yaw must be finite, got {0}")]
    InvalidRestYaw(f32),

    #[error("beam damage must be a non-negative finite number, got {0}")]
    InvalidBeamDamage(f32),

    #[error("beam slow factor must lie in [0, 1], got {0}")]
    InvalidSlowFactor(f32),

    #[error("{0} must not be empty")]
    EmptyName(&'static str),

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::{Quat, Vec3};

    use crate::config::{TurretConfig, WeaponKind};
    use crate::constants::*;
    use crate::enums::TurretMode;
    use crate::error::ConfigError;
    use crate::events::TurretEvent;
    use crate::types::{SimTime, TurretRig, WorldSnapshot};

    #[test]
    fn test_default_config_matches_stock_turret() {
        let config = TurretConfig::default();
        assert_eq!(config.range, 15.0);
        assert_eq!(config.fire_rate, 1.0);
        assert_eq!(config.turn_speed, 10.0);
        assert_eq!(config.engagement_tag, "Enemy");
        assert_eq!(
            config.weapon,
            WeaponKind::Projectile {
                kind: "Bullet".to_string()
            }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fire_interval_is_reciprocal_of_rate() {
        let config = TurretConfig {
            fire_rate: 2.0,
            ..Default::default()
        };
        assert!((config.fire_interval() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_fire_rate_rejected() {
        let config = TurretConfig {
            fire_rate: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFireRate(r)) if r == 0.0
        ));
    }

    #[test]
    fn test_tiny_fire_rate_rejected() {
        // 1 / 1e-39 overflows f32, which would leave an infinite cooldown.
        let config = TurretConfig {
            fire_rate: 1e-39,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFireRate(_))
        ));

        let slow = TurretConfig {
            fire_rate: 1e-6,
            ..Default::default()
        };
        assert!(slow.validate().is_ok());
        assert!(slow.fire_interval().is_finite());
    }

    #[test]
    fn test_negative_and_nan_fire_rate_rejected() {
        for rate in [-1.0, f32::NAN, f32::INFINITY] {
            let config = TurretConfig {
                fire_rate: rate,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidFireRate(_))),
                "fire rate {rate} should be rejected"
            );
        }
    }

    #[test]
    fn test_bad_range_and_turn_speed_rejected() {
        let config = TurretConfig {
            range: -0.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

        let config = TurretConfig {
            turn_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTurnSpeed(_))
        ));
    }

    #[test]
    fn test_empty_names_rejected() {
        let config = TurretConfig {
            engagement_tag: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyName("engagement tag"))
        ));

        let config = TurretConfig {
            weapon: WeaponKind::Projectile {
                kind: String::new(),
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyName("projectile kind"))
        ));
    }

    #[test]
    fn test_beam_bounds() {
        let config = TurretConfig {
            weapon: WeaponKind::beam(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = TurretConfig {
            weapon: WeaponKind::Beam {
                damage_per_second: 30.0,
                slow_factor: 1.5,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSlowFactor(_))
        ));

        let config = TurretConfig {
            weapon: WeaponKind::Beam {
                damage_per_second: -3.0,
                slow_factor: 0.5,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBeamDamage(_))
        ));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = TurretConfig::from_json(r#"{ "range": 20.0, "fire_rate": 4.0 }"#).unwrap();
        assert_eq!(config.range, 20.0);
        assert_eq!(config.fire_rate, 4.0);
        assert_eq!(config.turn_speed, DEFAULT_TURN_SPEED);
        assert_eq!(config.engagement_tag, DEFAULT_ENGAGEMENT_TAG);
    }

    #[test]
    fn test_from_json_beam_weapon() {
        let json = r#"{
            "weapon": { "type": "Beam", "damage_per_second": 12.0, "slow_factor": 0.25 }
        }"#;
        let config = TurretConfig::from_json(json).unwrap();
        assert_eq!(
            config.weapon,
            WeaponKind::Beam {
                damage_per_second: 12.0,
                slow_factor: 0.25
            }
        );
    }

    #[test]
    fn test_from_json_validates() {
        let err = TurretConfig::from_json(r#"{ "fire_rate": -2.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFireRate(_)));
        assert!(err.to_string().contains("fire rate"));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = TurretConfig::from_json("{ range: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_default_snapshot_has_nothing_visible() {
        let snap = WorldSnapshot::default();
        assert!(!snap.target_visible);
        assert!(snap.nearest_distance.is_infinite());
        assert_eq!(snap.cooldown_remaining, 0.0);
    }

    #[test]
    fn test_fire_origin_rotates_with_head() {
        let mut rig = TurretRig::new(Vec3::new(1.0, 0.0, 1.0));
        rig.muzzle_offset = Vec3::new(0.0, 1.0, 2.0);

        let (origin, rotation) = rig.fire_origin();
        assert!((origin - Vec3::new(1.0, 1.0, 3.0)).length() < 1e-5);
        assert_eq!(rotation, Quat::IDENTITY);

        // Quarter turn about +Y swings forward (+Z) onto +X.
        rig.head = Quat::from_rotation_y(FRAC_PI_2);
        let (origin, _) = rig.fire_origin();
        assert!((origin - Vec3::new(3.0, 1.0, 1.0)).length() < 1e-5);
        assert!((rig.yaw() - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_mode_engagement() {
        assert!(!TurretMode::Idle.is_engaged());
        assert!(TurretMode::Tracking.is_engaged());
        assert!(TurretMode::Firing.is_engaged());
        assert_eq!(TurretMode::default(), TurretMode::Idle);
    }

    #[test]
    fn test_event_map_target_keeps_payload() {
        let event: TurretEvent<u32> = TurretEvent::BeamApplied {
            target: 7,
            damage: 0.5,
            slow: 0.5,
        };
        let mapped = event.map_target(|id| format!("enemy-{id}"));
        assert_eq!(mapped.target(), "enemy-7");
        assert!(matches!(
            mapped,
            TurretEvent::BeamApplied { damage, .. } if damage == 0.5
        ));
    }

    #[test]
    fn test_event_serde_tagged() {
        let event: TurretEvent<u64> = TurretEvent::StaleTarget { target: 3 };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"StaleTarget\""));
        let back: TurretEvent<u64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use turret_core::constants::DEFAULT_RANGE;
    use turret_core::enums::TurretMode;
    use turret_core::types::WorldSnapshot;

    use crate::policy::engagement_policy;
    use crate::tree::{Condition, DecisionNode};

    fn snapshot(visible: bool, distance: f32, cooldown: f32) -> WorldSnapshot {
        WorldSnapshot {
            target_visible: visible,
            nearest_distance: distance,
            cooldown_remaining: cooldown,
        }
    }

    #[test]
    fn test_nothing_visible_is_idle() {
        let policy = engagement_policy(DEFAULT_RANGE);
        assert_eq!(policy.evaluate(&WorldSnapshot::default()), TurretMode::Idle);
        // Distance and cooldown are irrelevant without a target.
        assert_eq!(
            policy.evaluate(&snapshot(false, 1.0, -3.0)),
            TurretMode::Idle
        );
    }

    #[test]
    fn test_out_of_range_is_tracking() {
        let policy = engagement_policy(DEFAULT_RANGE);
        assert_eq!(
            policy.evaluate(&snapshot(true, 15.01, 0.0)),
            TurretMode::Tracking
        );
        assert_eq!(
            policy.evaluate(&snapshot(true, 40.0, -1.0)),
            TurretMode::Tracking
        );
    }

    #[test]
    fn test_in_range_and_ready_is_firing() {
        let policy = engagement_policy(DEFAULT_RANGE);
        assert_eq!(
            policy.evaluate(&snapshot(true, 3.0, 0.0)),
            TurretMode::Firing
        );
        // Range bound is inclusive.
        assert_eq!(
            policy.evaluate(&snapshot(true, 15.0, -0.2)),
            TurretMode::Firing
        );
    }

    #[test]
    fn test_in_range_cooling_down_is_tracking() {
        let policy = engagement_policy(DEFAULT_RANGE);
        assert_eq!(
            policy.evaluate(&snapshot(true, 3.0, 0.01)),
            TurretMode::Tracking
        );
    }

    #[test]
    fn test_range_is_configurable() {
        let policy = engagement_policy(5.0);
        assert_eq!(
            policy.evaluate(&snapshot(true, 6.0, 0.0)),
            TurretMode::Tracking
        );
        assert_eq!(
            policy.evaluate(&snapshot(true, 4.0, 0.0)),
            TurretMode::Firing
        );
    }

    #[test]
    fn test_engagement_policy_shape() {
        let policy = engagement_policy(DEFAULT_RANGE);
        assert_eq!(policy.depth(), 3);
        assert_eq!(
            policy.outcomes(),
            vec![TurretMode::Firing, TurretMode::Tracking, TurretMode::Idle]
        );
    }

    #[test]
    fn test_trace_follows_evaluation() {
        let policy = engagement_policy(DEFAULT_RANGE);
        let snap = snapshot(true, 3.0, 0.4);
        let steps = policy.trace(&snap);
        assert_eq!(
            steps,
            vec![
                (&Condition::TargetVisible, true),
                (&Condition::WithinRange(DEFAULT_RANGE), true),
                (&Condition::CooldownElapsed, false),
            ]
        );

        let idle_steps = policy.trace(&WorldSnapshot::default());
        assert_eq!(idle_steps, vec![(&Condition::TargetVisible, false)]);
    }

    #[test]
    fn test_single_leaf_tree() {
        let tree = DecisionNode::leaf(TurretMode::Tracking);
        assert_eq!(tree.depth(), 0);
        assert!(tree.trace(&WorldSnapshot::default()).is_empty());
        assert_eq!(
            tree.evaluate(&snapshot(true, 1.0, 0.0)),
            TurretMode::Tracking
        );
    }

    #[test]
    fn test_not_condition() {
        let hold_fire = DecisionNode::branch(
            Condition::Not(Box::new(Condition::CooldownElapsed)),
            DecisionNode::leaf(TurretMode::Tracking),
            DecisionNode::leaf(TurretMode::Firing),
        );
        assert_eq!(
            hold_fire.evaluate(&snapshot(true, 1.0, 0.5)),
            TurretMode::Tracking
        );
        assert_eq!(
            hold_fire.evaluate(&snapshot(true, 1.0, 0.0)),
            TurretMode::Firing
        );
    }

    #[test]
    fn test_generic_outcomes() {
        // Trees are not tied to turret modes.
        let tree: DecisionNode<u8> = DecisionNode::branch(
            Condition::WithinRange(2.0),
            DecisionNode::leaf(1),
            DecisionNode::branch(
                Condition::WithinRange(4.0),
                DecisionNode::leaf(2),
                DecisionNode::leaf(3),
            ),
        );
        assert_eq!(tree.evaluate(&snapshot(true, 1.0, 0.0)), 1);
        assert_eq!(tree.evaluate(&snapshot(true, 3.0, 0.0)), 2);
        assert_eq!(tree.evaluate(&snapshot(true, f32::INFINITY, 0.0)), 3);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_policy_json_roundtrip() {
        let policy = engagement_policy(12.5);
        let json = serde_json::to_string(&policy).unwrap();
        let back: DecisionNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
        assert_eq!(
            back.evaluate(&snapshot(true, 12.0, 0.0)),
            TurretMode::Firing
        );
    }

    fn distance() -> impl Strategy<Value = f32> {
        prop_oneof![Just(f32::INFINITY), 0.0f32..100.0]
    }

    proptest! {
        #[test]
        fn prop_evaluate_is_total(visible in any::<bool>(), d in distance(), cd in -5.0f32..5.0) {
            let mode = engagement_policy(DEFAULT_RANGE).evaluate(&snapshot(visible, d, cd));
            prop_assert!(TurretMode::ALL.contains(&mode));
        }

        #[test]
        fn prop_invisible_always_idle(d in distance(), cd in -5.0f32..5.0) {
            let mode = engagement_policy(DEFAULT_RANGE).evaluate(&snapshot(false, d, cd));
            prop_assert_eq!(mode, TurretMode::Idle);
        }

        #[test]
        fn prop_beyond_range_always_tracking(extra in 0.001f32..100.0, cd in -5.0f32..5.0) {
            let mode = engagement_policy(DEFAULT_RANGE)
                .evaluate(&snapshot(true, DEFAULT_RANGE + extra, cd));
            prop_assert_eq!(mode, TurretMode::Tracking);
        }

        #[test]
        fn prop_in_range_fires_iff_cooled(d in 0.0f32..=15.0, cd in -5.0f32..5.0) {
            let mode = engagement_policy(DEFAULT_RANGE).evaluate(&snapshot(true, d, cd));
            let expected = if cd <= 0.0 { TurretMode::Firing } else { TurretMode::Tracking };
            prop_assert_eq!(mode, expected);
        }
    }
}

//! Stock turret policies.

use turret_core::enums::TurretMode;

use crate::tree::{Condition, DecisionNode};

/// The standard engagement policy for a turret with engagement range `range`:
///
/// ```text
/// target visible?     no  -> Idle
/// within range?       no  -> Tracking
/// cooldown elapsed?   yes -> Firing, no -> Tracking
/// ```
pub fn engagement_policy(range: f32) -> DecisionNode<TurretMode> {
    let cooldown_check = DecisionNode::branch(
        Condition::CooldownElapsed,
        DecisionNode::leaf(TurretMode::Firing),
        DecisionNode::leaf(TurretMode::Tracking),
    );

    let range_check = DecisionNode::branch(
        Condition::WithinRange(range),
        cooldown_check,
        DecisionNode::leaf(TurretMode::Tracking),
    );

    DecisionNode::branch(
        Condition::TargetVisible,
        range_check,
        DecisionNode::leaf(TurretMode::Idle),
    )
}

//! Decision tree nodes.
//!
//! A tree is owned data: children are boxed and never shared, so every tree
//! is finite and acyclic and every walk from the root ends in a leaf.
//! Evaluation is pure and allocation-free.

use serde::{Deserialize, Serialize};

use turret_core::enums::TurretMode;
use turret_core::types::WorldSnapshot;

/// A test over a snapshot. Data rather than closures so policies can be
/// inspected, logged and stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// A candidate target exists.
    TargetVisible,
    /// The nearest candidate is at most this far away.
    WithinRange(f32),
    /// The weapon cooldown has run out.
    CooldownElapsed,
    Not(Box<Condition>),
}

impl Condition {
    pub fn holds(&self, snapshot: &WorldSnapshot) -> bool {
        match self {
            Condition::TargetVisible => snapshot.target_visible,
            Condition::WithinRange(range) => snapshot.nearest_distance <= *range,
            Condition::CooldownElapsed => snapshot.cooldown_remaining <= 0.0,
            Condition::Not(inner) => !inner.holds(snapshot),
        }
    }
}

/// Binary choice between two subtrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch<O> {
    pub test: Condition,
    pub on_true: Box<DecisionNode<O>>,
    pub on_false: Box<DecisionNode<O>>,
}

/// A node of a decision tree yielding outcomes of type `O`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DecisionNode<O = TurretMode> {
    Branch(Branch<O>),
    Leaf(O),
}

impl<O: Copy + PartialEq> DecisionNode<O> {
    pub fn leaf(outcome: O) -> Self {
        DecisionNode::Leaf(outcome)
    }

    pub fn branch(test: Condition, on_true: DecisionNode<O>, on_false: DecisionNode<O>) -> Self {
        DecisionNode::Branch(Branch {
            test,
            on_true: Box::new(on_true),
            on_false: Box::new(on_false),
        })
    }

    /// Walk the tree for `snapshot` and return the leaf reached.
    pub fn evaluate(&self, snapshot: &WorldSnapshot) -> O {
        let mut node = self;
        loop {
            match node {
                DecisionNode::Leaf(outcome) => return *outcome,
                DecisionNode::Branch(branch) => {
                    node = if branch.test.holds(snapshot) {
                        branch.on_true.as_ref()
                    } else {
                        branch.on_false.as_ref()
                    };
                }
            }
        }
    }

    /// The tests taken, and their results, on the way to the leaf for `snapshot`.
    pub fn trace(&self, snapshot: &WorldSnapshot) -> Vec<(&Condition, bool)> {
        let mut steps = Vec::new();
        let mut node = self;
        while let DecisionNode::Branch(branch) = node {
            let result = branch.test.holds(snapshot);
            steps.push((&branch.test, result));
            node = if result {
                branch.on_true.as_ref()
            } else {
                branch.on_false.as_ref()
            };
        }
        steps
    }

    /// Number of branch levels on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            DecisionNode::Leaf(_) => 0,
            DecisionNode::Branch(branch) => 1 + branch.on_true.depth().max(branch.on_false.depth()),
        }
    }

    /// Distinct outcomes reachable from this node, in left-to-right leaf order.
    pub fn outcomes(&self) -> Vec<O> {
        let mut found = Vec::new();
        self.collect_outcomes(&mut found);
        found
    }

    fn collect_outcomes(&self, found: &mut Vec<O>) {
        match self {
            DecisionNode::Leaf(outcome) => {
                if !found.contains(outcome) {
                    found.push(*outcome);
                }
            }
            DecisionNode::Branch(branch) => {
                branch.on_true.collect_outcomes(found);
                branch.on_false.collect_outcomes(found);
            }
        }
    }
}

//! Targeting decisions for turrets.
//!
//! Implements the mode-selection policy as a declarative decision tree
//! over a per-tick `WorldSnapshot`. No ECS dependency; operates on plain data.

pub mod policy;
pub mod tree;

pub use policy::engagement_policy;
pub use tree::{Branch, Condition, DecisionNode};
pub use turret_core as core;

#[cfg(test)]
mod tests;

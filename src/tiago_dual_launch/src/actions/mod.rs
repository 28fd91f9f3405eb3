//! Action module

pub mod include;
pub mod motion_config;
pub mod node;

pub use include::IncludeAction;
pub use motion_config::MotionConfigAction;
pub use node::{NodeAction, Parameter};

/// Single step of a launch description, executed in order
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Include(IncludeAction),
    Node(NodeAction),
    MotionConfig(MotionConfigAction),
}

//! Frame-driven behavior tree runtime.
//!
//! A host ticks a [`BehaviorTree`] once per logical frame. Nodes that need
//! several frames report [`NodeState::Running`] and resume on the next tick;
//! everything runs on the caller's thread, "parallel" meaning interleaved
//! within a single tick.
//!
//! - **Lifecycle**: start / update / exit hooks driven by [`Node`]
//! - **Interruption**: soft [`Node::interrupt`] and hard [`Node::abort`],
//!   both cascading through children in index order
//! - **Blackboard**: typed key-value store shared by a tree instance
//! - **Errors never escape a tick**: bad data becomes `Failure` plus a
//!   `tracing` diagnostic
//!
//! # Architecture
//!
//! - [`Behavior`]: Strategy trait implemented by every node kind
//! - [`Node`]: Owns a behavior and runs its lifecycle state machine
//! - [`NodeState`]: Ready, Running, Success or Failure
//! - Leaf nodes: [`Action`], [`AddBlackboardFloat`], [`SetBlackboardFloat`], [`Wait`]
//! - Composite nodes: [`Sequence`], [`Selector`], [`Parallel`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`], [`ConditionalCheck`], [`Timeout`]

pub mod action;
pub mod behavior;
pub mod blackboard;
pub mod builder;
pub mod composite;
pub mod condition;
pub mod conditional;
pub mod context;
pub mod decorator;
pub mod parallel;
pub mod status;
pub mod time;
pub mod timeout;
pub mod tree;

// Re-export core types for ergonomic API
pub use action::{Action, AddBlackboardFloat, SetBlackboardFloat, Wait};
pub use behavior::{Behavior, Node};
pub use blackboard::{Blackboard, BlackboardError, BlackboardKey};
pub use composite::{Selector, Sequence};
pub use condition::{CompareBlackboardFloat, ComparisonMode, Condition};
pub use conditional::ConditionalCheck;
pub use context::TreeContext;
pub use decorator::{AlwaysSucceed, InterruptionMode, Inverter};
pub use parallel::{Parallel, ParallelType};
pub use status::NodeState;
pub use time::{FrameClock, FrameTime, TimeMode};
pub use timeout::Timeout;
pub use tree::BehaviorTree;

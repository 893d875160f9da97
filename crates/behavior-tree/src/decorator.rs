//! Single-child decorators that rewrite their child's result.
//!
//! Condition gating lives in [`crate::conditional`] and time limits in
//! [`crate::timeout`].

use std::slice;

use crate::{Behavior, Node, NodeState};

/// How a decorator reacts to its guard changing while the child runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterruptionMode {
    /// Evaluate once when the activation starts, then commit to the child.
    #[default]
    Latched,
    /// Re-evaluate every tick and interrupt the child as soon as it breaks.
    Reactive,
}

/// Swaps its child's `Success` and `Failure`; `Running` passes through.
pub struct Inverter<C> {
    child: Node<C>,
}

impl<C> Inverter<C> {
    /// Creates an inverter around `child`.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn on_update(&mut self, ctx: &mut C) -> NodeState {
        self.child.tick(ctx).invert()
    }

    fn children(&self) -> &[Node<C>] {
        slice::from_ref(&self.child)
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        slice::from_mut(&mut self.child)
    }
}

/// Reports `Success` whenever its child completes, whatever the outcome.
///
/// Keeps an optional step from failing the enclosing sequence.
pub struct AlwaysSucceed<C> {
    child: Node<C>,
}

impl<C> AlwaysSucceed<C> {
    /// Creates an always-succeed wrapper around `child`.
    pub fn new(child: Node<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn on_update(&mut self, ctx: &mut C) -> NodeState {
        match self.child.tick(ctx) {
            NodeState::Running => NodeState::Running,
            _ => NodeState::Success,
        }
    }

    fn children(&self) -> &[Node<C>] {
        slice::from_ref(&self.child)
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        slice::from_mut(&mut self.child)
    }
}

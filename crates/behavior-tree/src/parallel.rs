//! Interleaving composite.
//!
//! "Parallel" means every child is ticked within the same frame, in index
//! order. Nothing runs on other threads.

use crate::{Behavior, Node, NodeState};

/// Aggregation policy of a [`Parallel`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParallelType {
    /// Fires as soon as any child is in the trigger state.
    #[default]
    OneTriggeredChild,
    /// Fires when every child reaches the trigger state in the same tick.
    AllTriggeredChildren,
}

/// Ticks all children every frame and reports when a trigger policy fires.
///
/// # Semantics
///
/// - [`ParallelType::OneTriggeredChild`]: scans the states children recorded
///   on the *previous* tick. If any equals the trigger state, every child is
///   interrupted and the return state is reported. Otherwise all children
///   are ticked and the node keeps `Running`. A child that reaches the
///   trigger state during a tick is therefore detected on the next one.
/// - [`ParallelType::AllTriggeredChildren`]: ticks every child and fires
///   when all of this tick's results equal the trigger state.
///
/// Both default to triggering on `Failure` and reporting `Failure`.
pub struct Parallel<C> {
    children: Vec<Node<C>>,
    policy: ParallelType,
    child_trigger_state: NodeState,
    return_state: NodeState,
}

impl<C> Parallel<C> {
    /// Creates a parallel node with the given policy and children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(policy: ParallelType, children: Vec<Node<C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Parallel must have at least one child"
        );
        Self {
            children,
            policy,
            child_trigger_state: NodeState::Failure,
            return_state: NodeState::Failure,
        }
    }

    /// Child state the policy watches for.
    pub fn trigger_on(mut self, state: NodeState) -> Self {
        self.child_trigger_state = state;
        self
    }

    /// State reported once the policy fires.
    pub fn returning(mut self, state: NodeState) -> Self {
        self.return_state = state;
        self
    }

    fn one_triggered_child(&mut self, ctx: &mut C) -> NodeState {
        let triggered = self
            .children
            .iter()
            .any(|child| child.state() == self.child_trigger_state);

        if triggered {
            for child in &mut self.children {
                child.interrupt(ctx);
            }
            return self.return_state;
        }

        for child in &mut self.children {
            child.tick(ctx);
        }
        NodeState::Running
    }

    fn all_triggered_children(&mut self, ctx: &mut C) -> NodeState {
        let mut all_triggered = true;
        for child in &mut self.children {
            if child.tick(ctx) != self.child_trigger_state {
                all_triggered = false;
            }
        }

        if all_triggered {
            self.return_state
        } else {
            NodeState::Running
        }
    }
}

impl<C> Behavior<C> for Parallel<C> {
    /// Clears states left over from the previous activation so the
    /// trigger scan only sees results of this one.
    fn on_start(&mut self, ctx: &mut C) -> NodeState {
        for child in &mut self.children {
            child.abort(ctx);
        }
        NodeState::Running
    }

    fn on_update(&mut self, ctx: &mut C) -> NodeState {
        match self.policy {
            ParallelType::OneTriggeredChild => self.one_triggered_child(ctx),
            ParallelType::AllTriggeredChildren => self.all_triggered_children(ctx),
        }
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.children
    }
}

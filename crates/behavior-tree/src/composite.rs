//! Ordered composites.
//!
//! [`Sequence`] and [`Selector`] walk their children in index order and pick
//! up at the child that was still `Running` on the previous tick. The
//! interleaving [`Parallel`](crate::Parallel) composite lives in
//! [`crate::parallel`].

use crate::{Behavior, Node, NodeState};

/// Ticks children in order while they succeed.
///
/// Stops at the first `Failure` (reported as the sequence's result) or
/// `Running` (resumed next tick). Completes with `Success` once every child
/// has succeeded.
pub struct Sequence<C> {
    children: Vec<Node<C>>,
    current: usize,
}

impl<C> Sequence<C> {
    /// Creates a sequence over `children`, run in index order.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<C>>) -> Self {
        assert!(!children.is_empty(), "empty sequence");
        Self {
            children,
            current: 0,
        }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn on_start(&mut self, _ctx: &mut C) -> NodeState {
        self.current = 0;
        NodeState::Running
    }

    fn on_update(&mut self, ctx: &mut C) -> NodeState {
        while let Some(child) = self.children.get_mut(self.current) {
            match child.tick(ctx) {
                NodeState::Running => return NodeState::Running,
                NodeState::Failure => return NodeState::Failure,
                _ => self.current += 1,
            }
        }
        NodeState::Success
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.children
    }
}

/// Ticks children in order until one succeeds.
///
/// The first `Success` wins; a `Running` child is resumed next tick. Reports
/// `Failure` only after every child has failed.
pub struct Selector<C> {
    children: Vec<Node<C>>,
    current: usize,
}

impl<C> Selector<C> {
    /// Creates a selector over `children`, tried in index order.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<C>>) -> Self {
        assert!(!children.is_empty(), "empty selector");
        Self {
            children,
            current: 0,
        }
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn on_start(&mut self, _ctx: &mut C) -> NodeState {
        self.current = 0;
        NodeState::Running
    }

    fn on_update(&mut self, ctx: &mut C) -> NodeState {
        while let Some(child) = self.children.get_mut(self.current) {
            match child.tick(ctx) {
                NodeState::Running => return NodeState::Running,
                NodeState::Success => return NodeState::Success,
                _ => self.current += 1,
            }
        }
        NodeState::Failure
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.children
    }
}

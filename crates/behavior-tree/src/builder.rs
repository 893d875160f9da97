//! Shorthand constructors for assembling trees inline.
//!
//! Each function wraps the matching behavior in a [`Node`] with default
//! options; use the behavior types directly for anything else.
//!
//! ```rust
//! use behavior_tree::builder::*;
//! use behavior_tree::{InterruptionMode, NodeState, ParallelType, TreeContext};
//!
//! let root = selector(vec![
//!     conditional(|ctx: &TreeContext| ctx.time_scale() > 0.0, InterruptionMode::Reactive,
//!         timeout(3.0, wait(1.0))),
//!     parallel(ParallelType::OneTriggeredChild, vec![
//!         action(|_: &mut TreeContext| NodeState::Running),
//!         wait(0.5),
//!     ]),
//! ]);
//! assert_eq!(root.children().len(), 2);
//! ```

use crate::{
    Action, AlwaysSucceed, Condition, ConditionalCheck, FrameClock, InterruptionMode, Inverter,
    Node, NodeState, Parallel, ParallelType, Selector, Sequence, Timeout, Wait,
};

/// [`Sequence`] over `children`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(Sequence::new(children))
}

/// [`Selector`] over `children`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Node<C>>) -> Node<C> {
    Node::new(Selector::new(children))
}

/// Creates a parallel node that triggers on `Failure` and reports `Failure`.
#[inline]
pub fn parallel<C: 'static>(policy: ParallelType, children: Vec<Node<C>>) -> Node<C> {
    Node::new(Parallel::new(policy, children))
}

/// [`Inverter`] around `child`.
#[inline]
pub fn inverter<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(Inverter::new(child))
}

/// [`AlwaysSucceed`] around `child`.
#[inline]
pub fn always_succeed<C: 'static>(child: Node<C>) -> Node<C> {
    Node::new(AlwaysSucceed::new(child))
}

/// Creates a condition gate reporting `Failure` when the condition breaks.
#[inline]
pub fn conditional<C, P>(condition: P, mode: InterruptionMode, child: Node<C>) -> Node<C>
where
    C: 'static,
    P: Condition<C> + 'static,
{
    Node::new(ConditionalCheck::new(condition, child).with_mode(mode))
}

/// Creates a reactive timeout on the scaled clock.
#[inline]
pub fn timeout<C: FrameClock + 'static>(duration: f32, child: Node<C>) -> Node<C> {
    Node::new(Timeout::new(duration, child))
}

/// Creates a wait leaf on the scaled clock.
#[inline]
pub fn wait<C: FrameClock + 'static>(duration: f32) -> Node<C> {
    Node::new(Wait::new(duration))
}

/// Creates a closure leaf.
#[inline]
pub fn action<C, F>(update: F) -> Node<C>
where
    C: 'static,
    F: FnMut(&mut C) -> NodeState + Send + 'static,
{
    Node::new(Action::from_fn(update))
}

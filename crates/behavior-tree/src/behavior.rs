//! Core behavior trait and the node lifecycle state machine.
//!
//! This module defines the [`Behavior`] trait, the strategy every node kind
//! implements, and [`Node`], the owner that drives a behavior through its
//! lifecycle. The trait is generic over a context type `C`, allowing nodes to
//! access the blackboard, the frame clock or any host state.
//!
//! # Lifecycle
//!
//! ```text
//!            tick (not Running)          tick (Running)
//!   Ready ───────────────► on_start ──► on_update ──► Success / Failure
//!     ▲                       │  non-Running              │
//!     │                       └──────► on_exit ◄──────────┘
//!     └──────── abort ─────────────────────────────────────
//! ```
//!
//! A node completes within the tick it starts when `on_start` returns a
//! non-Running state; `on_update` is skipped for that tick.

use std::any::type_name;
use std::fmt;

use crate::NodeState;

/// Node-specific behavior driven by a [`Node`].
///
/// Only `on_update` is required. Nodes with children expose them through
/// [`children_mut`](Behavior::children_mut) so that awake, interrupt and
/// abort cascade in index order.
pub trait Behavior<C>: Send {
    /// One-time validation of configured parameters, before any tick.
    ///
    /// `name` is the owning node's name, for diagnostics.
    fn on_awake(&mut self, _name: &str) {}

    /// Called when the node enters a new activation.
    ///
    /// Returning anything other than `Running` completes the node in the
    /// same tick without calling [`on_update`](Behavior::on_update).
    fn on_start(&mut self, _ctx: &mut C) -> NodeState {
        NodeState::Running
    }

    /// Per-tick work. Only ever called while the node is `Running`.
    fn on_update(&mut self, ctx: &mut C) -> NodeState;

    /// Cleanup when the node leaves `Running`, whether by completing,
    /// by interruption or by abort.
    fn on_exit(&mut self, _ctx: &mut C) {}

    fn children(&self) -> &[Node<C>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut []
    }
}

/// An owned behavior plus its lifecycle state.
///
/// `tick` is the only entry point the owning composite, decorator or
/// [`BehaviorTree`](crate::BehaviorTree) drives per frame.
pub struct Node<C> {
    name: String,
    state: NodeState,
    awake: bool,
    behavior: Box<dyn Behavior<C>>,
}

impl<C> Node<C> {
    /// Wraps a behavior, naming the node after the behavior's type.
    pub fn new<B>(behavior: B) -> Self
    where
        B: Behavior<C> + 'static,
    {
        let name = short_type_name(type_name::<B>()).to_string();
        Self {
            name,
            state: NodeState::Ready,
            awake: false,
            behavior: Box::new(behavior),
        }
    }

    /// Overrides the node name used in diagnostics.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The state recorded at the end of the last tick, interrupt or abort.
    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn children(&self) -> &[Node<C>] {
        self.behavior.children()
    }

    /// Runs one-time validation on this node and its subtree.
    ///
    /// Idempotent. [`tick`](Self::tick) calls it on first use if the host
    /// did not.
    pub fn awake(&mut self) {
        if self.awake {
            return;
        }
        self.awake = true;
        self.behavior.on_awake(&self.name);
        for child in self.behavior.children_mut() {
            child.awake();
        }
    }

    /// Advances the node by one frame and returns its new state.
    pub fn tick(&mut self, ctx: &mut C) -> NodeState {
        self.awake();

        if !self.state.is_running() {
            self.state = self.behavior.on_start(ctx);
            if !self.state.is_running() {
                tracing::trace!(node = %self.name, state = %self.state, "completed on start");
                self.behavior.on_exit(ctx);
                return self.state;
            }
        }

        self.state = self.behavior.on_update(ctx);
        if !self.state.is_running() {
            tracing::trace!(node = %self.name, state = %self.state, "completed");
            self.behavior.on_exit(ctx);
        }
        self.state
    }

    /// Stops a running node immediately with `Failure`.
    pub fn interrupt(&mut self, ctx: &mut C) {
        self.interrupt_with(ctx, NodeState::Failure);
    }

    /// Stops a running node immediately, recording `state`, then cascades the
    /// interrupt to every child in index order.
    ///
    /// A node that is not running keeps its state and skips `on_exit`.
    /// `state` must be `Success` or `Failure`; anything else is logged and
    /// replaced by `Failure`.
    pub fn interrupt_with(&mut self, ctx: &mut C, state: NodeState) {
        let state = if state.is_complete() {
            state
        } else {
            tracing::error!(
                node = %self.name,
                %state,
                "interrupt state must be complete, using Failure"
            );
            NodeState::Failure
        };

        if self.state.is_running() {
            tracing::debug!(node = %self.name, %state, "interrupted");
            self.state = state;
            self.behavior.on_exit(ctx);
        }
        for child in self.behavior.children_mut() {
            child.interrupt_with(ctx, state);
        }
    }

    /// Resets the node and its subtree to `Ready`.
    ///
    /// Returns `false` without side effects when the node is already idle.
    /// A running node gets its `on_exit` before being reset.
    pub fn abort(&mut self, ctx: &mut C) -> bool {
        if self.state == NodeState::Ready {
            return false;
        }

        if self.state.is_running() {
            tracing::debug!(node = %self.name, "aborted while running");
            self.behavior.on_exit(ctx);
        }
        self.state = NodeState::Ready;

        for child in self.behavior.children_mut() {
            child.abort(ctx);
        }
        true
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("children", &self.behavior.children())
            .finish()
    }
}

/// `behavior_tree::decorator::Inverter<Ctx>` -> `Inverter`.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Trace {
        calls: Vec<&'static str>,
    }

    /// Records every hook call; completes after `frames` updates.
    struct Recorder {
        frames: u32,
        start_result: NodeState,
        updates: u32,
    }

    impl Recorder {
        fn running_for(frames: u32) -> Self {
            Self {
                frames,
                start_result: NodeState::Running,
                updates: 0,
            }
        }
    }

    impl Behavior<Trace> for Recorder {
        fn on_start(&mut self, ctx: &mut Trace) -> NodeState {
            ctx.calls.push("start");
            self.updates = 0;
            self.start_result
        }

        fn on_update(&mut self, ctx: &mut Trace) -> NodeState {
            ctx.calls.push("update");
            self.updates += 1;
            if self.updates >= self.frames {
                NodeState::Success
            } else {
                NodeState::Running
            }
        }

        fn on_exit(&mut self, ctx: &mut Trace) {
            ctx.calls.push("exit");
        }
    }

    #[test]
    fn start_runs_once_per_activation() {
        let mut node = Node::new(Recorder::running_for(2));
        let mut ctx = Trace::default();

        assert_eq!(node.tick(&mut ctx), NodeState::Running);
        assert_eq!(node.tick(&mut ctx), NodeState::Success);
        assert_eq!(ctx.calls, vec!["start", "update", "update", "exit"]);

        // Completed nodes restart on the next tick.
        ctx.calls.clear();
        node.tick(&mut ctx);
        assert_eq!(ctx.calls, vec!["start", "update"]);
    }

    #[test]
    fn completing_in_start_skips_update() {
        let mut node = Node::new(Recorder {
            start_result: NodeState::Failure,
            ..Recorder::running_for(1)
        });
        let mut ctx = Trace::default();

        assert_eq!(node.tick(&mut ctx), NodeState::Failure);
        assert_eq!(ctx.calls, vec!["start", "exit"]);
    }

    #[test]
    fn interrupt_exits_running_node() {
        let mut node = Node::new(Recorder::running_for(10));
        let mut ctx = Trace::default();
        node.tick(&mut ctx);

        node.interrupt(&mut ctx);
        assert_eq!(node.state(), NodeState::Failure);
        assert_eq!(ctx.calls, vec!["start", "update", "exit"]);

        // Not running any more: no second exit.
        node.interrupt(&mut ctx);
        assert_eq!(ctx.calls.len(), 3);
    }

    #[test]
    fn interrupt_with_records_caller_state() {
        let mut node = Node::new(Recorder::running_for(10));
        let mut ctx = Trace::default();
        node.tick(&mut ctx);

        node.interrupt_with(&mut ctx, NodeState::Success);
        assert_eq!(node.state(), NodeState::Success);
    }

    #[test]
    fn interrupt_with_incomplete_state_fails_the_node() {
        let mut node = Node::new(Recorder::running_for(10));
        let mut ctx = Trace::default();
        node.tick(&mut ctx);

        node.interrupt_with(&mut ctx, NodeState::Running);
        assert_eq!(node.state(), NodeState::Failure);

        // Next tick is a fresh activation.
        node.tick(&mut ctx);
        assert_eq!(ctx.calls, vec!["start", "update", "exit", "start", "update"]);

        node.interrupt_with(&mut ctx, NodeState::Ready);
        assert_eq!(node.state(), NodeState::Failure);
        assert!(node.abort(&mut ctx));
    }

    #[test]
    fn abort_is_idempotent() {
        let mut node = Node::new(Recorder::running_for(10));
        let mut ctx = Trace::default();
        assert!(!node.abort(&mut ctx));
        assert!(ctx.calls.is_empty());

        node.tick(&mut ctx);
        assert!(node.abort(&mut ctx));
        assert_eq!(node.state(), NodeState::Ready);
        assert_eq!(ctx.calls.last(), Some(&"exit"));

        let calls = ctx.calls.len();
        assert!(!node.abort(&mut ctx));
        assert_eq!(ctx.calls.len(), calls);
    }

    #[test]
    fn default_name_is_short_type_name() {
        let node: Node<Trace> = Node::new(Recorder::running_for(1));
        assert_eq!(node.name(), "Recorder");
        assert_eq!(node.named("patrol").name(), "patrol");
    }
}

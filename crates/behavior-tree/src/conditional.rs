//! Condition-gated decorator.

use std::slice;

use crate::{Behavior, Condition, InterruptionMode, Node, NodeState};

/// Runs its child only while a [`Condition`] holds.
///
/// # Semantics
///
/// The condition is *broken* when `!is_true() ^ inverted`. When broken, the
/// child is interrupted and the decorator reports its configured return
/// state (`Failure` by default).
///
/// - [`InterruptionMode::Latched`]: checked on start (a broken condition
///   completes the node without entering the child) and on the first update
///   of the activation. Later ticks commit to the child.
/// - [`InterruptionMode::Reactive`]: checked on every update.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{
///     BlackboardKey, CompareBlackboardFloat, ComparisonMode, ConditionalCheck,
///     InterruptionMode, Node, TreeContext, Wait,
/// };
///
/// const AMMO: BlackboardKey<f32> = BlackboardKey::new("ammo");
///
/// let guarded: Node<TreeContext> = Node::new(
///     ConditionalCheck::new(
///         CompareBlackboardFloat::new(AMMO, ComparisonMode::GreaterThan, 0.0),
///         Node::new(Wait::new(2.0)),
///     )
///     .with_mode(InterruptionMode::Reactive),
/// );
/// ```
pub struct ConditionalCheck<C> {
    child: Node<C>,
    condition: Box<dyn Condition<C>>,
    mode: InterruptionMode,
    return_state: NodeState,
    inverted: bool,
    latched_checked: bool,
}

impl<C> ConditionalCheck<C> {
    /// Creates a latched gate that runs `child` while `condition` holds.
    pub fn new<P>(condition: P, child: Node<C>) -> Self
    where
        P: Condition<C> + 'static,
    {
        Self {
            child,
            condition: Box::new(condition),
            mode: InterruptionMode::default(),
            return_state: NodeState::Failure,
            inverted: false,
            latched_checked: false,
        }
    }

    pub fn with_mode(mut self, mode: InterruptionMode) -> Self {
        self.mode = mode;
        self
    }

    /// State reported when the condition is broken.
    pub fn with_return_state(mut self, state: NodeState) -> Self {
        self.return_state = state;
        self
    }

    /// Gate on the condition being false instead of true.
    pub fn inverted(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }

    fn is_condition_broken(&self, ctx: &C) -> bool {
        !self.condition.is_true(ctx) ^ self.inverted
    }

    fn break_off(&mut self, ctx: &mut C) -> NodeState {
        tracing::debug!(mode = %self.mode, state = %self.return_state, "condition broken");
        self.child.interrupt(ctx);
        self.return_state
    }
}

impl<C> Behavior<C> for ConditionalCheck<C> {
    fn on_start(&mut self, ctx: &mut C) -> NodeState {
        self.latched_checked = false;

        if self.mode == InterruptionMode::Latched && self.is_condition_broken(ctx) {
            return self.return_state;
        }

        NodeState::Running
    }

    fn on_update(&mut self, ctx: &mut C) -> NodeState {
        match self.mode {
            InterruptionMode::Reactive => {
                if self.is_condition_broken(ctx) {
                    return self.break_off(ctx);
                }
            }
            InterruptionMode::Latched => {
                if !self.latched_checked {
                    self.latched_checked = true;
                    if self.is_condition_broken(ctx) {
                        return self.break_off(ctx);
                    }
                }
            }
        }

        self.child.tick(ctx)
    }

    fn children(&self) -> &[Node<C>] {
        slice::from_ref(&self.child)
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        slice::from_mut(&mut self.child)
    }
}

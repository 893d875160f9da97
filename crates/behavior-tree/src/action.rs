//! Leaf behavior nodes.
//!
//! Leaves have no children. They read and mutate the blackboard (or any other
//! context state) and report how far they got.

use crate::{Behavior, Blackboard, BlackboardKey, FrameClock, NodeState, TimeMode};

/// Leaf backed by a closure, ticked once per update.
///
/// # Example
///
/// ```rust
/// use behavior_tree::{Action, Node, NodeState};
///
/// let mut node = Node::new(Action::from_fn(|count: &mut u32| {
///     *count += 1;
///     if *count >= 3 { NodeState::Success } else { NodeState::Running }
/// }));
///
/// let mut count = 0;
/// assert_eq!(node.tick(&mut count), NodeState::Running);
/// ```
pub struct Action<F> {
    update: F,
}

impl<F> Action<F> {
    pub fn from_fn<C>(update: F) -> Self
    where
        F: FnMut(&mut C) -> NodeState + Send,
    {
        Self { update }
    }
}

impl<C, F> Behavior<C> for Action<F>
where
    F: FnMut(&mut C) -> NodeState + Send,
{
    fn on_update(&mut self, ctx: &mut C) -> NodeState {
        (self.update)(ctx)
    }
}

/// Adds a constant to a float blackboard value.
///
/// Succeeds if the blackboard value exists and fails otherwise. The whole
/// effect happens on start, so the node completes in the tick it starts.
pub struct AddBlackboardFloat {
    key: BlackboardKey<f32>,
    value: f32,
}

impl AddBlackboardFloat {
    /// Creates a leaf that adds `value` to the float under `key`.
    pub fn new(key: BlackboardKey<f32>, value: f32) -> Self {
        Self { key, value }
    }
}

impl<C> Behavior<C> for AddBlackboardFloat
where
    C: AsMut<Blackboard>,
{
    fn on_start(&mut self, ctx: &mut C) -> NodeState {
        match ctx.as_mut().get_mut(&self.key) {
            Ok(current) => {
                *current += self.value;
                NodeState::Success
            }
            Err(err) => {
                tracing::error!(key = self.key.name(), %err, "cannot add to blackboard float");
                NodeState::Failure
            }
        }
    }

    fn on_update(&mut self, _ctx: &mut C) -> NodeState {
        NodeState::Success
    }
}

/// Overwrites a float blackboard value.
///
/// Succeeds if the blackboard value exists and fails otherwise.
pub struct SetBlackboardFloat {
    key: BlackboardKey<f32>,
    value: f32,
}

impl SetBlackboardFloat {
    /// Creates a leaf that overwrites the float under `key` with `value`.
    pub fn new(key: BlackboardKey<f32>, value: f32) -> Self {
        Self { key, value }
    }
}

impl<C> Behavior<C> for SetBlackboardFloat
where
    C: AsMut<Blackboard>,
{
    fn on_start(&mut self, ctx: &mut C) -> NodeState {
        match ctx.as_mut().set(&self.key, self.value) {
            Ok(()) => NodeState::Success,
            Err(err) => {
                tracing::error!(key = self.key.name(), %err, "cannot set blackboard float");
                NodeState::Failure
            }
        }
    }

    fn on_update(&mut self, _ctx: &mut C) -> NodeState {
        NodeState::Success
    }
}

/// Runs for `duration` seconds of the selected clock, then succeeds.
pub struct Wait {
    duration: f32,
    time_mode: TimeMode,
    elapsed: f32,
}

impl Wait {
    /// Creates a wait of `duration` seconds on the scaled clock.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            time_mode: TimeMode::DeltaTime,
            elapsed: 0.0,
        }
    }

    pub fn with_time_mode(mut self, time_mode: TimeMode) -> Self {
        self.time_mode = time_mode;
        self
    }
}

impl<C> Behavior<C> for Wait
where
    C: FrameClock,
{
    fn on_awake(&mut self, name: &str) {
        if self.duration.is_nan() || self.duration < 0.0 {
            tracing::error!(
                node = name,
                duration = self.duration,
                "wait duration cannot be negative, using 0"
            );
            self.duration = 0.0;
        }
    }

    fn on_start(&mut self, _ctx: &mut C) -> NodeState {
        self.elapsed = 0.0;
        NodeState::Running
    }

    fn on_update(&mut self, ctx: &mut C) -> NodeState {
        self.elapsed += ctx.delta_time(self.time_mode);
        if self.elapsed >= self.duration {
            NodeState::Success
        } else {
            NodeState::Running
        }
    }
}

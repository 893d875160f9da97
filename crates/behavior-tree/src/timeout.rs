//! Time-limited decorator.

use std::slice;

use crate::{Behavior, FrameClock, InterruptionMode, Node, NodeState, TimeMode};

/// Keeps its child running for a fixed duration.
///
/// Each update ticks the child first, so the child always gets its frame,
/// then checks the elapsed time:
///
/// - before the duration elapses the decorator reports `Running`, masking
///   the child's own state;
/// - once it elapses, [`InterruptionMode::Reactive`] forwards the child's
///   state from that tick, while [`InterruptionMode::Latched`] forces
///   `Success`.
///
/// A child still running when a Latched timeout forces `Success` is
/// interrupted. External interrupts reach the child through [`Node`]'s
/// cascade with the caller's state.
pub struct Timeout<C> {
    child: Node<C>,
    duration: f32,
    time_mode: TimeMode,
    mode: InterruptionMode,
    elapsed: f32,
}

impl<C> Timeout<C> {
    /// Creates a reactive timeout of `duration` seconds on the scaled clock.
    pub fn new(duration: f32, child: Node<C>) -> Self {
        Self {
            child,
            duration,
            time_mode: TimeMode::DeltaTime,
            mode: InterruptionMode::Reactive,
            elapsed: 0.0,
        }
    }

    pub fn with_time_mode(mut self, time_mode: TimeMode) -> Self {
        self.time_mode = time_mode;
        self
    }

    pub fn with_mode(mut self, mode: InterruptionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Configured duration, after awake-time validation.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    fn state_on_timeout(&mut self, ctx: &mut C, child_state: NodeState) -> NodeState {
        match self.mode {
            InterruptionMode::Reactive => child_state,
            InterruptionMode::Latched => {
                self.child.interrupt(ctx);
                NodeState::Success
            }
        }
    }
}

impl<C> Behavior<C> for Timeout<C>
where
    C: FrameClock,
{
    fn on_awake(&mut self, name: &str) {
        if self.duration.is_nan() || self.duration < 0.0 {
            tracing::error!(
                node = name,
                duration = self.duration,
                "timeout duration cannot be negative, setting it to 0"
            );
            self.duration = 0.0;
        }
    }

    fn on_start(&mut self, _ctx: &mut C) -> NodeState {
        self.elapsed = 0.0;
        NodeState::Running
    }

    fn on_update(&mut self, ctx: &mut C) -> NodeState {
        let child_state = self.child.tick(ctx);

        if self.elapsed >= self.duration {
            return self.state_on_timeout(ctx, child_state);
        }

        self.elapsed += ctx.delta_time(self.time_mode);
        NodeState::Running
    }

    fn children(&self) -> &[Node<C>] {
        slice::from_ref(&self.child)
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        slice::from_mut(&mut self.child)
    }
}

//! Default per-tree context: a blackboard plus the current frame clock.
//!
//! Built-in nodes do not require this type. They only ask the context for
//! `AsRef<Blackboard>`/`AsMut<Blackboard>` or [`FrameClock`], so hosts can
//! embed both capabilities in their own context instead.

use crate::{Blackboard, FrameClock, FrameTime, TimeMode};

#[derive(Debug)]
pub struct TreeContext {
    pub blackboard: Blackboard,
    frame: FrameTime,
    time_scale: f32,
}

impl TreeContext {
    /// Creates a context at time scale 1 with no elapsed frame.
    pub fn new(blackboard: Blackboard) -> Self {
        Self {
            blackboard,
            frame: FrameTime::default(),
            time_scale: 1.0,
        }
    }

    /// Starts a new frame that lasted `unscaled_delta` seconds.
    pub fn advance(&mut self, unscaled_delta: f32) {
        self.frame = FrameTime::new(unscaled_delta.max(0.0), self.time_scale);
    }

    pub fn frame(&self) -> FrameTime {
        self.frame
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Sets the multiplier applied to [`TimeMode::DeltaTime`]. Negative
    /// scales are clamped to zero.
    pub fn set_time_scale(&mut self, scale: f32) {
        if scale < 0.0 {
            tracing::warn!(scale, "time scale cannot be negative, using 0");
        }
        self.time_scale = scale.max(0.0);
    }
}

impl Default for TreeContext {
    fn default() -> Self {
        Self::new(Blackboard::new())
    }
}

impl AsRef<Blackboard> for TreeContext {
    fn as_ref(&self) -> &Blackboard {
        &self.blackboard
    }
}

impl AsMut<Blackboard> for TreeContext {
    fn as_mut(&mut self) -> &mut Blackboard {
        &mut self.blackboard
    }
}

impl FrameClock for TreeContext {
    fn delta_time(&self, mode: TimeMode) -> f32 {
        self.frame.elapsed(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_applies_time_scale() {
        let mut ctx = TreeContext::default();
        ctx.set_time_scale(0.5);
        ctx.advance(0.2);

        assert_eq!(ctx.delta_time(TimeMode::DeltaTime), 0.1);
        assert_eq!(ctx.delta_time(TimeMode::UnscaledDeltaTime), 0.2);
    }

    #[test]
    fn negative_scale_pauses_scaled_time() {
        let mut ctx = TreeContext::default();
        ctx.set_time_scale(-2.0);
        ctx.advance(1.0);

        assert_eq!(ctx.time_scale(), 0.0);
        assert_eq!(ctx.delta_time(TimeMode::DeltaTime), 0.0);
    }
}

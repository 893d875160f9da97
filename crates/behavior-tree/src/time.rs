//! Frame clock consumed by time-based nodes.

/// Which clock a time-based node accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeMode {
    /// Frame delta scaled by the tree's time scale (pauses when scale is 0).
    #[default]
    DeltaTime,
    /// Raw frame delta, ignoring the time scale.
    UnscaledDeltaTime,
}

/// Durations of the current frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    pub delta: f32,
    pub unscaled_delta: f32,
}

impl FrameTime {
    /// Builds a frame from the raw delta and the current time scale.
    pub fn new(unscaled_delta: f32, time_scale: f32) -> Self {
        Self {
            delta: unscaled_delta * time_scale,
            unscaled_delta,
        }
    }

    #[inline]
    pub fn elapsed(&self, mode: TimeMode) -> f32 {
        match mode {
            TimeMode::DeltaTime => self.delta,
            TimeMode::UnscaledDeltaTime => self.unscaled_delta,
        }
    }
}

/// Context capability for nodes that measure time.
pub trait FrameClock {
    /// Seconds that passed during the current frame under `mode`.
    fn delta_time(&self, mode: TimeMode) -> f32;
}

impl FrameClock for FrameTime {
    fn delta_time(&self, mode: TimeMode) -> f32 {
        self.elapsed(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_applies_only_to_scaled_delta() {
        let frame = FrameTime::new(0.5, 0.0);
        assert_eq!(frame.delta_time(TimeMode::DeltaTime), 0.0);
        assert_eq!(frame.delta_time(TimeMode::UnscaledDeltaTime), 0.5);
    }
}

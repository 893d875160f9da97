//! State reported by behavior nodes.

/// The execution state of a behavior node.
///
/// # Frame Semantics
///
/// A tree is ticked once per logical frame. A node that needs more than one
/// frame reports `Running` and resumes on the next tick; every other state
/// ends the node's current activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    /// The node has not been started, or was reset by an abort.
    #[default]
    Ready,

    /// The node started and has not finished yet.
    Running,

    /// The node completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action executed without errors.
    Success,

    /// The node failed or was interrupted.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be executed (e.g., missing blackboard key).
    Failure,
}

impl NodeState {
    /// Returns `true` if this state is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, NodeState::Running)
    }

    /// Returns `true` if this state is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, NodeState::Success)
    }

    /// Returns `true` if this state is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, NodeState::Failure)
    }

    /// Returns `true` if the node finished its activation (Success or Failure).
    #[inline]
    pub fn is_complete(self) -> bool {
        matches!(self, NodeState::Success | NodeState::Failure)
    }

    /// Swaps Success and Failure. `Ready` and `Running` are left untouched.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            NodeState::Success => NodeState::Failure,
            NodeState::Failure => NodeState::Success,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn invert_swaps_only_completed_states() {
        assert_eq!(NodeState::Success.invert(), NodeState::Failure);
        assert_eq!(NodeState::Failure.invert(), NodeState::Success);
        assert_eq!(NodeState::Running.invert(), NodeState::Running);
        assert_eq!(NodeState::Ready.invert(), NodeState::Ready);
    }

    #[test]
    fn parses_from_name() {
        assert_eq!(NodeState::from_str("Failure").unwrap(), NodeState::Failure);
        assert_eq!(NodeState::Running.to_string(), "Running");
        assert!(NodeState::from_str("Sleeping").is_err());
    }
}

//! Predicates evaluated by [`ConditionalCheck`](crate::ConditionalCheck).

use crate::{Blackboard, BlackboardKey};

/// A side-effect free predicate over the tree context.
///
/// Implemented for every `Fn(&C) -> bool` closure, so most conditions are
/// written inline.
pub trait Condition<C>: Send {
    fn is_true(&self, ctx: &C) -> bool;
}

impl<C, F> Condition<C> for F
where
    F: Fn(&C) -> bool + Send,
{
    fn is_true(&self, ctx: &C) -> bool {
        self(ctx)
    }
}

/// How a blackboard value is compared against a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonMode {
    /// Never true.
    None,
    #[default]
    Equals,
    NotEquals,
    /// `blackboard value > constant`
    GreaterThan,
    /// `blackboard value < constant`
    LessThan,
}

impl ComparisonMode {
    pub fn compare(self, lhs: f32, rhs: f32) -> bool {
        match self {
            ComparisonMode::None => false,
            ComparisonMode::Equals => lhs == rhs,
            ComparisonMode::NotEquals => lhs != rhs,
            ComparisonMode::GreaterThan => lhs > rhs,
            ComparisonMode::LessThan => lhs < rhs,
        }
    }
}

/// Compares a float blackboard value with a constant.
///
/// A missing or mistyped key evaluates to `false` and logs an error.
#[derive(Debug, Clone)]
pub struct CompareBlackboardFloat {
    key: BlackboardKey<f32>,
    value: f32,
    mode: ComparisonMode,
}

impl CompareBlackboardFloat {
    /// Creates a check of the float under `key` against `value`.
    pub fn new(key: BlackboardKey<f32>, mode: ComparisonMode, value: f32) -> Self {
        Self { key, value, mode }
    }
}

impl<C> Condition<C> for CompareBlackboardFloat
where
    C: AsRef<Blackboard>,
{
    fn is_true(&self, ctx: &C) -> bool {
        match ctx.as_ref().get(&self.key) {
            Ok(current) => self.mode.compare(*current, self.value),
            Err(err) => {
                tracing::error!(key = self.key.name(), %err, "cannot compare blackboard float");
                false
            }
        }
    }
}

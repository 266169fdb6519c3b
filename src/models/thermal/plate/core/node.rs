use super::Condition;

/// One grid node: its condition tag and numeric state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    condition: Condition,
    current_value: f64,
    fixed_value: f64,
}

impl Node {
    /// Creates a node whose value is frozen at `value`.
    pub(super) fn fixed(condition: Condition, value: f64) -> Self {
        debug_assert!(condition.is_fixed());
        Self {
            condition,
            current_value: value,
            fixed_value: value,
        }
    }

    /// Creates a node that starts at `initial` and evolves with the solution.
    pub(super) fn free(condition: Condition, initial: f64) -> Self {
        debug_assert!(!condition.is_fixed());
        Self {
            condition,
            current_value: initial,
            fixed_value: initial,
        }
    }

    /// Returns the condition tag.
    #[must_use]
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Returns the current temperature value.
    #[must_use]
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Returns the frozen value of a Dirichlet or outside node.
    #[must_use]
    pub fn fixed_value(&self) -> Option<f64> {
        self.condition.is_fixed().then_some(self.fixed_value)
    }

    /// Updates the current value; writes to fixed nodes are ignored.
    pub(super) fn set(&mut self, value: f64) {
        if !self.condition.is_fixed() {
            self.current_value = value;
        }
    }
}

use thiserror::Error;

use super::{Axis, Condition};

/// Errors raised by the plate grid and its coefficient generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A node coordinate lies outside the grid.
    #[error("node ({x}, {y}) is outside the {width}x{height} grid")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A node's condition has no coefficient rule where it was placed.
    ///
    /// This indicates a geometry construction bug, such as a flux condition
    /// without a free neighbor along its axis.
    #[error("condition {condition:?} at ({x}, {y}) has no rule along {axis:?}")]
    UnknownConditionKind {
        condition: Condition,
        axis: Axis,
        x: usize,
        y: usize,
    },

    /// The grid needs at least two nodes along each axis.
    #[error("plate needs at least 2x2 nodes, got {x_nodes}x{y_nodes}")]
    InsufficientNodes { x_nodes: usize, y_nodes: usize },
}

//! Boundary-condition tags carried by every plate node.

/// Sweep direction of a 1-D implicit sub-problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Along a row (increasing `x`).
    X,
    /// Along a column (increasing `y`, ceiling to floor).
    Y,
}

impl Axis {
    /// Returns the neighbor of `(x, y)` one step along this axis in the
    /// positive (`forward = true`) or negative direction.
    ///
    /// Returns `None` when the step would leave the grid on the low side.
    /// Callers check the high side against the grid dimensions.
    pub(super) fn neighbor(self, x: usize, y: usize, forward: bool) -> Option<(usize, usize)> {
        match (self, forward) {
            (Self::X, true) => Some((x + 1, y)),
            (Self::X, false) => x.checked_sub(1).map(|x| (x, y)),
            (Self::Y, true) => Some((x, y + 1)),
            (Self::Y, false) => y.checked_sub(1).map(|y| (x, y)),
        }
    }
}

/// Condition kind of a single node.
///
/// Exactly one kind is assigned to every node when the plate is built, and it
/// never changes afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Free node governed by the heat equation.
    Interior,

    /// Fixed temperature.
    Dirichlet,

    /// Zero flux along `x`.
    NeumannX,

    /// Zero flux along `y`.
    NeumannY,

    /// Mixed flux/value condition along `x` (cavity side walls).
    RobinX,

    /// Mixed flux/value condition along `y` (cavity top and bottom walls).
    RobinY,

    /// Cavity corner, where the `x` and `y` Robin conditions meet.
    RobinXY,

    /// Outside the plate or inside the cavity; carries only a probe value.
    Outside,
}

impl Condition {
    /// Returns `true` for nodes whose value is frozen at construction.
    #[must_use]
    pub fn is_fixed(self) -> bool {
        matches!(self, Self::Dirichlet | Self::Outside)
    }

    /// Returns `true` for free PDE nodes.
    #[must_use]
    pub fn is_interior(self) -> bool {
        self == Self::Interior
    }

    /// Returns `true` if this condition constrains the flux along `axis`.
    #[must_use]
    pub fn constrains(self, axis: Axis) -> bool {
        match axis {
            Axis::X => matches!(self, Self::NeumannX | Self::RobinX | Self::RobinXY),
            Axis::Y => matches!(self, Self::NeumannY | Self::RobinY | Self::RobinXY),
        }
    }

    /// Returns `true` for the Neumann kinds.
    #[must_use]
    pub fn is_neumann(self) -> bool {
        matches!(self, Self::NeumannX | Self::NeumannY)
    }
}

//! Per-node tridiagonal coefficients and right-hand sides.
//!
//! Every node contributes one equation to the line system of each sweep:
//!
//! | node                         | `(sub, main, super)`      |
//! |------------------------------|---------------------------|
//! | Dirichlet, outside           | `(0, 1, 0)`               |
//! | flux along the sweep axis    | `(0, 1, c)` or `(c, 1, 0)`|
//! | everything else              | `(-R, 2R + 1, -R)`        |
//!
//! The one-sided flux equation always points at the neighbor that is a free
//! interior node.

use super::{Axis, Condition, GridError, Plate};

/// `(sub, main, super)` coefficients of one equation.
pub type TridiagCoefs = [f64; 3];

/// Two coefficients of a line-end equation.
///
/// `(main, super)` for the first node of a line, `(sub, main)` for the last.
pub type BoundaryCoefs = [f64; 2];

impl Plate {
    /// Returns the right-hand side for the node at `(x, y)` along `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside the grid.
    pub fn value_for_rhs(&self, axis: Axis, x: usize, y: usize) -> Result<f64, GridError> {
        let node = self.node(x, y)?;
        let rhs = match node.condition() {
            Condition::Outside => node.fixed_value().unwrap_or(self.temps.outside),
            kind if kind.constrains(axis) && kind.is_neumann() => 0.0,
            kind if kind.constrains(axis) => {
                (1.0 + self.params.flux_coefficient(kind, axis)) * self.temps.cavity
            }
            _ => node.current_value(),
        };
        Ok(rhs)
    }

    /// Returns the right-hand side for the row sweep.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside the grid.
    pub fn value_for_rhs_x(&self, x: usize, y: usize) -> Result<f64, GridError> {
        self.value_for_rhs(Axis::X, x, y)
    }

    /// Returns the right-hand side for the column sweep.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside the grid.
    pub fn value_for_rhs_y(&self, x: usize, y: usize) -> Result<f64, GridError> {
        self.value_for_rhs(Axis::Y, x, y)
    }

    /// Returns the coefficients of the node at `(x, y)` along `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside the
    /// grid, or [`GridError::UnknownConditionKind`] for a flux node without a
    /// free neighbor along `axis`.
    pub fn coefs(&self, axis: Axis, x: usize, y: usize) -> Result<TridiagCoefs, GridError> {
        match self.node(x, y)?.condition() {
            Condition::Dirichlet | Condition::Outside => Ok([0.0, 1.0, 0.0]),
            kind if kind.constrains(axis) => self.one_sided(kind, axis, x, y),
            _ => {
                let r = self.params.diffusion_number(axis);
                Ok([-r, 2.0 * r + 1.0, -r])
            }
        }
    }

    /// Returns the row-sweep coefficients of the node at `(x, y)`.
    ///
    /// # Errors
    ///
    /// See [`Plate::coefs`].
    pub fn coefs_x(&self, x: usize, y: usize) -> Result<TridiagCoefs, GridError> {
        self.coefs(Axis::X, x, y)
    }

    /// Returns the column-sweep coefficients of the node at `(x, y)`.
    ///
    /// # Errors
    ///
    /// See [`Plate::coefs`].
    pub fn coefs_y(&self, x: usize, y: usize) -> Result<TridiagCoefs, GridError> {
        self.coefs(Axis::Y, x, y)
    }

    /// Returns `(main, super)` for the first node of `line` along `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `line` is outside the grid, or
    /// [`GridError::UnknownConditionKind`] if the line does not start on a
    /// physical edge.
    pub fn boundary_first_coefs(&self, axis: Axis, line: usize) -> Result<BoundaryCoefs, GridError> {
        let (x, y) = match axis {
            Axis::X => (0, line),
            Axis::Y => (line, 0),
        };
        match self.node(x, y)?.condition() {
            Condition::Dirichlet | Condition::Outside => Ok([1.0, 0.0]),
            kind if kind.constrains(axis) && kind.is_neumann() => Ok([-1.0, 1.0]),
            kind if kind.constrains(axis) && self.is_interior_at(axis.neighbor(x, y, true)) => {
                Ok([1.0, self.params.flux_coefficient(kind, axis)])
            }
            condition => Err(GridError::UnknownConditionKind {
                condition,
                axis,
                x,
                y,
            }),
        }
    }

    /// Returns `(sub, main)` for the last node of `line` along `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if `line` is outside the grid, or
    /// [`GridError::UnknownConditionKind`] if the line does not end on a
    /// physical edge.
    pub fn boundary_last_coefs(&self, axis: Axis, line: usize) -> Result<BoundaryCoefs, GridError> {
        let (x, y) = match axis {
            Axis::X => (self.x_dim() - 1, line),
            Axis::Y => (line, self.y_dim() - 1),
        };
        match self.node(x, y)?.condition() {
            Condition::Dirichlet | Condition::Outside => Ok([0.0, 1.0]),
            kind if kind.constrains(axis) && kind.is_neumann() => Ok([-1.0, 1.0]),
            kind if kind.constrains(axis) && self.is_interior_at(axis.neighbor(x, y, false)) => {
                Ok([self.params.flux_coefficient(kind, axis), 1.0])
            }
            condition => Err(GridError::UnknownConditionKind {
                condition,
                axis,
                x,
                y,
            }),
        }
    }

    fn one_sided(
        &self,
        kind: Condition,
        axis: Axis,
        x: usize,
        y: usize,
    ) -> Result<TridiagCoefs, GridError> {
        let c = self.params.flux_coefficient(kind, axis);
        if self.is_interior_at(axis.neighbor(x, y, true)) {
            Ok([0.0, 1.0, c])
        } else if self.is_interior_at(axis.neighbor(x, y, false)) {
            Ok([c, 1.0, 0.0])
        } else {
            Err(GridError::UnknownConditionKind {
                condition: kind,
                axis,
                x,
                y,
            })
        }
    }
}

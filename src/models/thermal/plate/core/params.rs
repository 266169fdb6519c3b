use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

use super::{Axis, Condition};

/// Numerical parameters of the heat equation on the plate grid.
///
/// All values are strictly positive.
/// Units are up to the caller but must be consistent
/// (e.g., seconds, meters, and m²/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateParams {
    dt: f64,
    dx: f64,
    dy: f64,
    diffusivity: f64,
}

impl PlateParams {
    /// Constructs validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not strictly positive.
    pub fn new(dt: f64, dx: f64, dy: f64, diffusivity: f64) -> ConstraintResult<Self> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(dt)?,
            StrictlyPositive::new(dx)?,
            StrictlyPositive::new(dy)?,
            StrictlyPositive::new(diffusivity)?,
        ))
    }

    /// Constructs parameters from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        dt: Constrained<f64, StrictlyPositive>,
        dx: Constrained<f64, StrictlyPositive>,
        dy: Constrained<f64, StrictlyPositive>,
        diffusivity: Constrained<f64, StrictlyPositive>,
    ) -> Self {
        Self {
            dt: dt.into_inner(),
            dx: dx.into_inner(),
            dy: dy.into_inner(),
            diffusivity: diffusivity.into_inner(),
        }
    }

    /// Returns the time step.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the grid spacing along `axis`.
    #[must_use]
    pub fn spacing(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
        }
    }

    /// Returns the thermal diffusivity.
    #[must_use]
    pub fn diffusivity(&self) -> f64 {
        self.diffusivity
    }

    /// Returns the implicit diffusion number `R = a·dt/Δ²` along `axis`.
    #[must_use]
    pub fn diffusion_number(&self, axis: Axis) -> f64 {
        let step = self.spacing(axis);
        self.diffusivity * self.dt / (step * step)
    }

    /// Returns the one-sided flux coefficient of `condition` along `axis`.
    ///
    /// Neumann conditions use `-1` (zero normal derivative).
    /// Robin conditions use `-1/(1 + Δ)`.
    #[must_use]
    pub fn flux_coefficient(&self, condition: Condition, axis: Axis) -> f64 {
        if condition.is_neumann() {
            -1.0
        } else {
            -1.0 / (1.0 + self.spacing(axis))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn derived_coefficients() {
        let params = PlateParams::new(0.015, 0.1, 0.2, 1.0).unwrap();

        assert_relative_eq!(params.diffusion_number(Axis::X), 1.5, epsilon = 1e-12);
        assert_relative_eq!(params.diffusion_number(Axis::Y), 0.375, epsilon = 1e-12);
        assert_relative_eq!(
            params.flux_coefficient(Condition::RobinX, Axis::X),
            -1.0 / 1.1
        );
        assert_relative_eq!(
            params.flux_coefficient(Condition::RobinY, Axis::Y),
            -1.0 / 1.2
        );
        assert_relative_eq!(params.flux_coefficient(Condition::NeumannX, Axis::X), -1.0);
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(PlateParams::new(0.0, 0.1, 0.1, 1.0).is_err());
        assert!(PlateParams::new(0.1, -0.1, 0.1, 1.0).is_err());
        assert!(PlateParams::new(0.1, 0.1, f64::NAN, 1.0).is_err());
        assert!(PlateParams::new(0.1, 0.1, 0.1, 0.0).is_err());
    }
}

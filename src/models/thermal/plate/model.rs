//! [`twine_core::Model`] adapter for the plate core.

mod config;
mod error;

pub use config::PlateConfig;
pub use error::PlateModelError;

use tracing::debug;
use twine_core::Model;
use uom::si::{f64::Time, length::meter, time::second};

use super::core::{Frame, Plate, PlateParams, Problem};

/// Relative slack when converting a duration to a whole number of steps.
const STEP_ROUNDING_TOL: f64 = 1e-9;

/// Plate heat diffusion as a Twine model.
///
/// The plate is classified once at construction. Each call simulates a fresh
/// copy of it for the requested duration, so calls are independent.
#[derive(Debug, Clone)]
pub struct PlateModel {
    plate: Plate,
}

/// Temperature field after a simulated duration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlateSnapshot {
    /// Number of ADI steps taken.
    pub steps: usize,

    /// Node temperatures in °C.
    pub frame: Frame,
}

impl PlateModel {
    /// Validates `config` and classifies the plate grid.
    ///
    /// # Errors
    ///
    /// Returns [`PlateModelError::Params`] if the time step, spacings, or
    /// diffusivity are not strictly positive, and [`PlateModelError::Grid`]
    /// if the grid is smaller than 2x2.
    pub fn new(config: &PlateConfig) -> Result<Self, PlateModelError> {
        let params = PlateParams::new(
            config.time_step.get::<second>(),
            config.dx.get::<meter>(),
            config.dy.get::<meter>(),
            config.diffusivity.value,
        )?;
        let plate = Plate::new(
            params,
            config.x_nodes,
            config.y_nodes,
            &config.geometry,
            &config.temperatures(),
        )?;
        Ok(Self { plate })
    }

    /// Returns the plate in its initial state.
    #[must_use]
    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    /// Returns the number of steps needed to cover `duration`.
    ///
    /// A partial step counts as a whole one.
    ///
    /// # Errors
    ///
    /// Returns [`PlateModelError::InvalidDuration`] for a negative, NaN, or
    /// infinite duration.
    pub fn steps_for(&self, duration: Time) -> Result<usize, PlateModelError> {
        let ratio = duration.get::<second>() / self.plate.params().dt();
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(PlateModelError::InvalidDuration(duration));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (ratio - STEP_ROUNDING_TOL).ceil().max(0.0) as usize;
        Ok(steps)
    }
}

impl Model for PlateModel {
    type Input = Time;
    type Output = PlateSnapshot;
    type Error = PlateModelError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let steps = self.steps_for(*input)?;
        debug!(steps, "simulating plate");

        let mut problem = Problem::new(self.plate.clone(), steps);
        for _ in 0..steps {
            problem.step()?;
        }

        Ok(PlateSnapshot {
            steps,
            frame: problem.frame(),
        })
    }
}

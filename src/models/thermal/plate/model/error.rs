use thiserror::Error;
use uom::si::f64::Time;

use crate::support::constraint::ConstraintError;

use super::super::core::{GridError, StepError};

/// Errors that can occur while building or running a [`PlateModel`](super::PlateModel).
#[derive(Debug, Error)]
pub enum PlateModelError {
    /// A time step, spacing, or diffusivity was not strictly positive.
    #[error("invalid plate parameter")]
    Params(#[from] ConstraintError),

    /// The grid could not be built.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// An ADI step failed.
    #[error("step failed")]
    Step(#[from] StepError),

    /// The requested duration is negative or not finite.
    #[error("invalid simulation duration: {0:?}")]
    InvalidDuration(Time),
}

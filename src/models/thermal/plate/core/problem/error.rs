use thiserror::Error;

use crate::support::tridiagonal::TridiagonalError;

use super::super::GridError;

/// Errors that can occur while stepping a plate simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The iteration budget is exhausted.
    #[error("out of iterations: all {n_iters} steps have been taken")]
    OutOfIterations { n_iters: usize },

    /// Assembling a line system failed.
    #[error("line assembly failed")]
    Grid(#[from] GridError),

    /// Solving a line system failed.
    #[error("line solve failed")]
    Tridiagonal(#[from] TridiagonalError),
}

/// Errors that can occur while running a simulation into a [`FrameSink`].
///
/// [`FrameSink`]: super::super::FrameSink
#[derive(Debug, Error)]
pub enum RunError<E> {
    /// A simulation step failed.
    #[error("simulation step failed")]
    Step(#[from] StepError),

    /// The frame sink rejected a frame.
    #[error("frame sink failed")]
    Sink(#[source] E),
}

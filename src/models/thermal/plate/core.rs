//! Grid, boundary-condition, and ADI stepping logic for the plate model.
//!
//! A [`Plate`] is classified once from a [`Geometry`] and a set of
//! [`Temperatures`], then advanced by a [`Problem`] one implicit step at a
//! time. Frames of the temperature field are handed to a [`FrameSink`].

mod coefs;
mod condition;
mod error;
mod frame;
mod geometry;
mod grid;
mod node;
mod params;
mod problem;

#[cfg(test)]
mod test_support;

pub use coefs::{BoundaryCoefs, TridiagCoefs};
pub use condition::{Axis, Condition};
pub use error::GridError;
pub use frame::{Frame, FrameRecorder, FrameSink, MatrixWriter};
pub use geometry::{Cavity, CavityBounds, Geometry, Temperatures};
pub use grid::Plate;
pub use node::Node;
pub use params::PlateParams;
pub use problem::{Problem, RunError, StepError};

//! Transient heat diffusion over an irregular plate.
//!
//! The plate is a rectangle of nodes with a diagonal cut on its right side and
//! an optional rectangular cavity. Temperatures evolve under the 2-D heat
//! equation, advanced with an alternating-direction implicit (ADI) scheme:
//! each step solves every row, then every column, as a tridiagonal system.
//!
//! [`PlateModel`] exposes a whole simulation as a [`twine_core::Model`].
//! [`Problem`] steps a [`Plate`] directly and streams [`Frame`]s to a
//! [`FrameSink`], such as a [`MatrixWriter`] feeding a plotting pipe.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_plate::models::thermal::plate::{PlateConfig, PlateModel};
//! use uom::si::{f64::Time, time::second};
//!
//! let config = PlateConfig {
//!     x_nodes: 20,
//!     y_nodes: 10,
//!     ..PlateConfig::default()
//! };
//! let model = PlateModel::new(&config).unwrap();
//! let snapshot = model.call(&Time::new::<second>(0.15)).unwrap();
//!
//! assert_eq!(snapshot.steps, 10);
//! assert_eq!(snapshot.frame.width(), 20);
//! ```

mod core;
mod model;

pub use self::core::{
    Axis, BoundaryCoefs, Cavity, CavityBounds, Condition, Frame, FrameRecorder, FrameSink,
    Geometry, GridError, MatrixWriter, Node, Plate, PlateParams, Problem, RunError, StepError,
    Temperatures, TridiagCoefs,
};
pub use model::{PlateConfig, PlateModel, PlateModelError, PlateSnapshot};

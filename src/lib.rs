//! # Twine Plate
//!
//! Transient heat diffusion over an irregular plate, packaged as a
//! [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! ## Crate layout
//!
//! - [`models`]: The plate model and its stepping API.
//! - [`support`]: Numerical building blocks used by the model, such as the
//!   tridiagonal solver, value constraints, and unit extensions.
//!
//! Modules in [`support`] are public because they are useful on their own,
//! but their APIs are not stable.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

pub mod models;
pub mod support;

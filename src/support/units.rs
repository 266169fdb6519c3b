//! Extensions to [`uom`].
//!
//! [`uom`] has no named quantity for thermal diffusivity (m²/s), which the
//! plate models take as their material property. This module defines it as a
//! quantity alias so it composes with the rest of [`uom::si`]:
//!
//! ```
//! use uom::si::{
//!     area::square_meter,
//!     f64::{Area, Length, Time},
//!     length::meter,
//!     time::second,
//! };
//! use twine_plate::support::units::ThermalDiffusivity;
//!
//! let a: ThermalDiffusivity = Area::new::<square_meter>(1.0e-4) / Time::new::<second>(1.0);
//! let dt = Time::new::<second>(0.5);
//! let dx = Length::new::<meter>(0.01);
//!
//! // Diffusion number a·dt/dx² is dimensionless.
//! let r = (a * dt / (dx * dx)).value;
//! assert!((r - 0.5).abs() < 1e-12);
//! ```

mod quantities;

pub use quantities::{ThermalDiffusivity, square_meters_per_second};

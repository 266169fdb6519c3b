//! Supporting utilities used by the plate models.
//!
//! These modules are public because they are useful on their own (the
//! tridiagonal solver in particular), but their APIs are not stable.

pub mod constraint;
pub mod tridiagonal;
pub mod units;

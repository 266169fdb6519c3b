//! Thermal systems models.
//!
//! This module contains models for heat conduction in solids.

pub mod plate;

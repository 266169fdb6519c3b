//! Public Twine models.
//!
//! Each model lives in its own module with an internal `core` submodule that
//! holds the computation. The [`twine_core::Model`] implementation is a thin
//! adapter over that core, and the core types a caller needs for finer
//! control (stepping, frame sinks) are re-exported next to it.

pub mod thermal;

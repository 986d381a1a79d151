//! Optional adapters for external math libraries.
//!
//! Enable feature flags (e.g. `nalgebra`) to convert between `Point2` and
//! external point and vector types.

#[cfg(feature = "nalgebra")]
pub mod nalgebra;

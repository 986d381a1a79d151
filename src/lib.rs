//! Conversion of cubic Bézier curves into quadratic Bézier splines.
//!
//! Outline formats such as TrueType only know quadratic curves, while most
//! design sources are drawn with cubics. This crate replaces every cubic of a
//! contour with the shortest quadratic spline (a chain of quadratics with
//! implied on-curve joints) that keeps the original end tangents and stays
//! within a maximum sampled distance from the cubic.
//!
//! When several masters of a font have to stay interpolation-compatible, the
//! corresponding curves of all masters are converted together and settle on
//! one shared segment count.
//!
//! ```
//! use quadspline::{curve_to_quadratic, CubicBezier, Point2};
//!
//! # fn main() -> quadspline::Result<()> {
//! let cubic = CubicBezier::new(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 55.0),
//!     Point2::new(45.0, 100.0),
//!     Point2::new(100.0, 100.0),
//! );
//! let approx = curve_to_quadratic(&cubic, 10, 1.0)?;
//! assert!(approx.within_tolerance);
//! assert_eq!(approx.spline.start(), cubic.start());
//! assert_eq!(approx.spline.end(), cubic.end());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use core::fmt::Debug;

use num_traits::Float;

pub mod adapters;
pub mod config;
pub mod convert;
pub mod cubic_bezier;
pub mod curve_like;
pub mod error;
pub mod fit;
pub mod group;
pub mod outline;
pub mod point2;
pub mod quadratic_bezier;
pub mod report;
pub mod sampler;
pub mod search;
pub mod spline;
pub mod zip;

pub use config::ConversionConfig;
pub use convert::{cubic_segment_to_quadratic, fonts_to_quadratic, glyph_curves_to_quadratic};
pub use cubic_bezier::CubicBezier;
pub use curve_like::CurveLike;
pub use error::{ConvertError, Level, Result};
pub use fit::{blended_control, fit_spline, tangent_intersection};
pub use group::{CurveGroup, SplineGroup};
pub use outline::{Contour, Font, Glyph, Segment, SegmentType};
pub use point2::Point2;
pub use quadratic_bezier::QuadraticBezier;
pub use report::Report;
pub use sampler::{spline_error, TOTAL_STEPS};
pub use search::{approximate, curve_group_to_quadratic, curve_to_quadratic, Approximation};
pub use spline::{QuadraticSpline, Spline};
pub use zip::{check_compatible, zip_exact};

/// Default scalar type for coordinates.
pub type NativeFloat = f64;

/// Tolerance used by tests when comparing computed coordinates.
pub const EPSILON: NativeFloat = 1e-9;

/// Floating point types usable as coordinates.
///
/// `From<f32>` lets constants and small counts enter generic code without a
/// fallible numeric cast.
pub trait Scalar: Float + Default + Debug + From<f32> {}

impl<T> Scalar for T where T: Float + Default + Debug + From<f32> {}

/// Converts a segment or step count into a scalar. Counts here stay far below
/// the 2^24 limit where `f32` stops being exact.
#[inline]
pub(crate) fn count<T: Scalar>(n: usize) -> T {
    (n as f32).into()
}

//! Nalgebra adapter implementations.
//!
//! Enable this adapter with the `nalgebra` feature to convert between
//! `Point2<T>` and `nalgebra::Point2<T>` / `nalgebra::Vector2<T>`. Add
//! `nalgebra` as a direct dependency to construct those in your own code.
//!
//! # Example
//! ```rust,no_run
//! use quadspline::{curve_to_quadratic, CubicBezier};
//!
//! # fn main() -> quadspline::Result<()> {
//! let points = [
//!     nalgebra::Point2::new(0.0, 0.0),
//!     nalgebra::Point2::new(0.0, 55.0),
//!     nalgebra::Point2::new(45.0, 100.0),
//!     nalgebra::Point2::new(100.0, 100.0),
//! ];
//! let curve = CubicBezier::new(
//!     points[0].into(),
//!     points[1].into(),
//!     points[2].into(),
//!     points[3].into(),
//! );
//! let approx = curve_to_quadratic(&curve, 10, 1.0)?;
//! let controls: Vec<nalgebra::Point2<f64>> =
//!     approx.spline.points().iter().map(|&p| p.into()).collect();
//! # let _ = controls;
//! # Ok(())
//! # }
//! ```
//!
//! The scalar type must satisfy `nalgebra::Scalar` as well as this crate's
//! `Scalar` (e.g. `f32` or `f64`).

use nalgebra::Vector2;

use crate::point2::Point2;
use crate::Scalar;

impl<T> From<nalgebra::Point2<T>> for Point2<T>
where
    T: Scalar + nalgebra::Scalar,
{
    fn from(p: nalgebra::Point2<T>) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl<T> From<Point2<T>> for nalgebra::Point2<T>
where
    T: Scalar + nalgebra::Scalar,
{
    fn from(p: Point2<T>) -> Self {
        nalgebra::Point2::new(p.x(), p.y())
    }
}

impl<T> From<Vector2<T>> for Point2<T>
where
    T: Scalar + nalgebra::Scalar,
{
    fn from(v: Vector2<T>) -> Self {
        Point2::new(v.x, v.y)
    }
}

impl<T> From<Point2<T>> for Vector2<T>
where
    T: Scalar + nalgebra::Scalar,
{
    fn from(p: Point2<T>) -> Self {
        Vector2::new(p.x(), p.y())
    }
}

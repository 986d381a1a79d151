//! Common interface of a single cubic and a group of parallel cubics.
//!
//! The search in [`crate::search`] only talks to this trait, so one
//! implementation serves both a lone curve and the corresponding curves of
//! several font masters.
use super::cubic_bezier::CubicBezier;
use super::fit::fit_spline;
use super::point2::Point2;
use super::sampler::spline_error;
use super::spline::QuadraticSpline;
use super::Scalar;

pub trait CurveLike: Sized {
    type Scalar: Scalar;
    /// What evaluating the curve yields: one point, or one point per member
    type Output;
    /// The quadratic approximation: one spline, or one spline per member
    type Spline;

    fn eval(&self, t: Self::Scalar) -> Self::Output;

    fn split(&self, t: Self::Scalar) -> (Self, Self);

    /// Approximate with exactly `n` quadratic segments. None if no such
    /// approximation exists.
    fn fit(&self, n: usize) -> Option<Self::Spline>;

    /// Maximum sampled distance between the curve and its approximation.
    fn max_error(&self, spline: &Self::Spline) -> Self::Scalar;

    fn segment_count(spline: &Self::Spline) -> usize;
}

impl<T: Scalar> CurveLike for CubicBezier<T> {
    type Scalar = T;
    type Output = Point2<T>;
    type Spline = QuadraticSpline<T>;

    fn eval(&self, t: T) -> Point2<T> {
        CubicBezier::eval(self, t)
    }

    fn split(&self, t: T) -> (Self, Self) {
        CubicBezier::split(self, t)
    }

    fn fit(&self, n: usize) -> Option<QuadraticSpline<T>> {
        fit_spline(self, n)
    }

    fn max_error(&self, spline: &QuadraticSpline<T>) -> T {
        spline_error(self, spline)
    }

    fn segment_count(spline: &QuadraticSpline<T>) -> usize {
        spline.segment_count()
    }
}

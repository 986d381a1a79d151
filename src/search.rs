//! Search for the smallest quadratic spline within an error bound.
use super::cubic_bezier::CubicBezier;
use super::curve_like::CurveLike;
use super::error::{ConvertError, Result};
use super::group::{CurveGroup, SplineGroup};
use super::point2::Point2;
use super::spline::QuadraticSpline;
use super::Scalar;

/// Result of a search: the chosen spline(s) together with the error they
/// actually achieve.
#[derive(Clone, Debug, PartialEq)]
pub struct Approximation<S, T> {
    pub spline: S,
    /// Number of quadratic segments of the spline (shared by all members of a group)
    pub segments: usize,
    /// Maximum sampled distance from the original curve(s)
    pub error: T,
    /// False if the segment budget ran out before the error bound was met,
    /// in which case `spline` is the best effort at the largest count tried.
    pub within_tolerance: bool,
}

/// Find the smallest segment count n in `1..=max_segments` whose
/// approximation stays within `max_error`.
///
/// Counts for which no approximation exists are skipped. If the budget runs
/// out the last computed approximation is returned with `within_tolerance`
/// unset. A budget of one with parallel end tangents still tries two
/// segments. Fails with `NoApproximation` only if `fit` found nothing up to
/// `max(max_segments, 2)`, which cannot happen for cubics and groups of
/// cubics.
///
/// The search assumes the error does not grow with n. The fitting heuristic
/// does not guarantee that, so a larger budget is not proven to find a
/// smaller error than the first acceptable count.
pub fn approximate<C>(
    curve: &C,
    max_segments: usize,
    max_error: C::Scalar,
) -> Result<Approximation<C::Spline, C::Scalar>>
where
    C: CurveLike,
{
    let limit = max_segments.max(2);
    for n in 1..=limit {
        let Some(spline) = curve.fit(n) else {
            continue;
        };
        let error = curve.max_error(&spline);
        let within_tolerance = error <= max_error;
        if within_tolerance || n >= max_segments {
            if within_tolerance {
                log::trace!("accepted {} segments with error {:?}", n, error);
            } else {
                log::trace!(
                    "no count up to {} within {:?}, keeping {} segments with error {:?}",
                    max_segments,
                    max_error,
                    n,
                    error
                );
            }
            return Ok(Approximation {
                spline,
                segments: n,
                error,
                within_tolerance,
            });
        }
    }
    Err(ConvertError::NoApproximation {
        max_segments: limit,
    })
}

/// Approximate a single cubic with a quadratic spline.
pub fn curve_to_quadratic<T: Scalar>(
    curve: &CubicBezier<T>,
    max_segments: usize,
    max_error: T,
) -> Result<Approximation<QuadraticSpline<T>, T>> {
    approximate(curve, max_segments, max_error)
}

/// Approximate corresponding cubics of several sources with splines that
/// share one segment count. Each source provides the four control points of
/// its curve; any other number is a structural mismatch.
pub fn curve_group_to_quadratic<T, S>(
    sources: &[S],
    max_segments: usize,
    max_error: T,
) -> Result<Approximation<SplineGroup<T>, T>>
where
    T: Scalar,
    S: AsRef<[Point2<T>]>,
{
    let group = CurveGroup::from_sources(sources)?;
    approximate(&group, max_segments, max_error)
}

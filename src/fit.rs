//! Construction of a quadratic spline with a fixed number of segments from a cubic.
//!
//! Available functions:
//! - `tangent_intersection()`
//! - `blended_control()`
//! - `fit_spline()`
use super::cubic_bezier::CubicBezier;
use super::point2::Point2;
use super::spline::QuadraticSpline;
use super::{count, Scalar};

/// Intersection of the start tangent (through start and ctrl1) with the end
/// tangent (through ctrl2 and end) of the cubic.
///
/// The end tangent is parametrized as `ctrl2 + (end - ctrl2) * h`; projecting
/// onto the normal of the start tangent solves for h directly.
/// Returns None if the tangents are parallel (or one of them has zero
/// length), in which case no single quadratic with the cubic's end tangents
/// exists. Parallelism is judged on the angle between the tangents, so the
/// result does not depend on the size of the curve.
pub fn tangent_intersection<T: Scalar>(curve: &CubicBezier<T>) -> Option<Point2<T>> {
    let ab = curve.ctrl1 - curve.start;
    let cd = curve.end - curve.ctrl2;
    let normal = ab.perpendicular();
    let denominator = normal.dot(cd);
    // |ab| |cd| sin(angle), compared relative to the tangent lengths
    let scale = ab.squared_length().sqrt() * cd.squared_length().sqrt();
    if denominator.abs() <= T::epsilon() * scale {
        return None;
    }
    let h = normal.dot(curve.start - curve.ctrl2) / denominator;
    Some(curve.ctrl2 + cd * h)
}

/// Control point of a single quadratic approximating `curve`.
///
/// `lerp(start, ctrl1, 1.5)` is the control point a quadratic sharing the
/// cubic's start derivative would have, `lerp(end, ctrl2, 1.5)` the one
/// sharing its end derivative. t blends between both estimates.
pub fn blended_control<T: Scalar>(curve: &CubicBezier<T>, t: T) -> Point2<T> {
    let three_halves: T = 1.5f32.into();
    let from_start = curve.start.lerp(curve.ctrl1, three_halves);
    let from_end = curve.end.lerp(curve.ctrl2, three_halves);
    from_start.lerp(from_end, t)
}

/// Approximate a cubic with a spline of exactly `n` quadratic segments.
///
/// For n == 1 the single control point is the intersection of the cubic's
/// end tangents. For larger n the cubic is cut into n even pieces and piece i
/// contributes `blended_control(piece, i / (n - 1))`, biasing the first piece
/// towards its start estimate and the last one towards its end estimate so
/// the controls line up into one smooth spline.
///
/// Returns None if n is 0, or if n is 1 and the tangents are parallel.
pub fn fit_spline<T: Scalar>(curve: &CubicBezier<T>, n: usize) -> Option<QuadraticSpline<T>> {
    match n {
        0 => None,
        1 => {
            let ctrl = tangent_intersection(curve)?;
            Some(QuadraticSpline::from_parts(curve.start, [ctrl], curve.end))
        }
        _ => {
            let last = count::<T>(n - 1);
            let controls = curve
                .split_uniform(n)
                .enumerate()
                .map(|(i, piece)| blended_control(&piece, count::<T>(i) / last));
            Some(QuadraticSpline::from_parts(curve.start, controls, curve.end))
        }
    }
}

use super::cubic_bezier::CubicBezier;
use super::spline::QuadraticSpline;
use super::{count, Scalar};

/// Number of samples taken along the whole spline, distributed evenly over
/// its segments.
pub const TOTAL_STEPS: usize = 20;

/// Maximum sampled distance between a cubic and a quadratic spline.
///
/// The parameter range of the cubic is split into one equal interval per
/// spline segment. Each interval is sampled `TOTAL_STEPS / n` times (at least
/// once) and compared against the rendered quadratic segment at the same
/// local parameter. Rendered segments join at the implied midpoints between
/// control points, which is how a TrueType rasterizer draws the spline.
pub fn spline_error<T: Scalar>(curve: &CubicBezier<T>, spline: &QuadraticSpline<T>) -> T {
    let n = spline.segment_count();
    let steps = (TOTAL_STEPS / n).max(1);
    let mut error = T::zero();
    for (i, segment) in spline.segments().enumerate() {
        for j in 0..steps {
            let local = count::<T>(j) / count(steps);
            let global = (local + count(i)) / count(n);
            let distance = curve.eval(global).distance(segment.eval(local));
            error = error.max(distance);
        }
    }
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::fit_spline;
    use crate::point2::Point2;
    use crate::EPSILON;

    #[test]
    fn elevated_quadratic_has_no_error() {
        // cubic obtained by degree elevation of the quadratic (0,0) (3,3) (6,0)
        let curve = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(4.0, 2.0),
            Point2::new(6.0, 0.0),
        );
        let spline = fit_spline(&curve, 1).unwrap();
        assert!(spline_error(&curve, &spline) < EPSILON);
    }

    #[test]
    fn known_single_segment_error() {
        // quarter circle of radius 100, the single quadratic has its control
        // at the corner (0, 100). At t = 1/2 the cubic passes (29.375, 70.625)
        // while the quadratic passes (25, 75).
        let curve = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 55.0),
            Point2::new(45.0, 100.0),
            Point2::new(100.0, 100.0),
        );
        let spline = fit_spline(&curve, 1).unwrap();
        let error = spline_error(&curve, &spline);
        let at_half = Point2::new(29.375, 70.625).distance(Point2::new(25.0, 75.0));
        assert!(error >= at_half - EPSILON);
        assert!(error < 30.0);
    }

    #[test]
    fn error_is_deterministic() {
        let curve = CubicBezier::new(
            Point2::new(10.0, 3.0),
            Point2::new(250.0, 80.0),
            Point2::new(-40.0, 500.0),
            Point2::new(300.0, 420.0),
        );
        for n in 2..=6 {
            let spline = fit_spline(&curve, n).unwrap();
            assert_eq!(spline_error(&curve, &spline), spline_error(&curve, &spline));
        }
    }

    #[test]
    fn more_segments_than_steps_still_sample() {
        let curve = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 55.0),
            Point2::new(45.0, 100.0),
            Point2::new(100.0, 100.0),
        );
        let spline = fit_spline(&curve, 25).unwrap();
        let error: f64 = spline_error(&curve, &spline);
        assert!(error.is_finite());
        assert!(error < 1.0);
    }
}

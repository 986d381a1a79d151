use super::point2::Point2;
use super::{count, Scalar};

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<T> {
    pub(crate) start: Point2<T>,
    pub(crate) ctrl1: Point2<T>,
    pub(crate) ctrl2: Point2<T>,
    pub(crate) end: Point2<T>,
}

impl<T> CubicBezier<T>
where
    T: Scalar,
{
    pub fn new(start: Point2<T>, ctrl1: Point2<T>, ctrl2: Point2<T>, end: Point2<T>) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> Point2<T> {
        self.start
    }

    pub fn ctrl1(&self) -> Point2<T> {
        self.ctrl1
    }

    pub fn ctrl2(&self) -> Point2<T> {
        self.ctrl2
    }

    pub fn end(&self) -> Point2<T> {
        self.end
    }

    pub fn control_points(&self) -> [Point2<T>; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Evaluate the curve at t using the numerically stable De Casteljau algorithm
    pub fn eval(&self, t: T) -> Point2<T> {
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start.lerp(self.ctrl1, t);
        let ctrl_1bc = self.ctrl1.lerp(self.ctrl2, t);
        let ctrl_1cd = self.ctrl2.lerp(self.end, t);
        // second iteration
        let ctrl_2ab = ctrl_1ab.lerp(ctrl_1bc, t);
        let ctrl_2bc = ctrl_1bc.lerp(ctrl_1cd, t);
        // third iteration, final point on the curve
        ctrl_2ab.lerp(ctrl_2bc, t)
    }

    pub fn split(&self, t: T) -> (Self, Self) {
        let ctrl_1ab = self.start.lerp(self.ctrl1, t);
        let ctrl_1bc = self.ctrl1.lerp(self.ctrl2, t);
        let ctrl_1cd = self.ctrl2.lerp(self.end, t);
        let ctrl_2ab = ctrl_1ab.lerp(ctrl_1bc, t);
        let ctrl_2bc = ctrl_1bc.lerp(ctrl_1cd, t);
        let ctrl_3ab = ctrl_2ab.lerp(ctrl_2bc, t);

        (
            CubicBezier {
                start: self.start,
                ctrl1: ctrl_1ab,
                ctrl2: ctrl_2ab,
                end: ctrl_3ab,
            },
            CubicBezier {
                start: ctrl_3ab,
                ctrl1: ctrl_2bc,
                ctrl2: ctrl_1cd,
                end: self.end,
            },
        )
    }

    /// Return the part of the curve between t0 and t1 (t0 < t1) as a new cubic.
    /// The endpoints of the piece are evaluated directly so that neighbouring
    /// pieces share bit-identical joints.
    pub fn subsegment(&self, t0: T, t1: T) -> Self {
        let (head, _) = self.split(t1);
        let piece = if t1 > T::zero() {
            head.split(t0 / t1).1
        } else {
            head
        };
        CubicBezier {
            start: if t0 == T::zero() { self.start } else { self.eval(t0) },
            ctrl1: piece.ctrl1,
            ctrl2: piece.ctrl2,
            end: if t1 == T::one() { self.end } else { self.eval(t1) },
        }
    }

    /// Split the curve into `n` pieces at the evenly spaced parameters `i / n`.
    /// Yields nothing for `n == 0`.
    pub fn split_uniform(&self, n: usize) -> impl Iterator<Item = CubicBezier<T>> + '_ {
        (0..n).map(move |i| {
            let t0 = count::<T>(i) / count::<T>(n);
            let t1 = if i + 1 == n {
                T::one()
            } else {
                count::<T>(i + 1) / count::<T>(n)
            };
            self.subsegment(t0, t1)
        })
    }
}

impl<T> From<[Point2<T>; 4]> for CubicBezier<T> {
    fn from([start, ctrl1, ctrl2, end]: [Point2<T>; 4]) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    fn arbitrary() -> CubicBezier<f64> {
        CubicBezier::new(
            Point2::new(0.0, 1.77),
            Point2::new(2.9, 0.0),
            Point2::new(4.3, 3.0),
            Point2::new(3.2, -4.0),
        )
    }

    #[test]
    fn circle_approximation_error() {
        // control points chosen for minimum radial distance error
        // according to: http://spencermortensen.com/articles/bezier-circle/
        let c = 0.551915024494;
        let max_drift_perc = 0.019608; // radial drift percent
        let max_error = max_drift_perc * 0.01; // absolute max radial error

        let quadrant = CubicBezier::new(
            Point2::new(0.0, 1.0),
            Point2::new(c, 1.0),
            Point2::new(1.0, c),
            Point2::new(1.0, 0.0),
        );
        let nsteps = 1000;
        for t in 0..=nsteps {
            let t = t as f64 / nsteps as f64;
            let radius = quadrant.eval(t).distance(Point2::new(0.0, 0.0));
            assert!((radius - 1.0).abs() <= max_error);
        }
    }

    #[test]
    fn eval_matches_polynomial() {
        let bezier = arbitrary();
        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 / nsteps as f64;
            let one_t = 1.0 - t;
            let expected = bezier.start * (one_t * one_t * one_t)
                + bezier.ctrl1 * (3.0 * t * one_t * one_t)
                + bezier.ctrl2 * (3.0 * t * t * one_t)
                + bezier.end * (t * t * t);
            assert!((bezier.eval(t) - expected).squared_length() < EPSILON);
        }
    }

    #[test]
    fn split_equivalence() {
        let bezier = arbitrary();
        let (left, right) = bezier.split(0.5);
        // take the difference of the two points which must not exceed the absolute error
        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 / nsteps as f64;
            let err = bezier.eval(t / 2.0) - left.eval(t);
            assert!(err.squared_length() < EPSILON);
            let err = bezier.eval(t * 0.5 + 0.5) - right.eval(t);
            assert!(err.squared_length() < EPSILON);
        }
    }

    #[test]
    fn subsegment_follows_parent() {
        let bezier = arbitrary();
        let piece = bezier.subsegment(0.25, 0.6);
        let nsteps: usize = 100;
        for t in 0..=nsteps {
            let t = t as f64 / nsteps as f64;
            let err = bezier.eval(0.25 + t * 0.35) - piece.eval(t);
            assert!(err.squared_length() < EPSILON);
        }
    }

    #[test]
    fn split_uniform_pieces_are_contiguous() {
        let bezier = arbitrary();
        let pieces: Vec<_> = bezier.split_uniform(3).collect();
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].start, bezier.start);
        assert_eq!(pieces[2].end, bezier.end);
        assert_eq!(pieces[0].end, pieces[1].start);
        assert_eq!(pieces[1].end, pieces[2].start);
        assert!((pieces[1].start - bezier.eval(1.0 / 3.0)).squared_length() < EPSILON);
        assert_eq!(bezier.split_uniform(0).count(), 0);
        assert_eq!(bezier.split_uniform(1).next(), Some(bezier));
    }
}

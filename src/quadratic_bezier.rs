use super::point2::Point2;
use super::Scalar;

/// A 2d quadratic Bezier curve defined by a start point, one control point
/// and an end point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticBezier<T> {
    pub(crate) start: Point2<T>,
    pub(crate) ctrl: Point2<T>,
    pub(crate) end: Point2<T>,
}

impl<T> QuadraticBezier<T>
where
    T: Scalar,
{
    pub fn new(start: Point2<T>, ctrl: Point2<T>, end: Point2<T>) -> Self {
        QuadraticBezier { start, ctrl, end }
    }

    pub fn start(&self) -> Point2<T> {
        self.start
    }

    pub fn ctrl(&self) -> Point2<T> {
        self.ctrl
    }

    pub fn end(&self) -> Point2<T> {
        self.end
    }

    /// Evaluate the curve at t using the De Casteljau algorithm
    pub fn eval(&self, t: T) -> Point2<T> {
        // unrolled de casteljau algorithm
        let ctrl_1ab = self.start.lerp(self.ctrl, t);
        let ctrl_1bc = self.ctrl.lerp(self.end, t);
        // second iteration, final point on the curve
        ctrl_1ab.lerp(ctrl_1bc, t)
    }
}

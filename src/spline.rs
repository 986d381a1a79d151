//! Quadratic splines and their evaluation over the whole parameter range.
use tinyvec::TinyVec;

use super::point2::Point2;
use super::quadratic_bezier::QuadraticBezier;
use super::{count, Scalar};

/// A curve that can be evaluated at a parameter t in [0,1]
pub trait Spline<T> {
    fn eval(&self, t: T) -> Point2<T>;
}

/// Point storage of a spline. Splines of up to ten segments stay inline.
pub type SplinePoints<T> = TinyVec<[Point2<T>; 12]>;

/// A chain of quadratic Bezier segments stored the way TrueType stores them:
/// `[start, ctrl_1, ctrl_2, ..., ctrl_n, end]`.
/// The on-curve joints between two segments are implied as the midpoints of
/// neighbouring control points, so a spline of n segments holds n + 2 points
/// and is tangent-continuous at every joint by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadraticSpline<T: Scalar> {
    points: SplinePoints<T>,
}

impl<T> QuadraticSpline<T>
where
    T: Scalar,
{
    /// Build a spline from its start point, control points and end point.
    /// Returns None if there is not at least one control point.
    pub fn new(points: &[Point2<T>]) -> Option<Self> {
        if points.len() < 3 {
            return None;
        }
        Some(QuadraticSpline {
            points: points.iter().copied().collect(),
        })
    }

    pub(crate) fn from_parts(
        start: Point2<T>,
        controls: impl IntoIterator<Item = Point2<T>>,
        end: Point2<T>,
    ) -> Self {
        let mut points = SplinePoints::new();
        points.push(start);
        points.extend(controls);
        points.push(end);
        debug_assert!(points.len() >= 3);
        QuadraticSpline { points }
    }

    /// Number of quadratic segments (= number of control points)
    pub fn segment_count(&self) -> usize {
        self.points.len() - 2
    }

    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    pub fn start(&self) -> Point2<T> {
        self.points[0]
    }

    pub fn end(&self) -> Point2<T> {
        self.points[self.points.len() - 1]
    }

    /// The off-curve points of the spline
    pub fn control_points(&self) -> &[Point2<T>] {
        &self.points[1..self.points.len() - 1]
    }

    /// All points but the start, i.e. what a contour segment stores since its
    /// start point belongs to the preceding segment.
    pub fn after_start(&self) -> &[Point2<T>] {
        &self.points[1..]
    }

    /// Iterate over the rendered quadratic segments. The first and last
    /// segment end on the true start and end point, every interior joint is
    /// the midpoint of the two neighbouring control points.
    pub fn segments(&self) -> impl Iterator<Item = QuadraticBezier<T>> + '_ {
        let n = self.segment_count();
        let p = &self.points;
        (1..=n).map(move |i| QuadraticBezier {
            start: if i == 1 { p[0] } else { p[i - 1].midpoint(p[i]) },
            ctrl: p[i],
            end: if i == n { p[i + 1] } else { p[i].midpoint(p[i + 1]) },
        })
    }

    pub fn into_points(self) -> Vec<Point2<T>> {
        self.points.to_vec()
    }

    fn segment_parameter(&self, t: T) -> (usize, T) {
        let n = self.segment_count();
        let t = t.max(T::zero()).min(T::one());
        let scaled = t * count(n);
        if scaled >= count(n) {
            return (n - 1, T::one());
        }
        let index = scaled.floor();
        let local = scaled - index;
        // floor() of a value in [0, n) always fits
        let index = index.to_usize().unwrap_or(0).min(n - 1);
        (index, local)
    }
}

impl<T: Scalar> Spline<T> for QuadraticSpline<T> {
    /// Evaluate a point along the whole spline for t in [0,1], each segment
    /// covering an equal share of the parameter range. t is clamped.
    fn eval(&self, t: T) -> Point2<T> {
        let (index, local) = self.segment_parameter(t);
        match self.segments().nth(index) {
            Some(segment) => segment.eval(local),
            None => self.end(),
        }
    }
}

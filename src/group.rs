use super::cubic_bezier::CubicBezier;
use super::curve_like::CurveLike;
use super::error::{ConvertError, Level, Result};
use super::fit::fit_spline;
use super::point2::Point2;
use super::sampler::spline_error;
use super::spline::QuadraticSpline;
use super::Scalar;

/// Corresponding cubic curves of several parallel sources (e.g. font masters)
/// that have to be approximated with the same number of quadratic segments.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveGroup<T: Scalar> {
    curves: Vec<CubicBezier<T>>,
}

impl<T: Scalar> CurveGroup<T> {
    pub fn new(curves: Vec<CubicBezier<T>>) -> Result<Self> {
        if curves.is_empty() {
            return Err(ConvertError::EmptyGroup);
        }
        Ok(CurveGroup { curves })
    }

    /// Build a group from the four control points of each source.
    /// Every source has to provide exactly four points.
    pub fn from_sources<S>(sources: &[S]) -> Result<Self>
    where
        S: AsRef<[Point2<T>]>,
    {
        let lengths: Vec<usize> = sources.iter().map(|s| s.as_ref().len()).collect();
        if lengths.iter().any(|&len| len != 4) {
            return Err(ConvertError::StructuralMismatch {
                level: Level::Point,
                location: "curve group".to_string(),
                lengths,
            });
        }
        let curves = sources
            .iter()
            .map(|s| {
                let p = s.as_ref();
                CubicBezier::new(p[0], p[1], p[2], p[3])
            })
            .collect();
        CurveGroup::new(curves)
    }

    pub fn curves(&self) -> &[CubicBezier<T>] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// Quadratic splines of a `CurveGroup`, all with the same segment count.
#[derive(Clone, Debug, PartialEq)]
pub struct SplineGroup<T: Scalar> {
    splines: Vec<QuadraticSpline<T>>,
}

impl<T: Scalar> SplineGroup<T> {
    pub fn splines(&self) -> &[QuadraticSpline<T>] {
        &self.splines
    }

    pub fn into_splines(self) -> Vec<QuadraticSpline<T>> {
        self.splines
    }

    /// Shared segment count of all member splines
    pub fn segment_count(&self) -> usize {
        self.splines.first().map_or(0, |s| s.segment_count())
    }
}

impl<T: Scalar> CurveLike for CurveGroup<T> {
    type Scalar = T;
    type Output = Vec<Point2<T>>;
    type Spline = SplineGroup<T>;

    fn eval(&self, t: T) -> Vec<Point2<T>> {
        self.curves.iter().map(|c| c.eval(t)).collect()
    }

    fn split(&self, t: T) -> (Self, Self) {
        let (left, right): (Vec<_>, Vec<_>) = self.curves.iter().map(|c| c.split(t)).unzip();
        (CurveGroup { curves: left }, CurveGroup { curves: right })
    }

    /// Succeeds only if every member can be approximated with `n` segments.
    fn fit(&self, n: usize) -> Option<SplineGroup<T>> {
        let splines = self
            .curves
            .iter()
            .map(|c| fit_spline(c, n))
            .collect::<Option<Vec<_>>>()?;
        Some(SplineGroup { splines })
    }

    /// Worst error over all members
    fn max_error(&self, spline: &SplineGroup<T>) -> T {
        self.curves
            .iter()
            .zip(spline.splines.iter())
            .map(|(c, s)| spline_error(c, s))
            .fold(T::zero(), T::max)
    }

    fn segment_count(spline: &SplineGroup<T>) -> usize {
        spline.segment_count()
    }
}

//! Minimal outline model: fonts made of glyphs made of contours made of segments.
//!
//! Segments follow the usual font editor convention: a segment stores its
//! off-curve points followed by its final on-curve point, its start point is
//! the last point of the preceding segment of the same contour.
use super::point2::Point2;
use super::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    /// Starting point of an open contour
    Move,
    Line,
    /// Cubic curve: two off-curve points and the end point
    Curve,
    /// Quadratic spline: any number of off-curve points and the end point
    QCurve,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Segment<T: Scalar> {
    pub kind: SegmentType,
    pub points: Vec<Point2<T>>,
    pub smooth: bool,
}

impl<T: Scalar> Segment<T> {
    pub fn new(kind: SegmentType, points: Vec<Point2<T>>, smooth: bool) -> Self {
        Segment {
            kind,
            points,
            smooth,
        }
    }

    /// A quadratic spline segment built from `points` (off-curve points, then
    /// the end point).
    pub fn quadratic(points: Vec<Point2<T>>, smooth: bool) -> Self {
        Segment::new(SegmentType::QCurve, points, smooth)
    }

    pub fn is_cubic(&self) -> bool {
        self.kind == SegmentType::Curve
    }

    /// Final on-curve point of the segment
    pub fn last_point(&self) -> Option<Point2<T>> {
        self.points.last().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour<T: Scalar> {
    pub(crate) segments: Vec<Segment<T>>,
}

impl<T: Scalar> Contour<T> {
    pub fn new(segments: Vec<Segment<T>>) -> Self {
        Contour { segments }
    }

    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Replace the whole segment list at once.
    pub fn replace_segments(&mut self, segments: Vec<Segment<T>>) {
        self.segments = segments;
    }

    /// Start point of the segment at `index`: the last point of the segment
    /// before it. The first segment of a closed contour starts where the last
    /// segment ends.
    pub fn start_point(&self, index: usize) -> Option<Point2<T>> {
        let len = self.segments.len();
        if index >= len {
            return None;
        }
        let previous = (index + len - 1) % len;
        self.segments[previous].last_point()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph<T: Scalar> {
    pub name: String,
    pub contours: Vec<Contour<T>>,
}

impl<T: Scalar> Glyph<T> {
    pub fn new(name: impl Into<String>, contours: Vec<Contour<T>>) -> Self {
        Glyph {
            name: name.into(),
            contours,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Font<T: Scalar> {
    pub glyphs: Vec<Glyph<T>>,
}

impl<T: Scalar> Font<T> {
    pub fn new(glyphs: Vec<Glyph<T>>) -> Self {
        Font { glyphs }
    }

    pub fn glyph(&self, name: &str) -> Option<&Glyph<T>> {
        self.glyphs.iter().find(|g| g.name == name)
    }
}

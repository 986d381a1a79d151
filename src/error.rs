use core::fmt;

use thiserror::Error;

use super::outline::SegmentType;

/// Structural level of a font at which parallel sources are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Font,
    Glyph,
    Contour,
    Segment,
    Point,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Font => "font",
            Level::Glyph => "glyph",
            Level::Contour => "contour",
            Level::Segment => "segment",
            Level::Point => "point",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while converting curves to quadratic.
///
/// Parallel tangents at one segment and an unmet tolerance are not errors:
/// the search recovers from the former and reports the latter through
/// [`Approximation::within_tolerance`](crate::Approximation).
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("incompatible sources at {location}: {level} counts differ {lengths:?}")]
    StructuralMismatch {
        level: Level,
        location: String,
        lengths: Vec<usize>,
    },

    #[error("incompatible sources at {location}: segment types differ {types:?}")]
    SegmentTypeMismatch {
        location: String,
        types: Vec<SegmentType>,
    },

    #[error("segment {segment} of contour {contour} is {found:?}, expected a cubic curve")]
    UnexpectedSegmentType {
        contour: usize,
        segment: usize,
        found: SegmentType,
    },

    #[error("segment {segment} of contour {contour} has {points} points, a cubic curve needs 3")]
    MalformedSegment {
        contour: usize,
        segment: usize,
        points: usize,
    },

    #[error("curve segment {segment} of contour {contour} has no preceding on-curve point")]
    MissingStartPoint { contour: usize, segment: usize },

    #[error("a curve group needs at least one curve")]
    EmptyGroup,

    #[error("no quadratic approximation found with up to {max_segments} segments")]
    NoApproximation { max_segments: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = core::result::Result<T, ConvertError>;

//! Parallel traversal of structurally matching fonts.
//!
//! Corresponding glyphs, contours, segments and points of several font
//! masters are zipped together level by level. Every level is checked before
//! it is descended into, so the first divergence is reported with its
//! location and nothing is converted.
use super::error::{ConvertError, Level, Result};
use super::outline::Font;
use super::Scalar;

/// Transpose `sources` (N sequences of equal length L) into L rows of N items.
///
/// Fails with `StructuralMismatch` if the sources differ in length. No
/// sources at all yield no rows.
pub fn zip_exact<S, I>(sources: S, level: Level, location: &str) -> Result<Vec<Vec<I::Item>>>
where
    S: IntoIterator<Item = I>,
    I: ExactSizeIterator,
{
    let sources: Vec<I> = sources.into_iter().collect();
    let lengths: Vec<usize> = sources.iter().map(|s| s.len()).collect();
    if lengths.windows(2).any(|pair| pair[0] != pair[1]) {
        return Err(ConvertError::StructuralMismatch {
            level,
            location: location.to_string(),
            lengths,
        });
    }

    let len = lengths.first().copied().unwrap_or(0);
    let mut rows: Vec<Vec<I::Item>> = (0..len)
        .map(|_| Vec::with_capacity(sources.len()))
        .collect();
    for source in sources {
        for (row, item) in rows.iter_mut().zip(source) {
            row.push(item);
        }
    }
    Ok(rows)
}

/// Check that all fonts share one structure: the same number of glyphs, of
/// contours per glyph, of segments per contour, segment types and point
/// counts per segment.
pub fn check_compatible<T: Scalar>(fonts: &[Font<T>]) -> Result<()> {
    let glyphs = zip_exact(fonts.iter().map(|f| f.glyphs.iter()), Level::Glyph, "font")?;
    for (glyph_index, glyphs) in glyphs.iter().enumerate() {
        let glyph_location = format!("glyph {} '{}'", glyph_index, glyphs[0].name);
        let contours = zip_exact(
            glyphs.iter().map(|g| g.contours.iter()),
            Level::Contour,
            &glyph_location,
        )?;
        for (contour_index, contours) in contours.iter().enumerate() {
            let contour_location = format!("{} contour {}", glyph_location, contour_index);
            let segments = zip_exact(
                contours.iter().map(|c| c.segments.iter()),
                Level::Segment,
                &contour_location,
            )?;
            for (segment_index, segments) in segments.iter().enumerate() {
                let location = format!("{} segment {}", contour_location, segment_index);
                let kind = segments[0].kind;
                if segments.iter().any(|s| s.kind != kind) {
                    return Err(ConvertError::SegmentTypeMismatch {
                        location,
                        types: segments.iter().map(|s| s.kind).collect(),
                    });
                }
                zip_exact(
                    segments.iter().map(|s| s.points.iter()),
                    Level::Point,
                    &location,
                )?;
            }
        }
    }
    Ok(())
}

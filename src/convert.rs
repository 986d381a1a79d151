//! Replacement of the cubic segments of glyph contours by quadratic splines.
use super::config::ConversionConfig;
use super::cubic_bezier::CubicBezier;
use super::error::{ConvertError, Level, Result};
use super::group::CurveGroup;
use super::outline::{Contour, Font, Glyph, Segment, SegmentType};
use super::report::Report;
use super::search::{approximate, curve_to_quadratic};
use super::zip::{check_compatible, zip_exact};
use super::Scalar;

/// The cubic described by the segment at `segment_index`, starting at the
/// last point of the segment before it.
fn cubic_at<T: Scalar>(
    contour: &Contour<T>,
    contour_index: usize,
    segment_index: usize,
) -> Result<CubicBezier<T>> {
    let segment = contour
        .segments
        .get(segment_index)
        .ok_or(ConvertError::MissingStartPoint {
            contour: contour_index,
            segment: segment_index,
        })?;
    if segment.kind != SegmentType::Curve {
        return Err(ConvertError::UnexpectedSegmentType {
            contour: contour_index,
            segment: segment_index,
            found: segment.kind,
        });
    }
    let [ctrl1, ctrl2, end] = match segment.points[..] {
        [a, b, c] => [a, b, c],
        _ => {
            return Err(ConvertError::MalformedSegment {
                contour: contour_index,
                segment: segment_index,
                points: segment.points.len(),
            })
        }
    };
    let start = contour
        .start_point(segment_index)
        .ok_or(ConvertError::MissingStartPoint {
            contour: contour_index,
            segment: segment_index,
        })?;
    Ok(CubicBezier::new(start, ctrl1, ctrl2, end))
}

/// Return a quadratic spline segment approximating the cubic segment at
/// `segment_index` of `contour`.
///
/// The segment has to be a cubic curve. Its start point is taken from the
/// preceding segment and is not part of the returned segment.
pub fn cubic_segment_to_quadratic<T: Scalar>(
    contour: &Contour<T>,
    contour_index: usize,
    segment_index: usize,
    config: &ConversionConfig<T>,
    report: &mut Report,
) -> Result<Segment<T>> {
    let curve = cubic_at(contour, contour_index, segment_index)?;
    let approx = curve_to_quadratic(&curve, config.max_segments, config.max_error)?;
    if !approx.within_tolerance {
        log::warn!(
            "contour {} segment {}: error {:?} with {} segments exceeds {:?}",
            contour_index,
            segment_index,
            approx.error,
            approx.segments,
            config.max_error
        );
    }
    report.record(approx.segments);
    let smooth = contour.segments[segment_index].smooth;
    Ok(Segment::quadratic(approx.spline.after_start().to_vec(), smooth))
}

/// Convert the cubic segments of one contour, replacing its segment list if
/// anything changed.
fn contour_curves_to_quadratic<T: Scalar>(
    contour: &mut Contour<T>,
    contour_index: usize,
    config: &ConversionConfig<T>,
    report: &mut Report,
) -> Result<()> {
    if !contour.segments.iter().any(Segment::is_cubic) {
        return Ok(());
    }
    let mut segments = Vec::with_capacity(contour.len());
    for (index, segment) in contour.segments.iter().enumerate() {
        if segment.is_cubic() {
            segments.push(cubic_segment_to_quadratic(
                contour,
                contour_index,
                index,
                config,
                report,
            )?);
        } else {
            segments.push(segment.clone());
        }
    }
    contour.replace_segments(segments);
    Ok(())
}

/// Convert the corresponding contours of several fonts together. Every cubic
/// is replaced in all contours with splines of one shared segment count,
/// recorded once in the report.
fn contour_group_curves_to_quadratic<T: Scalar>(
    contours: &mut [&mut Contour<T>],
    contour_index: usize,
    location: &str,
    config: &ConversionConfig<T>,
    report: &mut Report,
) -> Result<()> {
    let Some(first) = contours.first() else {
        return Ok(());
    };
    if !first.segments.iter().any(Segment::is_cubic) {
        return Ok(());
    }

    let rows = zip_exact(
        contours.iter().map(|c| c.segments.iter()),
        Level::Segment,
        location,
    )?;
    let mut replaced: Vec<Vec<Segment<T>>> = contours
        .iter()
        .map(|c| Vec::with_capacity(c.len()))
        .collect();
    for (index, segments) in rows.iter().enumerate() {
        if !segments[0].is_cubic() {
            for (target, segment) in replaced.iter_mut().zip(segments) {
                target.push((*segment).clone());
            }
            continue;
        }

        let curves = contours
            .iter()
            .map(|c| cubic_at(c, contour_index, index))
            .collect::<Result<Vec<_>>>()?;
        let group = CurveGroup::new(curves)?;
        let approx = approximate(&group, config.max_segments, config.max_error)?;
        if !approx.within_tolerance {
            log::warn!(
                "{} segment {}: error {:?} with {} segments exceeds {:?}",
                location,
                index,
                approx.error,
                approx.segments,
                config.max_error
            );
        }
        report.record(approx.segments);

        for ((target, segment), spline) in replaced
            .iter_mut()
            .zip(segments)
            .zip(approx.spline.splines())
        {
            target.push(Segment::quadratic(
                spline.after_start().to_vec(),
                segment.smooth,
            ));
        }
    }

    for (contour, segments) in contours.iter_mut().zip(replaced) {
        contour.replace_segments(segments);
    }
    Ok(())
}

/// Convert all cubic segments of a glyph to quadratic splines, in place.
pub fn glyph_curves_to_quadratic<T: Scalar>(
    glyph: &mut Glyph<T>,
    config: &ConversionConfig<T>,
    report: &mut Report,
) -> Result<()> {
    log::debug!("converting glyph '{}'", glyph.name);
    for (index, contour) in glyph.contours.iter_mut().enumerate() {
        contour_curves_to_quadratic(contour, index, config, report)?;
    }
    Ok(())
}

/// Convert the curves of a collection of fonts to quadratic, in place.
///
/// With `config.compatible` set the fonts are first checked to share one
/// structure, then corresponding curves of all fonts are converted together
/// so that the results stay interpolation-compatible. Otherwise every font is
/// converted on its own.
///
/// The returned report tallies the segment counts of all new splines. An
/// error aborts the run and may leave the fonts partially converted.
pub fn fonts_to_quadratic<T: Scalar>(
    fonts: &mut [Font<T>],
    config: &ConversionConfig<T>,
) -> Result<Report> {
    config.validate()?;
    let mut report = Report::new();

    if config.compatible {
        check_compatible(fonts)?;
        let glyph_rows = zip_exact(
            fonts.iter_mut().map(|f| f.glyphs.iter_mut()),
            Level::Glyph,
            "font",
        )?;
        for (glyph_index, glyphs) in glyph_rows.into_iter().enumerate() {
            let glyph_location = format!("glyph {} '{}'", glyph_index, glyphs[0].name);
            log::debug!("converting {} in {} fonts", glyph_location, glyphs.len());
            let contour_rows = zip_exact(
                glyphs.into_iter().map(|g| g.contours.iter_mut()),
                Level::Contour,
                &glyph_location,
            )?;
            for (contour_index, mut contours) in contour_rows.into_iter().enumerate() {
                let location = format!("{} contour {}", glyph_location, contour_index);
                contour_group_curves_to_quadratic(
                    &mut contours,
                    contour_index,
                    &location,
                    config,
                    &mut report,
                )?;
            }
        }
    } else {
        for font in fonts.iter_mut() {
            for glyph in font.glyphs.iter_mut() {
                glyph_curves_to_quadratic(glyph, config, &mut report)?;
            }
        }
    }

    log::info!(
        "converted {} curves in {} fonts",
        report.total(),
        fonts.len()
    );
    Ok(report)
}

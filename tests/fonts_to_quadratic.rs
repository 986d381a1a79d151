use quadspline::{
    fonts_to_quadratic, Contour, ConversionConfig, ConvertError, Font, Glyph, Level, Point2,
    Segment, SegmentType,
};

fn p(x: f64, y: f64) -> Point2<f64> {
    Point2::new(x, y)
}

/// Open contour holding a quarter-circle-like cubic, scaled by `scale`
fn quarter(scale: f64) -> Contour<f64> {
    Contour::new(vec![
        Segment::new(SegmentType::Move, vec![p(0.0, 0.0)], false),
        Segment::new(
            SegmentType::Curve,
            vec![
                p(0.0, 55.0 * scale),
                p(45.0 * scale, 100.0 * scale),
                p(100.0 * scale, 100.0 * scale),
            ],
            false,
        ),
    ])
}

/// Closed square whose first segment is a cubic starting at the last corner
fn rounded(scale: f64) -> Contour<f64> {
    Contour::new(vec![
        Segment::new(
            SegmentType::Curve,
            vec![p(0.0, 60.0 * scale), p(40.0 * scale, 100.0 * scale), p(100.0 * scale, 100.0 * scale)],
            true,
        ),
        Segment::new(SegmentType::Line, vec![p(100.0 * scale, 0.0)], false),
        Segment::new(SegmentType::Line, vec![p(0.0, 0.0)], false),
    ])
}

fn font(scale: f64) -> Font<f64> {
    Font::new(vec![
        Glyph::new("a", vec![quarter(scale)]),
        Glyph::new("b", vec![quarter(scale)]),
        Glyph::new("c", vec![rounded(scale), quarter(scale)]),
    ])
}

#[test]
fn loose_bound_gives_single_segments() {
    let mut fonts = vec![Font::new(vec![
        Glyph::new("a", vec![quarter(1.0)]),
        Glyph::new("b", vec![quarter(1.0)]),
        Glyph::new("c", vec![quarter(1.0)]),
    ])];
    let config = ConversionConfig::default().with_max_error(10.0);
    let report = fonts_to_quadratic(&mut fonts, &config).unwrap();

    assert_eq!(report.get(1), 3);
    assert_eq!(report.total(), 3);
    assert_eq!(report.to_string(), "New spline lengths:\n1: 3");
    for glyph in &fonts[0].glyphs {
        let segment = &glyph.contours[0].segments()[1];
        assert_eq!(segment.kind, SegmentType::QCurve);
        assert_eq!(segment.points.len(), 2);
        // tangent intersection of the quarter curve
        assert!((segment.points[0] - p(0.0, 100.0)).squared_length() < 1e-9);
        assert_eq!(segment.points[1], p(100.0, 100.0));
    }
}

#[test]
fn closed_contour_starts_at_last_point() {
    let mut fonts = vec![Font::new(vec![Glyph::new("o", vec![rounded(1.0)])])];
    let config = ConversionConfig::default().with_max_error(0.5);
    fonts_to_quadratic(&mut fonts, &config).unwrap();
    let segments = fonts[0].glyphs[0].contours[0].segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].kind, SegmentType::QCurve);
    assert!(segments[0].smooth);
    assert_eq!(segments[0].last_point(), Some(p(100.0, 100.0)));
    assert_eq!(segments[1].kind, SegmentType::Line);
    assert_eq!(segments[2].kind, SegmentType::Line);
}

#[test]
fn compatible_masters_share_segment_counts() {
    let mut independent = vec![font(1.0), font(4.0)];
    let config = ConversionConfig::default().with_max_error(1.0);
    fonts_to_quadratic(&mut independent, &config).unwrap();
    let small = &independent[0].glyphs[0].contours[0].segments()[1];
    let large = &independent[1].glyphs[0].contours[0].segments()[1];
    assert_eq!(small.points.len(), 3);
    assert_eq!(large.points.len(), 5);

    let mut masters = vec![font(1.0), font(4.0)];
    let report = fonts_to_quadratic(&mut masters, &config.with_compatible(true)).unwrap();
    // four curves per font, one record per group
    assert_eq!(report.total(), 4);
    for (a, b) in masters[0].glyphs.iter().zip(&masters[1].glyphs) {
        for (ca, cb) in a.contours.iter().zip(&b.contours) {
            for (sa, sb) in ca.segments().iter().zip(cb.segments()) {
                assert_eq!(sa.kind, sb.kind);
                assert_eq!(sa.points.len(), sb.points.len());
            }
        }
    }
    let small = &masters[0].glyphs[0].contours[0].segments()[1];
    assert_eq!(small.points.len(), 5);
}

#[test]
fn conversion_is_idempotent() {
    let config = ConversionConfig::default().with_max_error(1.0).with_compatible(true);
    let mut masters = vec![font(1.0), font(2.0)];
    fonts_to_quadratic(&mut masters, &config).unwrap();
    let converted = masters.clone();
    let report = fonts_to_quadratic(&mut masters, &config).unwrap();
    assert!(report.is_empty());
    assert_eq!(masters, converted);
}

#[test]
fn incompatible_masters_are_left_untouched() {
    let mut other = font(2.0);
    other.glyphs[2].contours[1].replace_segments(vec![
        Segment::new(SegmentType::Move, vec![p(0.0, 0.0)], false),
        Segment::new(SegmentType::Line, vec![p(200.0, 200.0)], false),
    ]);
    let mut masters = vec![font(1.0), other];
    let original = masters.clone();
    let config = ConversionConfig::default().with_compatible(true);
    match fonts_to_quadratic(&mut masters, &config) {
        Err(ConvertError::SegmentTypeMismatch { location, types }) => {
            assert_eq!(location, "glyph 2 'c' contour 1 segment 1");
            assert_eq!(types, vec![SegmentType::Curve, SegmentType::Line]);
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(masters, original);
}

#[test]
fn point_count_mismatch_is_reported() {
    let mut other = font(2.0);
    other.glyphs[0].contours[0].replace_segments(vec![
        Segment::new(SegmentType::Move, vec![p(0.0, 0.0)], false),
        Segment::new(SegmentType::Curve, vec![p(0.0, 50.0), p(100.0, 100.0)], false),
    ]);
    let mut masters = vec![font(1.0), other];
    let config = ConversionConfig::default().with_compatible(true);
    match fonts_to_quadratic(&mut masters, &config) {
        Err(ConvertError::StructuralMismatch { level, lengths, .. }) => {
            assert_eq!(level, Level::Point);
            assert_eq!(lengths, vec![3, 2]);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

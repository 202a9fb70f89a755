use pretty_assertions::assert_eq;
use vecfont::{
    test_support::SAMPLE_TTX, ttx, BoundingBox, FontError, GenerateOptions, PathCommand,
};

#[test]
fn reads_first_cmap_subtable_only() {
    let doc = ttx::parse_str("Sample", SAMPLE_TTX).unwrap();
    let codes: Vec<(u32, &str)> = doc.glyph_names_in(0..=0xFFFF).collect();
    assert_eq!(
        codes,
        vec![
            (0x20, "space"),
            (0x4F, "O"),
            (0x5A, "Z"),
            (0xB0, "degree"),
            (0xC5, "Aring"),
        ]
    );
}

#[test]
fn reads_widths_and_outlines() {
    let doc = ttx::parse_str("Sample", SAMPLE_TTX).unwrap();
    assert_eq!(doc.advance_widths.get("space"), Some(&250));
    assert_eq!(doc.advance_widths.get("Z"), Some(&580));
    assert_eq!(doc.outlines.len(), 6);

    let space = &doc.outlines["space"];
    assert!(space.contours.is_empty());
    assert_eq!(space.bounds, None);

    let o = &doc.outlines["O"];
    assert_eq!(o.contours.len(), 1);
    assert_eq!(o.contours[0].len(), 6);
    assert!(!o.contours[0][1].on_curve);
    assert_eq!(o.bounds, Some(BoundingBox::new(20.0, -10.0, 620.0, 710.0)));

    // components are not flattened
    assert!(doc.outlines["Aring"].contours.is_empty());
}

#[test]
fn generates_from_ttx() {
    let doc = ttx::parse_str("Sample", SAMPLE_TTX).unwrap();
    let (table, metrics) = doc.generate(&GenerateOptions::default()).unwrap();
    assert_eq!(metrics.height, 700.0);
    assert_eq!(table.glyph_count(), 4);
    assert!(table.get(0xC5).is_none());

    let o = table.get(b'O').unwrap();
    assert_eq!(
        o.commands(),
        &[
            PathCommand::Start,
            PathCommand::Move { x: 320.0, y: -10.0 },
            PathCommand::quad_to((620.0, -10.0), (620.0, 350.0)),
            PathCommand::quad_to((620.0, 710.0), (470.0, 710.0)),
            PathCommand::Line { x: 320.0, y: 710.0 },
            PathCommand::quad_to((20.0, 710.0), (20.0, 350.0)),
            PathCommand::quad_to((20.0, -10.0), (170.0, -10.0)),
            PathCommand::Close,
            PathCommand::Exit,
        ]
    );
    assert_eq!(
        table.get(b' ').unwrap().commands(),
        &[PathCommand::Start, PathCommand::Exit]
    );
}

#[test]
fn point_without_flag_is_malformed() {
    let text = SAMPLE_TTX.replace(
        r#"<pt x="540" y="80" on="1"/>"#,
        r#"<pt x="540" y="80"/>"#,
    );
    let err = ttx::parse_str("Sample", &text).unwrap_err();
    match err {
        FontError::MalformedContour {
            glyph,
            contour,
            point,
            reason,
        } => {
            assert_eq!(glyph, "Z");
            assert_eq!(contour, 0);
            assert_eq!(point, 2);
            assert!(reason.contains("on"), "{reason}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn bad_coordinate_is_malformed() {
    let text = SAMPLE_TTX.replace(r#"<pt x="100" y="500" on="0"/>"#, r#"<pt x="1O0" y="500" on="0"/>"#);
    let err = ttx::parse_str("Sample", &text).unwrap_err();
    assert!(matches!(err, FontError::MalformedContour { ref glyph, .. } if glyph == "degree"));
    assert_eq!(err.glyph(), Some("degree"));
}

#[test]
fn conflicting_map_entries_are_reported() {
    let text = SAMPLE_TTX.replacen(
        r#"<map code="0x4f" name="O"/>"#,
        r#"<map code="0x4f" name="O"/><map code="0x4f" name="Z"/>"#,
        1,
    );
    let err = ttx::parse_str("Sample", &text).unwrap_err();
    assert!(matches!(
        err,
        FontError::DuplicateCodePoint { code: 0x4F, .. }
    ));
}

#[test]
fn missing_cmap_is_a_parse_error() {
    let text = "<ttFont><hmtx/><glyf/></ttFont>";
    let err = ttx::parse_str("Empty", text).unwrap_err();
    assert!(matches!(err, FontError::Parse(_)));
}

#[test]
fn unbalanced_xml_is_an_error() {
    let err = ttx::parse_str("Broken", "<ttFont><cmap></ttFont>").unwrap_err();
    assert!(matches!(err, FontError::Xml(_)));
}

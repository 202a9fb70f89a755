//! Test support utilities for vecfont.
//!
//! Small hand-built fonts and contour shapes shared by unit tests,
//! integration tests and benches. Not part of the stable API.

use crate::{
    document::{FontDocument, Outline},
    glyph::BoundingBox,
    point::RawPoint,
};

/// Axis-aligned square of on-curve points, counter-clockwise from `(x, y)`.
pub fn square(x: f64, y: f64, size: f64) -> Vec<RawPoint> {
    vec![
        RawPoint::on(x, y),
        RawPoint::on(x + size, y),
        RawPoint::on(x + size, y + size),
        RawPoint::on(x, y + size),
    ]
}

/// Circle-like contour made only of control points.
pub fn ring(cx: f64, cy: f64, r: f64) -> Vec<RawPoint> {
    vec![
        RawPoint::off(cx - r, cy - r),
        RawPoint::off(cx + r, cy - r),
        RawPoint::off(cx + r, cy + r),
        RawPoint::off(cx - r, cy + r),
    ]
}

fn add(doc: &mut FontDocument, code: Option<u32>, name: &str, width: u16, outline: Outline) {
    if let Some(code) = code {
        doc.code_map.insert(code, name.to_string());
    }
    doc.advance_widths.insert(name.to_string(), width);
    doc.outlines.insert(name.to_string(), outline);
}

/// A tiny font: space, A, O, Z, degree, one control glyph below the range and
/// one unmapped glyph.
pub fn sample_document() -> FontDocument {
    let mut doc = FontDocument::new("Sample");
    add(&mut doc, Some(0x20), "space", 250, Outline::default());
    add(
        &mut doc,
        Some(0x41),
        "A",
        600,
        Outline {
            contours: vec![vec![
                RawPoint::on(0.0, 0.0),
                RawPoint::on(300.0, 700.0),
                RawPoint::on(600.0, 0.0),
            ]],
            bounds: Some(BoundingBox::new(0.0, 0.0, 600.0, 700.0)),
        },
    );
    add(
        &mut doc,
        Some(0x4F),
        "O",
        640,
        Outline {
            contours: vec![ring(320.0, 350.0, 300.0), ring(320.0, 350.0, 200.0)],
            bounds: Some(BoundingBox::new(20.0, 50.0, 620.0, 650.0)),
        },
    );
    add(
        &mut doc,
        Some(0x5A),
        "Z",
        580,
        Outline {
            contours: vec![vec![
                RawPoint::on(40.0, 0.0),
                RawPoint::on(540.0, 0.0),
                RawPoint::on(540.0, 80.0),
                RawPoint::on(160.0, 620.0),
                RawPoint::on(530.0, 620.0),
                RawPoint::on(530.0, 700.0),
                RawPoint::on(50.0, 700.0),
                RawPoint::on(50.0, 620.0),
                RawPoint::on(420.0, 80.0),
                RawPoint::on(40.0, 80.0),
            ]],
            bounds: Some(BoundingBox::new(40.0, 0.0, 540.0, 700.0)),
        },
    );
    add(
        &mut doc,
        Some(0xB0),
        "degree",
        400,
        Outline {
            contours: vec![ring(200.0, 600.0, 100.0)],
            bounds: Some(BoundingBox::new(100.0, 500.0, 300.0, 700.0)),
        },
    );
    add(&mut doc, Some(0x07), "uni0007", 0, Outline::default());
    add(
        &mut doc,
        None,
        "A.sc",
        520,
        Outline {
            contours: vec![square(0.0, 0.0, 500.0)],
            bounds: Some(BoundingBox::new(0.0, 0.0, 500.0, 500.0)),
        },
    );
    doc
}

/// TTX dump of a small font in the layout fontTools produces.
pub const SAMPLE_TTX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ttFont sfntVersion="\x00\x01\x00\x00" ttLibVersion="4.38">

  <GlyphOrder>
    <GlyphID id="0" name=".notdef"/>
    <GlyphID id="1" name="space"/>
    <GlyphID id="2" name="O"/>
    <GlyphID id="3" name="Z"/>
    <GlyphID id="4" name="degree"/>
    <GlyphID id="5" name="Aring"/>
  </GlyphOrder>

  <hmtx>
    <mtx name=".notdef" width="500" lsb="50"/>
    <mtx name="Aring" width="600" lsb="0"/>
    <mtx name="O" width="640" lsb="20"/>
    <mtx name="Z" width="580" lsb="40"/>
    <mtx name="degree" width="400" lsb="100"/>
    <mtx name="space" width="250" lsb="0"/>
  </hmtx>

  <cmap>
    <tableVersion version="0"/>
    <cmap_format_4 platformID="0" platEncID="3" language="0">
      <map code="0x20" name="space"/><!-- SPACE -->
      <map code="0x4f" name="O"/><!-- LATIN CAPITAL LETTER O -->
      <map code="0x5a" name="Z"/><!-- LATIN CAPITAL LETTER Z -->
      <map code="0xb0" name="degree"/><!-- DEGREE SIGN -->
      <map code="0xc5" name="Aring"/><!-- LATIN CAPITAL LETTER A WITH RING ABOVE -->
    </cmap_format_4>
    <cmap_format_4 platformID="3" platEncID="1" language="0">
      <map code="0x20" name="space"/>
      <map code="0x4f" name="O"/>
      <map code="0x5a" name="Z"/>
      <map code="0x61" name="Z"/>
      <map code="0xb0" name="degree"/>
    </cmap_format_4>
  </cmap>

  <glyf>
    <TTGlyph name=".notdef" xMin="50" yMin="0" xMax="450" yMax="700">
      <contour>
        <pt x="50" y="0" on="1"/>
        <pt x="450" y="0" on="1"/>
        <pt x="450" y="700" on="1"/>
        <pt x="50" y="700" on="1"/>
      </contour>
      <instructions/>
    </TTGlyph>

    <TTGlyph name="Aring" xMin="0" yMin="0" xMax="600" yMax="900">
      <component glyphName="A" x="0" y="0" flags="0x204"/>
      <component glyphName="ring" x="150" y="720" flags="0x4"/>
    </TTGlyph>

    <TTGlyph name="O" xMin="20" yMin="-10" xMax="620" yMax="710">
      <contour>
        <pt x="320" y="-10" on="1"/>
        <pt x="620" y="-10" on="0"/>
        <pt x="620" y="710" on="0"/>
        <pt x="320" y="710" on="1"/>
        <pt x="20" y="710" on="0"/>
        <pt x="20" y="-10" on="0"/>
      </contour>
      <instructions/>
    </TTGlyph>

    <TTGlyph name="Z" xMin="40" yMin="0" xMax="540" yMax="700">
      <contour>
        <pt x="40" y="0" on="1"/>
        <pt x="540" y="0" on="1"/>
        <pt x="540" y="80" on="1"/>
        <pt x="160" y="620" on="1"/>
        <pt x="530" y="620" on="1"/>
        <pt x="530" y="700" on="1"/>
        <pt x="50" y="700" on="1"/>
        <pt x="50" y="620" on="1"/>
        <pt x="420" y="80" on="1"/>
        <pt x="40" y="80" on="1"/>
      </contour>
      <instructions/>
    </TTGlyph>

    <TTGlyph name="degree" xMin="100" yMin="500" xMax="300" yMax="700">
      <contour>
        <pt x="100" y="500" on="0"/>
        <pt x="300" y="500" on="0"/>
        <pt x="300" y="700" on="0"/>
        <pt x="100" y="700" on="0"/>
      </contour>
      <instructions/>
    </TTGlyph>

    <TTGlyph name="space"/><!-- contains no outline data -->

  </glyf>

</ttFont>
"#;

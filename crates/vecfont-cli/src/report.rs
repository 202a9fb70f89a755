use std::fmt::{self, Write as _};

use vecfont::{FontDocument, FontMetrics, FontTable};

/// Plain-text summary for `inspect`.
pub fn summary(
    doc: &FontDocument,
    table: &FontTable,
    metrics: &FontMetrics,
) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Font: {}", doc.name)?;
    writeln!(out, "  Mapped codes: {}", doc.code_map.len())?;
    writeln!(out, "  Outlines: {}", doc.outlines.len())?;
    writeln!(out, "  Table glyphs: {}", table.glyph_count())?;
    writeln!(out, "  Height: {:.2}", metrics.height)?;
    let blank: Vec<&str> = table
        .glyphs()
        .filter(|(_, g)| g.is_blank())
        .map(|(_, g)| g.identifier.as_str())
        .collect();
    if !blank.is_empty() {
        writeln!(out, "  Blank glyphs: {}", blank.join(", "))?;
    }
    Ok(out)
}

/// Printable rendering of a code point for listings.
pub fn code_label(code: u8) -> String {
    if code.is_ascii_graphic() {
        format!("{code:#04x} '{}'", code as char)
    } else {
        format!("{code:#04x}")
    }
}

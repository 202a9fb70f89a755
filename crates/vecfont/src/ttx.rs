//! Reader for fontTools TTX dumps.
//!
//! Only the tables the generator needs are read: the first `cmap_format_4`
//! subtable, `hmtx` and `glyf`. Everything else is skipped.
use std::{fs, path::Path};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{
    document::{FontDocument, Outline},
    error::{FontError, Result},
    glyph::BoundingBox,
    point::RawPoint,
};

/// Load a `.ttx` file. The font name is the file stem without dashes.
pub fn load(path: &Path) -> Result<FontDocument> {
    let text = fs::read_to_string(path)?;
    parse_str(font_name_from_path(path), &text)
}

pub fn font_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().replace('-', ""))
        .unwrap_or_default()
}

pub fn parse_str(name: impl Into<String>, text: &str) -> Result<FontDocument> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);
    let mut parser = TtxParser::new(FontDocument::new(name));
    loop {
        match reader.read_event()? {
            Event::Start(e) => parser.open(&e)?,
            Event::Empty(e) => {
                parser.open(&e)?;
                parser.close(e.name().as_ref())?;
            }
            Event::End(e) => parser.close(e.name().as_ref())?,
            Event::Eof => break,
            _ => {}
        }
    }
    parser.finish()
}

struct PendingGlyph {
    name: String,
    outline: Outline,
    contour: Option<Vec<RawPoint>>,
}

#[derive(Copy, Clone, Default, PartialEq)]
enum Section {
    #[default]
    Other,
    Cmap4,
    Hmtx,
    Glyf,
}

struct TtxParser {
    doc: FontDocument,
    section: Section,
    cmap4_read: bool,
    glyph: Option<PendingGlyph>,
}

impl TtxParser {
    fn new(doc: FontDocument) -> Self {
        Self {
            doc,
            section: Section::Other,
            cmap4_read: false,
            glyph: None,
        }
    }

    fn open(&mut self, e: &BytesStart) -> Result<()> {
        match (e.name().as_ref(), self.section) {
            (b"cmap_format_4", Section::Other) if !self.cmap4_read => {
                self.section = Section::Cmap4;
            }
            (b"hmtx", Section::Other) => self.section = Section::Hmtx,
            (b"glyf", Section::Other) => self.section = Section::Glyf,
            (b"map", Section::Cmap4) => {
                let code = parse_code(&required(e, "code")?)?;
                let name = required(e, "name")?;
                if let Some(first) = self.doc.code_map.get(&code) {
                    if *first != name {
                        return Err(FontError::DuplicateCodePoint {
                            code,
                            first: first.clone(),
                            second: name,
                        });
                    }
                }
                self.doc.code_map.insert(code, name);
            }
            (b"mtx", Section::Hmtx) => {
                let name = required(e, "name")?;
                let width = required(e, "width")?;
                let width = width
                    .parse::<u16>()
                    .map_err(|_| FontError::Parse(format!("mtx '{name}': bad width '{width}'")))?;
                self.doc.advance_widths.insert(name, width);
            }
            (b"TTGlyph", Section::Glyf) => {
                let name = required(e, "name")?;
                let bounds = bounds(e)?;
                self.glyph = Some(PendingGlyph {
                    name,
                    outline: Outline {
                        contours: Vec::new(),
                        bounds,
                    },
                    contour: None,
                });
            }
            (b"contour", Section::Glyf) => {
                if let Some(glyph) = self.glyph.as_mut() {
                    glyph.contour = Some(Vec::new());
                }
            }
            (b"pt", Section::Glyf) => {
                if let Some(glyph) = self.glyph.as_mut() {
                    let contour_index = glyph.outline.contours.len();
                    if let Some(contour) = glyph.contour.as_mut() {
                        let point = parse_point(e).map_err(|reason| FontError::MalformedContour {
                            glyph: glyph.name.clone(),
                            contour: contour_index,
                            point: contour.len(),
                            reason,
                        })?;
                        contour.push(point);
                    }
                }
            }
            (b"component", Section::Glyf) => {
                if let Some(glyph) = self.glyph.as_ref() {
                    log::warn!(
                        "'{}': composite component '{}' is not flattened",
                        glyph.name,
                        attr(e, "glyphName")?.unwrap_or_default()
                    );
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) -> Result<()> {
        match (name, self.section) {
            (b"cmap_format_4", Section::Cmap4) => {
                self.section = Section::Other;
                self.cmap4_read = true;
            }
            (b"hmtx", Section::Hmtx) | (b"glyf", Section::Glyf) => self.section = Section::Other,
            (b"contour", Section::Glyf) => {
                if let Some(glyph) = self.glyph.as_mut() {
                    if let Some(contour) = glyph.contour.take() {
                        glyph.outline.contours.push(contour);
                    }
                }
            }
            (b"TTGlyph", Section::Glyf) => {
                if let Some(glyph) = self.glyph.take() {
                    if self.doc.outlines.contains_key(&glyph.name) {
                        return Err(FontError::DuplicateGlyph(glyph.name));
                    }
                    self.doc.outlines.insert(glyph.name, glyph.outline);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> Result<FontDocument> {
        if !self.cmap4_read {
            return Err(FontError::Parse("no cmap_format_4 subtable".into()));
        }
        log::debug!(
            "{}: {} mapped codes, {} widths, {} outlines",
            self.doc.name,
            self.doc.code_map.len(),
            self.doc.advance_widths.len(),
            self.doc.outlines.len()
        );
        Ok(self.doc)
    }
}

fn attr(e: &BytesStart, key: &str) -> Result<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == key.as_bytes() {
            return Ok(Some(String::from_utf8_lossy(&attr.value).into_owned()));
        }
    }
    Ok(None)
}

fn required(e: &BytesStart, key: &str) -> Result<String> {
    attr(e, key)?.ok_or_else(|| {
        FontError::Parse(format!(
            "<{}> missing '{key}' attribute",
            String::from_utf8_lossy(e.name().as_ref())
        ))
    })
}

fn parse_code(s: &str) -> Result<u32> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|_| FontError::Parse(format!("bad code point '{s}'")))
}

fn bounds(e: &BytesStart) -> Result<Option<BoundingBox>> {
    let mut values = [0.0f64; 4];
    for (value, key) in values.iter_mut().zip(["xMin", "yMin", "xMax", "yMax"]) {
        let Some(raw) = attr(e, key)? else {
            return Ok(None);
        };
        *value = raw
            .parse::<f64>()
            .map_err(|_| FontError::Parse(format!("bad {key} '{raw}'")))?;
    }
    let [x_min, y_min, x_max, y_max] = values;
    Ok(Some(BoundingBox::new(x_min, y_min, x_max, y_max)))
}

fn parse_point(e: &BytesStart) -> std::result::Result<RawPoint, String> {
    let field = |key: &str| -> std::result::Result<String, String> {
        attr(e, key)
            .map_err(|err| err.to_string())?
            .ok_or_else(|| format!("missing '{key}'"))
    };
    let number = |key: &str| -> std::result::Result<f64, String> {
        let raw = field(key)?;
        raw.parse::<f64>()
            .map_err(|_| format!("bad {key} '{raw}'"))
    };
    let x = number("x")?;
    let y = number("y")?;
    let on = field("on")?;
    // newer fontTools may set extra flag bits; bit 0 is on-curve
    let flags = on
        .parse::<u8>()
        .map_err(|_| format!("bad on '{on}'"))?;
    Ok(RawPoint::new(x, y, flags & 1 == 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_formats() {
        assert_eq!(parse_code("0x41").unwrap(), 0x41);
        assert_eq!(parse_code("0XB0").unwrap(), 0xB0);
        assert_eq!(parse_code("65").unwrap(), 65);
        assert!(parse_code("0xZZ").is_err());
    }

    #[test]
    fn name_strips_dashes() {
        assert_eq!(
            font_name_from_path(Path::new("fonts/HumanSans-Bold.ttx")),
            "HumanSansBold"
        );
    }
}

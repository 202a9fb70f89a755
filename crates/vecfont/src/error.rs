use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("reference glyph '{0}' not found")]
    MissingReferenceGlyph(String),
    #[error("reference glyph '{0}' has no bounding box")]
    MissingReferenceBounds(String),
    #[error("code point {code:#04x} mapped by both '{first}' and '{second}'")]
    DuplicateCodePoint {
        code: u32,
        first: String,
        second: String,
    },
    #[error("glyph '{0}' defined more than once")]
    DuplicateGlyph(String),
    #[error("malformed contour in glyph '{glyph}' (contour {contour}, point {point}): {reason}")]
    MalformedContour {
        glyph: String,
        contour: usize,
        point: usize,
        reason: String,
    },
    #[error("no advance width for glyph '{0}'")]
    MissingAdvanceWidth(String),
    #[error("no outline for glyph '{0}'")]
    MissingOutline(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("format error")]
    Format(#[from] std::fmt::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl FontError {
    /// Glyph name the error is about, if any.
    pub fn glyph(&self) -> Option<&str> {
        match self {
            FontError::MissingReferenceGlyph(name)
            | FontError::MissingReferenceBounds(name)
            | FontError::DuplicateGlyph(name)
            | FontError::MissingAdvanceWidth(name)
            | FontError::MissingOutline(name) => Some(name),
            FontError::DuplicateCodePoint { second, .. } => Some(second),
            FontError::MalformedContour { glyph, .. } => Some(glyph),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FontError>;

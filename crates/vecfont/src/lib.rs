//! vecfont: TrueType outlines to vector path command tables.
//! Features: contour translation, glyph table assembly, TTX reading, C++ emission.

pub mod command;
pub mod contour;
#[cfg(feature = "cpp")]
pub mod cpp;
pub mod document;
mod error;
mod glyph;
pub mod point;
pub mod table;
#[cfg(feature = "ttx")]
pub mod ttx;

pub use command::PathCommand;
pub use contour::translate;
pub use document::{FontDocument, GenerateOptions, Outline};
pub use error::{FontError, Result};
pub use glyph::{BoundingBox, Glyph};
pub use point::{resolve_effective, RawPoint};
pub use table::{assemble, FontMetrics, FontTable, SUPPORTED_CODES};

// Test utilities
pub mod test_support;

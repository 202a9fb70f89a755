//! Parsed font document and the generation pipeline.
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::{
    error::{FontError, Result},
    glyph::{BoundingBox, Glyph},
    point::RawPoint,
    table::{assemble_in, FontMetrics, FontTable, DEFAULT_REFERENCE_GLYPH, SUPPORTED_CODES},
};

/// Contours and recorded extrema of one glyph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    pub contours: Vec<Vec<RawPoint>>,
    pub bounds: Option<BoundingBox>,
}

/// The structured font data the generator consumes: character map, advance
/// widths and outlines, all keyed by glyph name.
#[derive(Clone, Debug, Default)]
pub struct FontDocument {
    pub name: String,
    pub code_map: BTreeMap<u32, String>,
    pub advance_widths: BTreeMap<String, u16>,
    pub outlines: BTreeMap<String, Outline>,
}

#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub reference_glyph: String,
    pub code_range: RangeInclusive<u32>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            reference_glyph: DEFAULT_REFERENCE_GLYPH.to_string(),
            code_range: SUPPORTED_CODES,
        }
    }
}

impl FontDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Code map entries whose code point lies in `range`.
    pub fn glyph_names_in(
        &self,
        range: RangeInclusive<u32>,
    ) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.code_map
            .range(range)
            .map(|(code, name)| (*code, name.as_str()))
    }

    /// Lowest code point mapped to `name`.
    pub fn code_point_of(&self, name: &str) -> Option<u32> {
        self.code_map
            .iter()
            .find(|(_, n)| n.as_str() == name)
            .map(|(code, _)| *code)
    }

    pub fn build_glyph(&self, name: &str, code_point: u32) -> Result<Glyph> {
        let width = *self
            .advance_widths
            .get(name)
            .ok_or_else(|| FontError::MissingAdvanceWidth(name.to_string()))?;
        let outline = self
            .outlines
            .get(name)
            .ok_or_else(|| FontError::MissingOutline(name.to_string()))?;
        let glyph = Glyph::build(name, code_point, width, &outline.contours)?;
        Ok(match outline.bounds {
            Some(bounds) => glyph.with_bounds(bounds),
            None => glyph,
        })
    }

    /// Build every mapped glyph in the option's code range and assemble them.
    ///
    /// The reference glyph is built even when it is not mapped in the range,
    /// so the height can always be derived.
    pub fn generate(&self, options: &GenerateOptions) -> Result<(FontTable, FontMetrics)> {
        let mut codes: BTreeMap<&str, u32> = BTreeMap::new();
        for (code, name) in self.glyph_names_in(options.code_range.clone()) {
            if let Some(kept) = codes.get(name) {
                log::warn!("'{name}' mapped at {kept:#x} and {code:#x}; keeping {kept:#x}");
                continue;
            }
            codes.insert(name, code);
        }

        let mut glyphs = Vec::with_capacity(codes.len() + 1);
        for (name, code) in &codes {
            glyphs.push(self.build_glyph(name, *code)?);
        }

        let reference = options.reference_glyph.as_str();
        if !codes.contains_key(reference) && self.outlines.contains_key(reference) {
            // unmapped reference: build it for its bounds only
            let code = self.code_point_of(reference).unwrap_or(u32::MAX);
            glyphs.push(self.build_glyph(reference, code)?);
        }

        log::debug!("{}: built {} glyphs", self.name, glyphs.len());
        assemble_in(&glyphs, reference, &options.code_range)
    }
}

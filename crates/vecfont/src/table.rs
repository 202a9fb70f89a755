//! Code-point indexed glyph table and font metrics.
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::{
    error::{FontError, Result},
    glyph::Glyph,
};

pub const TABLE_SIZE: usize = 256;

/// Printable ASCII up to and including the degree sign.
pub const SUPPORTED_CODES: RangeInclusive<u32> = 0x20..=0xB0;

/// Glyph used to derive the nominal font height.
pub const DEFAULT_REFERENCE_GLYPH: &str = "Z";

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FontMetrics {
    /// Cap height in design units, taken from the reference glyph's bounds
    pub height: f64,
}

/// 256 slots indexed by code point; unmapped slots are empty.
#[derive(Clone, Debug, PartialEq)]
pub struct FontTable {
    slots: Vec<Option<Glyph>>,
}

impl FontTable {
    fn empty() -> Self {
        Self {
            slots: vec![None; TABLE_SIZE],
        }
    }

    pub fn get(&self, code: u8) -> Option<&Glyph> {
        self.slots[code as usize].as_ref()
    }

    /// All 256 slots in code-point order.
    pub fn slots(&self) -> impl Iterator<Item = (u8, Option<&Glyph>)> + '_ {
        (0u8..=255).zip(self.slots.iter().map(Option::as_ref))
    }

    /// Occupied slots in code-point order.
    pub fn glyphs(&self) -> impl Iterator<Item = (u8, &Glyph)> + '_ {
        self.slots().filter_map(|(code, g)| g.map(|g| (code, g)))
    }

    pub fn glyph_count(&self) -> usize {
        self.slots.iter().filter(|g| g.is_some()).count()
    }

    pub fn find(&self, identifier: &str) -> Option<&Glyph> {
        self.glyphs()
            .map(|(_, g)| g)
            .find(|g| g.identifier == identifier)
    }
}

/// Project built glyphs into a [`FontTable`] and derive [`FontMetrics`].
///
/// Glyphs outside [`SUPPORTED_CODES`] are dropped. The height comes from the
/// bounding box of the glyph named `reference_name`, which may itself lie
/// outside the supported range.
pub fn assemble(glyphs: &[Glyph], reference_name: &str) -> Result<(FontTable, FontMetrics)> {
    assemble_in(glyphs, reference_name, &SUPPORTED_CODES)
}

/// [`assemble`] with a custom code range, clipped to the table size.
pub fn assemble_in(
    glyphs: &[Glyph],
    reference_name: &str,
    range: &RangeInclusive<u32>,
) -> Result<(FontTable, FontMetrics)> {
    let mut by_name: BTreeMap<&str, &Glyph> = BTreeMap::new();
    for glyph in glyphs {
        if by_name.insert(&glyph.identifier, glyph).is_some() {
            return Err(FontError::DuplicateGlyph(glyph.identifier.clone()));
        }
    }

    let mut table = FontTable::empty();
    for glyph in by_name.values() {
        if !range.contains(&glyph.code_point) || glyph.code_point as usize >= TABLE_SIZE {
            log::debug!(
                "dropping '{}' at {:#x}: outside supported range",
                glyph.identifier,
                glyph.code_point
            );
            continue;
        }
        let slot = &mut table.slots[glyph.code_point as usize];
        if let Some(existing) = slot {
            return Err(FontError::DuplicateCodePoint {
                code: glyph.code_point,
                first: existing.identifier.clone(),
                second: glyph.identifier.clone(),
            });
        }
        *slot = Some((*glyph).clone());
    }

    let reference = by_name
        .get(reference_name)
        .ok_or_else(|| FontError::MissingReferenceGlyph(reference_name.to_string()))?;
    let bounds = reference
        .bounds
        .ok_or_else(|| FontError::MissingReferenceBounds(reference_name.to_string()))?;
    let metrics = FontMetrics {
        height: bounds.height(),
    };

    Ok((table, metrics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::BoundingBox;
    use crate::point::RawPoint;

    fn blank(name: &str, code: u32) -> Glyph {
        Glyph::build(name, code, 100, &[] as &[Vec<RawPoint>]).unwrap()
    }

    fn reference() -> Glyph {
        blank("Z", 0x5A).with_bounds(BoundingBox::new(10.0, -2.0, 600.0, 698.0))
    }

    #[test]
    fn height_from_reference_bounds() {
        let (_, metrics) = assemble(&[reference()], "Z").unwrap();
        assert_eq!(metrics.height, 700.0);
    }

    #[test]
    fn missing_reference_is_fatal() {
        let err = assemble(&[blank("A", 0x41)], "Z").unwrap_err();
        assert!(matches!(err, FontError::MissingReferenceGlyph(name) if name == "Z"));
    }

    #[test]
    fn reference_without_bounds_is_fatal() {
        let err = assemble(&[blank("Z", 0x5A)], "Z").unwrap_err();
        assert!(matches!(err, FontError::MissingReferenceBounds(_)));
    }

    #[test]
    fn range_edges_are_inclusive() {
        let glyphs = [
            reference(),
            blank("space", 0x20),
            blank("degree", 0xB0),
            blank("uni001F", 0x1F),
            blank("plusminus", 0xB1),
        ];
        let (table, _) = assemble(&glyphs, "Z").unwrap();
        assert!(table.get(0x20).is_some());
        assert!(table.get(0xB0).is_some());
        assert!(table.get(0x1F).is_none());
        assert!(table.get(0xB1).is_none());
        assert_eq!(table.glyph_count(), 3);
    }

    #[test]
    fn duplicate_code_point_is_reported() {
        let glyphs = [reference(), blank("A", 0x41), blank("A.alt", 0x41)];
        let err = assemble(&glyphs, "Z").unwrap_err();
        match err {
            FontError::DuplicateCodePoint {
                code,
                first,
                second,
            } => {
                assert_eq!(code, 0x41);
                assert_eq!(first, "A");
                assert_eq!(second, "A.alt");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn duplicate_identifier_is_reported() {
        let glyphs = [reference(), blank("A", 0x41), blank("A", 0x61)];
        let err = assemble(&glyphs, "Z").unwrap_err();
        assert!(matches!(err, FontError::DuplicateGlyph(name) if name == "A"));
    }
}

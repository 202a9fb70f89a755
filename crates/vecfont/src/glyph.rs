use crate::{
    command::PathCommand,
    contour::translate,
    error::{FontError, Result},
    point::RawPoint,
};

/// Outline extrema in font design units, as recorded by the source font.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoundingBox {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl BoundingBox {
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Glyph {
    /// Glyph name, unique within a font
    pub identifier: String,
    pub code_point: u32,
    /// Horizontal distance to the next glyph origin
    pub advance_width: u16,
    pub bounds: Option<BoundingBox>,
    commands: Vec<PathCommand>,
}

impl Glyph {
    /// Build a glyph from its contours.
    ///
    /// The command list is `Start`, each contour's translation in order, then
    /// `Exit`. A glyph without contours (e.g. space) is just `Start, Exit`.
    pub fn build<C: AsRef<[RawPoint]>>(
        identifier: impl Into<String>,
        code_point: u32,
        advance_width: u16,
        contours: &[C],
    ) -> Result<Self> {
        let identifier = identifier.into();
        let mut commands = vec![PathCommand::Start];
        for (ci, contour) in contours.iter().enumerate() {
            let points = contour.as_ref();
            if let Some(pi) = points.iter().position(|p| !p.is_finite()) {
                return Err(FontError::MalformedContour {
                    glyph: identifier,
                    contour: ci,
                    point: pi,
                    reason: "non-finite coordinate".into(),
                });
            }
            commands.extend(translate(points));
        }
        commands.push(PathCommand::Exit);
        Ok(Self {
            identifier,
            code_point,
            advance_width,
            bounds: None,
            commands,
        })
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of contours drawn by this glyph.
    pub fn contour_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Close))
            .count()
    }

    pub fn is_blank(&self) -> bool {
        self.commands.iter().all(PathCommand::is_sentinel)
    }
}

/// A contour point as it appears in the source outline, in font design units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RawPoint {
    pub x: f64,
    pub y: f64,
    pub on_curve: bool,
}

impl RawPoint {
    pub fn new(x: f64, y: f64, on_curve: bool) -> Self {
        Self { x, y, on_curve }
    }

    pub fn on(x: f64, y: f64) -> Self {
        Self::new(x, y, true)
    }

    pub fn off(x: f64, y: f64) -> Self {
        Self::new(x, y, false)
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Effective on-curve coordinate for `a` given its neighbour `b`.
///
/// An on-curve `a` is returned unchanged. An off-curve `a` yields the
/// midpoint of `a` and `b`: two consecutive control points imply an on-curve
/// point halfway between them.
pub fn resolve_effective(a: &RawPoint, b: &RawPoint) -> (f64, f64) {
    if a.on_curve {
        a.coords()
    } else {
        ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }
}

/// One drawing step of a glyph outline.
///
/// A glyph's command list always opens with `Start` and ends with `Exit`;
/// each contour in between is a `Move`, any number of `Line`/`QuadCurve`
/// segments, and a `Close`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PathCommand {
    Start,
    Move {
        x: f64,
        y: f64,
    },
    Line {
        x: f64,
        y: f64,
    },
    /// Quadratic Bézier segment from the current point.
    QuadCurve {
        control_x: f64,
        control_y: f64,
        end_x: f64,
        end_y: f64,
    },
    Close,
    Exit,
}

impl PathCommand {
    pub fn move_to((x, y): (f64, f64)) -> Self {
        PathCommand::Move { x, y }
    }

    pub fn line_to((x, y): (f64, f64)) -> Self {
        PathCommand::Line { x, y }
    }

    pub fn quad_to((control_x, control_y): (f64, f64), (end_x, end_y): (f64, f64)) -> Self {
        PathCommand::QuadCurve {
            control_x,
            control_y,
            end_x,
            end_y,
        }
    }

    /// The on-curve point this command ends at, if it moves the pen.
    pub fn end_point(&self) -> Option<(f64, f64)> {
        match *self {
            PathCommand::Move { x, y } | PathCommand::Line { x, y } => Some((x, y)),
            PathCommand::QuadCurve { end_x, end_y, .. } => Some((end_x, end_y)),
            PathCommand::Start | PathCommand::Close | PathCommand::Exit => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, PathCommand::Start | PathCommand::Exit)
    }
}

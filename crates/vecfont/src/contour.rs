//! Contour to path command translation.
//!
//! TrueType contours are closed loops of points flagged on- or off-curve.
//! An off-curve point is the control point of a quadratic segment that ends
//! halfway to the following point. Every on-curve point becomes a `Line` to
//! its raw coordinate, so a curve followed by an on-curve point is joined to
//! it by a short straight segment. The embedded renderer consumes exactly
//! this command stream.
use crate::{
    command::PathCommand,
    point::{resolve_effective, RawPoint},
};

/// Translate one closed contour into `Move`, `Line`/`QuadCurve` segments and
/// a final `Close`.
///
/// The glyph-level `Start`/`Exit` sentinels are not emitted here. An empty
/// contour produces no commands and a single point produces `Move, Close`.
pub fn translate(points: &[RawPoint]) -> Vec<PathCommand> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    if points.len() == 1 {
        return vec![PathCommand::move_to(first.coords()), PathCommand::Close];
    }

    let count = points.len();
    let mut commands = Vec::with_capacity(count + 3);

    // an off-curve first point starts halfway to the last point
    commands.push(PathCommand::move_to(resolve_effective(first, last)));
    if !first.on_curve {
        commands.push(PathCommand::quad_to(
            first.coords(),
            resolve_effective(first, &points[1]),
        ));
    }

    for n in 1..count {
        let point = &points[n];
        if point.on_curve {
            commands.push(PathCommand::line_to(point.coords()));
        } else {
            let next = &points[(n + 1) % count];
            commands.push(PathCommand::quad_to(
                point.coords(),
                resolve_effective(point, next),
            ));
        }
    }

    commands.push(PathCommand::Close);
    commands
}

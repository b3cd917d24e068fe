// File: crates/cascade-core/src/shape.rs
// Summary: Bar polygon and leader-line path construction from projected corner points.

use crate::types::Point;

/// Drawable path commands consumed by the rendering surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Closed fill path visiting the projected corners in order and closing back
/// to the first.
///
/// Whatever the point count, the result is a valid closed path (possibly
/// zero-area); an empty slice yields an empty path. Never panics, so an
/// upstream projection failure degrades instead of aborting the render.
pub fn bar_path(points: &[Point]) -> Vec<PathCmd> {
    let mut path = Vec::with_capacity(points.len() + 2);
    for (i, &p) in points.iter().enumerate() {
        if i == 0 {
            path.push(PathCmd::MoveTo(p));
        } else {
            path.push(PathCmd::LineTo(p));
        }
    }
    if let Some(&first) = points.first() {
        path.push(PathCmd::LineTo(first));
        path.push(PathCmd::Close);
    }
    path
}

/// Open two-point connector from this bar's trailing end corner (index 2)
/// to the next bar's leading start corner (index 0). Consecutive bars share
/// that cumulative value, so the line runs horizontal.
///
/// `None` when either corner is missing from a degenerate projection.
pub fn leader_path(points: &[Point], next_points: &[Point]) -> Option<Vec<PathCmd>> {
    let from = *points.get(2)?;
    let to = *next_points.first()?;
    Some(vec![PathCmd::MoveTo(from), PathCmd::LineTo(to)])
}

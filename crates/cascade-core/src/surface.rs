// File: crates/cascade-core/src/surface.rs
// Summary: Renderer-agnostic seams: coordinate projection and the drawing surface.

use crate::series::Segment;
use crate::shape::PathCmd;
use crate::types::{Point, Rgba};

/// Maps a segment (category slot + interval) to screen-space corner points.
///
/// Corner order contract: leading edge at interval start, leading edge at
/// end, trailing edge at end, trailing edge at start. Implementations may
/// return fewer points when projection fails; downstream path construction
/// degrades instead of panicking.
pub trait Projection {
    fn project(&self, segment: &Segment) -> Vec<Point>;
}

/// Opaque id of a shape added to a surface, usable by the host for
/// composition and hit-testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub u64);

/// Fill paint for a bar body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStyle {
    pub color: Rgba,
    pub opacity: Option<f32>,
    /// Outline color and width; `None` leaves the bar unstroked.
    pub outline: Option<(Rgba, f32)>,
}

/// Stroke paint for open paths (leader lines).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    pub width: f32,
    pub dash: Option<[f32; 2]>,
}

/// Minimal drawing surface the render pass emits into.
pub trait Surface {
    fn add_fill_path(&mut self, path: &[PathCmd], style: &FillStyle) -> ShapeHandle;
    fn add_stroke_path(&mut self, path: &[PathCmd], style: &StrokeStyle) -> ShapeHandle;
}

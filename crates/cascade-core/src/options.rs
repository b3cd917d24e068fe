// File: crates/cascade-core/src/options.rs
// Summary: Chart options with stock waterfall defaults (total row, leader lines, styles).

use std::sync::Arc;

use crate::color::ColorSpec;
use crate::series::Segment;
use crate::types::Rgba;

/// Synthetic grand-total row configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct TotalOptions {
    pub visible: bool,
    pub label: String,
}

impl Default for TotalOptions {
    fn default() -> Self {
        Self { visible: true, label: "Total".to_string() }
    }
}

impl TotalOptions {
    /// The label to append, or `None` when the row is hidden.
    pub fn enabled(&self) -> Option<&str> {
        self.visible.then_some(self.label.as_str())
    }
}

/// Stroke styling for the dashed connector between consecutive bars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeaderLineStyle {
    pub stroke: Rgba,
    pub line_width: f32,
    pub line_dash: [f32; 2],
}

impl Default for LeaderLineStyle {
    fn default() -> Self {
        Self {
            stroke: Rgba::opaque(0xd3, 0xd3, 0xd3),
            line_width: 1.0,
            line_dash: [4.0, 2.0],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeaderLineOptions {
    pub visible: bool,
    pub style: LeaderLineStyle,
}

impl Default for LeaderLineOptions {
    fn default() -> Self {
        Self { visible: true, style: LeaderLineStyle::default() }
    }
}

/// Bar fill styling. The outline color defaults to the fill color; the
/// default width of 0 leaves bars unstroked.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarStyle {
    pub stroke: Option<Rgba>,
    pub line_width: f32,
    pub opacity: Option<f32>,
}

/// Fixed bar style, or a per-segment callback.
#[derive(Clone)]
pub enum StyleSpec {
    Fixed(BarStyle),
    PerSegment(Arc<dyn Fn(&Segment) -> BarStyle + Send + Sync>),
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self::Fixed(BarStyle::default())
    }
}

impl StyleSpec {
    pub fn resolve(&self, segment: &Segment) -> BarStyle {
        match self {
            Self::Fixed(style) => *style,
            Self::PerSegment(f) => f(segment),
        }
    }
}

/// Full option set. Defaults: total row visible (labelled "Total"), leader
/// lines visible with light-gray dashes, sign-rule palette, no bar outline.
#[derive(Clone, Default)]
pub struct WaterfallOptions {
    pub total: TotalOptions,
    pub leader_line: LeaderLineOptions,
    pub color: ColorSpec,
    pub style: StyleSpec,
}

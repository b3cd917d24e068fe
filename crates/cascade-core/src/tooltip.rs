// File: crates/cascade-core/src/tooltip.rs
// Summary: Hover tooltip markup reporting a single segment's cumulative delta.

use crate::series::Interval;
use crate::types::Rgba;

/// One hover candidate. The event layer may report several; only the first
/// is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverItem {
    pub interval: Option<Interval>,
    pub color: Option<Rgba>,
}

impl HoverItem {
    pub fn new(interval: Interval, color: Rgba) -> Self {
        Self { interval: Some(interval), color: Some(color) }
    }
}

/// Render the tooltip block for a hover event.
///
/// A missing item or interval degrades to a delta of 0 and an empty marker
/// color; the hover interaction itself never fails.
pub fn render_tooltip(title: &str, items: &[HoverItem]) -> String {
    let item = items.first().copied().unwrap_or_default();
    let delta = item.interval.map(|iv| iv.delta()).unwrap_or(0.0);
    let marker = item.color.map(|c| c.to_hex()).unwrap_or_default();
    format!(
        r#"<div class="cascade-tooltip">
  <div class="cascade-tooltip-title">{title}</div>
  <ul class="cascade-tooltip-list">
    <li class="cascade-tooltip-item">
      <span class="cascade-tooltip-marker" style="background-color:{marker};"></span>
      <span class="cascade-tooltip-label">Cumulative</span>
      <span class="cascade-tooltip-value" style="float:right;">{delta}</span>
    </li>
  </ul>
</div>"#
    )
}

// File: crates/cascade-core/src/chart.rs
// Summary: Waterfall chart: owns records + options and runs the segment/color/shape pass.

use crate::options::WaterfallOptions;
use crate::series::{build_segments, RawRecord, Segment};
use crate::shape::{bar_path, leader_path};
use crate::surface::{FillStyle, Projection, ShapeHandle, StrokeStyle, Surface};
use crate::tooltip::{render_tooltip, HoverItem};
use crate::types::{Point, Rgba};

/// Everything one render pass produced: the annotated segment list (feeds
/// axis/scale and legend computation), per-segment color tokens, and the
/// shape handles the host may compose with (e.g. hover hit-testing).
pub struct DrawOutput {
    pub segments: Vec<Segment>,
    pub colors: Vec<Rgba>,
    pub fills: Vec<ShapeHandle>,
    pub leaders: Vec<ShapeHandle>,
}

pub struct WaterfallChart {
    pub records: Vec<RawRecord>,
    pub options: WaterfallOptions,
}

impl WaterfallChart {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records, options: WaterfallOptions::default() }
    }

    pub fn with_options(records: Vec<RawRecord>, options: WaterfallOptions) -> Self {
        Self { records, options }
    }

    /// Replace the data wholesale; the next pass recomputes every segment.
    pub fn set_data(&mut self, records: Vec<RawRecord>) {
        self.records = records;
    }

    /// Run the interval builder for the current data and options.
    pub fn segments(&self) -> Vec<Segment> {
        build_segments(&self.records, self.options.total.enabled())
    }

    /// One full render pass: classify, project, and emit every bar plus its
    /// leader line into `surface`. The pass owns all intermediate state and
    /// mutates nothing on `self`.
    pub fn draw(&self, projection: &dyn Projection, surface: &mut dyn Surface) -> DrawOutput {
        let segments = self.segments();
        let classifier = self.options.color.compile();
        let projected: Vec<Vec<Point>> =
            segments.iter().map(|s| projection.project(s)).collect();

        let mut colors = Vec::with_capacity(segments.len());
        let mut fills = Vec::with_capacity(segments.len());
        let mut leaders = Vec::new();

        for (i, segment) in segments.iter().enumerate() {
            let color = classifier.color_for(segment);
            let style = self.options.style.resolve(segment);

            let fill = FillStyle {
                color,
                opacity: style.opacity,
                outline: (style.line_width > 0.0)
                    .then(|| (style.stroke.unwrap_or(color), style.line_width)),
            };
            fills.push(surface.add_fill_path(&bar_path(&projected[i]), &fill));

            // The last bar never gets a connector.
            if self.options.leader_line.visible && i + 1 < segments.len() {
                if let Some(link) = leader_path(&projected[i], &projected[i + 1]) {
                    let s = self.options.leader_line.style;
                    leaders.push(surface.add_stroke_path(
                        &link,
                        &StrokeStyle {
                            color: s.stroke,
                            width: s.line_width,
                            dash: Some(s.line_dash),
                        },
                    ));
                }
            }
            colors.push(color);
        }

        DrawOutput { segments, colors, fills, leaders }
    }

    /// Tooltip markup for a hovered segment, from its stored interval and
    /// classified color. Runs independently of any render pass and only
    /// reads.
    pub fn hover_tooltip(&self, segment: &Segment) -> String {
        let color = self.options.color.compile().color_for(segment);
        render_tooltip(&segment.category, &[HoverItem::new(segment.interval, color)])
    }
}

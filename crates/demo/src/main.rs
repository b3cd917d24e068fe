// File: crates/demo/src/main.rs
// Summary: Demo loads category/amount CSV rows and renders waterfall variants to PNGs.

use anyhow::{Context, Result};
use cascade_core::types::{HEIGHT, WIDTH};
use cascade_core::{
    ColorSpec, Insets, Point, Projection, RawRecord, Rgba, Segment, WaterfallChart,
    WaterfallOptions,
};
use cascade_render_skia::PngSurface;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to built-in sample data
    let (records, stem) = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            if !path.exists() {
                anyhow::bail!("file not found: {}", path.display());
            }
            println!("Using input file: {}", path.display());
            let records = load_records_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("waterfall")
                .to_string();
            (records, stem)
        }
        None => {
            println!("No input file given; using built-in monthly budget sample.");
            (sample_records(), "sample".to_string())
        }
    };
    println!("Loaded {} records", records.len());

    if records.is_empty() {
        anyhow::bail!("no records loaded; check headers/delimiter.");
    }

    // 1) Stock options: total row + dashed leader lines
    let chart = WaterfallChart::new(records.clone());
    let (pass_segments, pass_colors) = render_png(&chart, &out_name_with(&stem, "waterfall"))?;
    for (segment, color) in pass_segments.iter().zip(&pass_colors) {
        println!(
            "  {:>2} {:<14} [{:>9.1}, {:>9.1}] {}{}",
            segment.index,
            segment.category,
            segment.interval.start,
            segment.interval.end,
            color.to_hex(),
            if segment.is_total { "  (total)" } else { "" },
        );
    }

    // 2) Bare variant: no total row, no leader lines, two-color palette
    let mut options = WaterfallOptions::default();
    options.total.visible = false;
    options.leader_line.visible = false;
    options.color = ColorSpec::from_slice(&[
        Rgba::opaque(0x26, 0x8b, 0xd2),
        Rgba::opaque(0xdc, 0x32, 0x2f),
    ]);
    let chart_bare = WaterfallChart::with_options(records, options);
    render_png(&chart_bare, &out_name_with(&stem, "bare"))?;

    // Simulate a hover on the widest bar and print its tooltip markup
    let segments = chart.segments();
    if let Some(widest) = segments
        .iter()
        .filter(|s| !s.is_total)
        .max_by(|a, b| {
            a.interval
                .delta()
                .abs()
                .total_cmp(&b.interval.delta().abs())
        })
    {
        println!("Tooltip for {:?}:", widest.category);
        println!("{}", chart.hover_tooltip(widest));
    }

    Ok(())
}

/// Render one chart into `target/out/<name>` and return its segments/colors.
fn render_png(chart: &WaterfallChart, out: &Path) -> Result<(Vec<Segment>, Vec<Rgba>)> {
    let projection = BandProjection::fit(&chart.segments(), WIDTH, HEIGHT, Insets::default());
    let mut surface = PngSurface::new(WIDTH, HEIGHT, Rgba::opaque(250, 250, 252))?;
    let pass = chart.draw(&projection, &mut surface);
    surface.write_png(out)?;
    println!("Wrote {}", out.display());
    Ok((pass.segments, pass.colors))
}

/// Produce output file name like target/out/<stem>_<suffix>.png
fn out_name_with(stem: &str, suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("{}_{}.png", stem, suffix));
    out
}

/// Built-in sample: a monthly budget waterfall.
fn sample_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new("Groceries", 300.0),
        RawRecord::new("Dining", 900.0),
        RawRecord::new("Transport", 200.0),
        RawRecord::new("Utilities", 300.0),
        RawRecord::new("Rent", 1200.0),
        RawRecord::new("Shopping", 1000.0),
        RawRecord::new("Entertainment", -2000.0),
    ]
}

/// Load category/amount rows from a CSV with caller-flexible column names.
fn load_records_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    // Inspect headers (log them)
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_category = idx(&["category", "type", "name", "label", "item"]);
    let i_amount = idx(&["amount", "value", "money", "delta", "change"]);

    if i_category.is_none() || i_amount.is_none() {
        println!("Warning: Could not find category/amount columns; falling back to columns 0/1.");
    }
    let i_category = i_category.unwrap_or(0);
    let i_amount = i_amount.unwrap_or(1);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let category = rec.get(i_category).unwrap_or("").trim();
        let amount = rec
            .get(i_amount)
            .and_then(|s| s.trim().parse::<f64>().ok());
        if let Some(amount) = amount {
            out.push(RawRecord::new(category, amount));
        }
    }
    Ok(out)
}

/// Equal-width category bands over the plot rect, linear value axis fit to
/// the segment extents (always including zero).
struct BandProjection {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    vmin: f64,
    vmax: f64,
    slots: usize,
}

impl BandProjection {
    fn fit(segments: &[Segment], width: i32, height: i32, insets: Insets) -> Self {
        let mut vmin = 0.0f64;
        let mut vmax = 0.0f64;
        for s in segments {
            for v in [s.interval.start, s.interval.end] {
                if v.is_finite() {
                    vmin = vmin.min(v);
                    vmax = vmax.max(v);
                }
            }
        }
        if (vmax - vmin).abs() < 1e-9 {
            vmax = vmin + 1.0;
        }
        let margin = (vmax - vmin) * 0.02;
        Self {
            left: insets.left as f32,
            top: insets.top as f32,
            width: (width as u32 - insets.hsum()) as f32,
            height: (height as u32 - insets.vsum()) as f32,
            vmin: vmin - margin,
            vmax: vmax + margin,
            slots: segments.len().max(1),
        }
    }

    fn x(&self, slot: f32) -> f32 {
        self.left + slot / self.slots as f32 * self.width
    }

    fn y(&self, value: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        let v = if value.is_finite() { value } else { self.vmin };
        self.top + self.height - ((v - self.vmin) / span) as f32 * self.height
    }
}

impl Projection for BandProjection {
    fn project(&self, segment: &Segment) -> Vec<Point> {
        let pad = self.width / self.slots as f32 * 0.15;
        let x0 = self.x(segment.index as f32) + pad;
        let x1 = self.x(segment.index as f32 + 1.0) - pad;
        let y0 = self.y(segment.interval.start);
        let y1 = self.y(segment.interval.end);
        vec![
            Point::new(x0, y0),
            Point::new(x0, y1),
            Point::new(x1, y1),
            Point::new(x1, y0),
        ]
    }
}

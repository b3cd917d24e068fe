// File: crates/cascade-render-skia/src/lib.rs
// Summary: Skia renderer: rasterizes core path commands on a CPU surface, encodes PNG.

use anyhow::Result;
use skia_safe as skia;

use cascade_core::{FillStyle, PathCmd, Rgba, ShapeHandle, StrokeStyle, Surface};

fn to_skia_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn to_skia_path(cmds: &[PathCmd]) -> skia::Path {
    let mut path = skia::Path::new();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => { path.move_to((p.x, p.y)); }
            PathCmd::LineTo(p) => { path.line_to((p.x, p.y)); }
            PathCmd::Close => { path.close(); }
        }
    }
    path
}

/// CPU raster surface the chart draws into; snapshots encode to PNG.
pub struct PngSurface {
    surface: skia::Surface,
    shapes: u64,
}

impl PngSurface {
    pub fn new(width: i32, height: i32, background: Rgba) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        surface.canvas().clear(to_skia_color(background));
        Ok(Self { surface, shapes: 0 })
    }

    fn next_handle(&mut self) -> ShapeHandle {
        let handle = ShapeHandle(self.shapes);
        self.shapes += 1;
        handle
    }

    /// Encode the current raster content to PNG bytes.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the PNG to `path`, creating parent directories as needed.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Surface for PngSurface {
    fn add_fill_path(&mut self, path: &[PathCmd], style: &FillStyle) -> ShapeHandle {
        let sk_path = to_skia_path(path);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(to_skia_color(style.color));
        if let Some(opacity) = style.opacity {
            fill.set_alpha_f(opacity.clamp(0.0, 1.0));
        }
        self.surface.canvas().draw_path(&sk_path, &fill);

        if let Some((color, width)) = style.outline {
            let mut outline = skia::Paint::default();
            outline.set_anti_alias(true);
            outline.set_style(skia::paint::Style::Stroke);
            outline.set_stroke_width(width);
            outline.set_color(to_skia_color(color));
            if let Some(opacity) = style.opacity {
                outline.set_alpha_f(opacity.clamp(0.0, 1.0));
            }
            self.surface.canvas().draw_path(&sk_path, &outline);
        }
        self.next_handle()
    }

    fn add_stroke_path(&mut self, path: &[PathCmd], style: &StrokeStyle) -> ShapeHandle {
        let sk_path = to_skia_path(path);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(style.width);
        stroke.set_color(to_skia_color(style.color));
        if let Some(dash) = style.dash {
            stroke.set_path_effect(skia::dash_path_effect::new(&dash, 0.0));
        }
        self.surface.canvas().draw_path(&sk_path, &stroke);
        self.next_handle()
    }
}

// File: crates/cascade-core/src/color.rs
// Summary: Sign-based color classification and the polymorphic color configuration.

use std::collections::HashMap;
use std::sync::Arc;

use crate::series::Segment;
use crate::types::Rgba;

/// Default rising (warm) tone.
pub const RISING: Rgba = Rgba::opaque(0xf4, 0x66, 0x4a);
/// Default falling (cool) tone.
pub const FALLING: Rgba = Rgba::opaque(0x30, 0xbf, 0x78);
/// Default total tone, translucent neutral.
pub const TOTAL: Rgba = Rgba::new(0, 0, 0, 64);

/// The three semantic buckets a segment can resolve to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorBucket {
    Rising,
    Falling,
    Total,
}

/// Pure sign rule. `delta >= 0` counts as rising, so zero-height bars read
/// as rising; a NaN delta fails the comparison and lands in falling.
pub fn bucket_for(segment: &Segment) -> ColorBucket {
    if segment.is_total {
        return ColorBucket::Total;
    }
    if segment.interval.delta() >= 0.0 {
        ColorBucket::Rising
    } else {
        ColorBucket::Falling
    }
}

/// Bucket colors. A `None` total falls back to rising or falling by the
/// sign of the total row's start value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub rising: Rgba,
    pub falling: Rgba,
    pub total: Option<Rgba>,
}

impl Default for Palette {
    fn default() -> Self {
        Self { rising: RISING, falling: FALLING, total: Some(TOTAL) }
    }
}

impl Palette {
    fn pick(&self, segment: &Segment) -> Rgba {
        match bucket_for(segment) {
            ColorBucket::Rising => self.rising,
            ColorBucket::Falling => self.falling,
            ColorBucket::Total => self.total.unwrap_or(if segment.interval.start >= 0.0 {
                self.rising
            } else {
                self.falling
            }),
        }
    }
}

/// Per-segment color override.
pub type ColorFn = Arc<dyn Fn(&Segment) -> Rgba + Send + Sync>;

/// Recognized color configuration forms. Resolved once via [`ColorSpec::compile`]
/// rather than re-inspected on every draw call.
#[derive(Clone)]
pub enum ColorSpec {
    /// Explicit bucket colors.
    Palette(Palette),
    /// One color for all three buckets.
    Uniform(Rgba),
    /// Category label -> color; absent labels degrade to the default palette.
    ByCategory(HashMap<String, Rgba>),
    /// Full override; bypasses the sign rule entirely.
    Custom(ColorFn),
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::Palette(Palette::default())
    }
}

impl ColorSpec {
    /// Positional form: `[rising]`, `[rising, falling]` or
    /// `[rising, falling, total]`. Falling defaults to rising; an empty
    /// slice degrades to the default palette.
    pub fn from_slice(colors: &[Rgba]) -> Self {
        match *colors {
            [] => Self::default(),
            [c] => Self::Uniform(c),
            [rising, falling] => Self::Palette(Palette { rising, falling, total: None }),
            [rising, falling, total, ..] => {
                Self::Palette(Palette { rising, falling, total: Some(total) })
            }
        }
    }

    /// Resolve the configuration into its canonical classification function.
    pub fn compile(&self) -> Classifier {
        let resolved = match self {
            ColorSpec::Palette(palette) => Resolved::Rule(*palette),
            ColorSpec::Uniform(c) => Resolved::Rule(Palette {
                rising: *c,
                falling: *c,
                total: Some(*c),
            }),
            ColorSpec::ByCategory(map) => Resolved::Map(map.clone(), Palette::default()),
            ColorSpec::Custom(f) => Resolved::Custom(f.clone()),
        };
        Classifier(resolved)
    }
}

/// Canonical `segment -> color` function compiled from a [`ColorSpec`].
#[derive(Clone)]
pub struct Classifier(Resolved);

#[derive(Clone)]
enum Resolved {
    Rule(Palette),
    Map(HashMap<String, Rgba>, Palette),
    Custom(ColorFn),
}

impl Classifier {
    /// Color token for one segment. Pure.
    pub fn color_for(&self, segment: &Segment) -> Rgba {
        match &self.0 {
            Resolved::Rule(palette) => palette.pick(segment),
            Resolved::Map(map, fallback) => map
                .get(&segment.category)
                .copied()
                .unwrap_or_else(|| fallback.pick(segment)),
            Resolved::Custom(f) => f(segment),
        }
    }
}

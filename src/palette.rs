//! Icon colors: gradient endpoints and glyph fill, with CSS color overrides.

use anyhow::{anyhow, Result};
use image::Rgba;
use std::str::FromStr;

pub const DEFAULT_START: Rgba<u8> = Rgba([88, 28, 135, 255]);
pub const DEFAULT_END: Rgba<u8> = Rgba([138, 43, 226, 255]);
pub const DEFAULT_GLYPH: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Colors used to paint an icon: the gradient endpoints (top row, bottom
/// row) and the glyph fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub start: Rgba<u8>,
    pub end: Rgba<u8>,
    pub glyph: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            glyph: DEFAULT_GLYPH,
        }
    }
}

impl Palette {
    /// Default palette with any of the given CSS colors swapped in.
    pub fn with_overrides(
        start: Option<&str>,
        end: Option<&str>,
        glyph: Option<&str>,
    ) -> Result<Self> {
        let mut palette = Self::default();
        if let Some(color) = start {
            palette.start = parse_color(color)?;
        }
        if let Some(color) = end {
            palette.end = parse_color(color)?;
        }
        if let Some(color) = glyph {
            palette.glyph = parse_color(color)?;
        }
        Ok(palette)
    }
}

/// Parse a CSS color into an opaque RGBA pixel. Alpha in the input is
/// ignored since icons are painted fully opaque.
pub fn parse_color(color: &str) -> Result<Rgba<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow!("Invalid color: {color:?} (expected CSS color syntax)"))?;

    let to_byte = |c: f32| (c * 255.).round().clamp(0., 255.) as u8;
    Ok(Rgba([
        to_byte(srgb.red),
        to_byte(srgb.green),
        to_byte(srgb.blue),
        255,
    ]))
}

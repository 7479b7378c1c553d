//! Raster primitives used to paint icons: a per-row gradient fill and an
//! inclusive, clipped rectangle fill.

use image::{Rgba, RgbaImage};

/// Inclusive pixel rectangle. Coordinates are signed so layouts may reach
/// past the canvas edge; painting clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl Rect {
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Color of gradient row `row` on a canvas `size` rows tall.
///
/// Each channel moves linearly from `start` towards `end` and the whole value
/// is floored, so row 0 is exactly `start` and the last row lands within one
/// step of `end`. The result is always fully opaque.
pub fn gradient_color(row: u32, size: u32, start: Rgba<u8>, end: Rgba<u8>) -> Rgba<u8> {
    let size = i64::from(size.max(1));
    let row = i64::from(row);
    let channel = |i: usize| {
        let from = i64::from(start[i]);
        let to = i64::from(end[i]);
        // numerator stays non-negative for row < size, so division floors
        ((from * size + (to - from) * row) / size).clamp(0, 255) as u8
    };
    Rgba([channel(0), channel(1), channel(2), 255])
}

pub fn fill_vertical_gradient(canvas: &mut RgbaImage, start: Rgba<u8>, end: Rgba<u8>) {
    let height = canvas.height();
    for (y, row) in canvas.rows_mut().enumerate() {
        let color = gradient_color(y as u32, height, start, end);
        for pixel in row {
            *pixel = color;
        }
    }
}

/// Paint `rect` (both corners included) with `color`, clipped to the canvas.
pub fn fill_rect(canvas: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let x0 = rect.x0.max(0);
    let y0 = rect.y0.max(0);
    let x1 = rect.x1.min(i64::from(width) - 1);
    let y1 = rect.y1.min(i64::from(height) - 1);
    if x1 < x0 || y1 < y0 {
        return;
    }

    for y in y0..=y1 {
        for x in x0..=x1 {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}

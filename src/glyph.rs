//! Layout of the "4U" glyph as a fixed set of axis-aligned strokes whose
//! coordinates scale with the icon size.

use crate::draw::Rect;

/// Stroke width for an icon of `size` pixels, never thinner than 2px.
pub fn thickness(size: u32) -> u32 {
    (size / 40).max(2)
}

/// The six strokes of the glyph: three for the "4", three for the "U".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphLayout {
    pub four: [Rect; 3],
    pub u: [Rect; 3],
}

impl GlyphLayout {
    pub fn for_size(size: u32) -> Self {
        let t = i64::from(thickness(size));
        let size = i64::from(size);
        let center = size / 2;
        let text = size / 3;

        let x4 = center - text / 2;
        let y4 = center - text / 3;
        let arm = x4 - text / 3;
        let bar = y4 + text / 2;

        let four = [
            // stem
            Rect::new(x4, y4, x4 + t, y4 + text),
            // crossbar
            Rect::new(arm, bar, x4 + t, bar + t),
            // upper arm
            Rect::new(arm, y4, arm + t, bar + t),
        ];

        let xu = center + text / 4;
        let yu = y4;
        let right = xu + text / 2;

        let u = [
            Rect::new(xu, yu, xu + t, yu + text),
            Rect::new(right, yu, right + t, yu + text),
            Rect::new(xu, yu + text - t, right + t, yu + text),
        ];

        Self { four, u }
    }

    pub fn strokes(&self) -> impl Iterator<Item = &Rect> {
        self.four.iter().chain(self.u.iter())
    }

    /// Whether pixel `(x, y)` is covered by any stroke.
    pub fn covers(&self, x: u32, y: u32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        self.strokes().any(|r| r.contains(x, y))
    }
}

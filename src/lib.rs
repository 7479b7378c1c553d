//! Procedural renderer for the mobile app's icon assets.
//!
//! Each icon is a vertical gradient with a "4U" glyph built from
//! axis-aligned strokes, written as PNG.

pub mod draw;
pub mod glyph;
pub mod icon_gen;
pub mod manifest;
pub mod palette;

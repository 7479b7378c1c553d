use crate::draw::{fill_rect, fill_vertical_gradient};
use crate::glyph::GlyphLayout;
use crate::manifest::{write_manifest, AssetEntry, Manifest};
use crate::palette::Palette;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    collections::HashSet,
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// One asset to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub filename: String,
    pub size: u32,
    pub role: String,
}

impl IconSpec {
    pub fn new(filename: &str, size: u32, role: &str) -> Self {
        Self {
            filename: filename.to_string(),
            size,
            role: role.to_string(),
        }
    }

    /// A `<size>x<size>.png` asset requested with `--png`.
    pub fn custom(size: u32) -> Self {
        Self::new(&format!("{size}x{size}.png"), size, "custom")
    }
}

/// The assets the mobile app ships with.
pub fn default_icons() -> Vec<IconSpec> {
    vec![
        IconSpec::new("icon.png", 1024, "icon"),
        IconSpec::new("adaptive-icon.png", 1024, "adaptive-icon"),
        IconSpec::new("splash-icon.png", 1024, "splash"),
        IconSpec::new("favicon.png", 48, "favicon"),
    ]
}

#[derive(Debug, Clone)]
pub struct Options {
    pub output: PathBuf,
    /// Custom sizes; when set, only these are generated.
    pub png: Option<Vec<u32>>,
    pub palette: Palette,
    pub manifest: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            png: None,
            palette: Palette::default(),
            manifest: false,
        }
    }
}

impl Options {
    /// Assets to generate, in order. Repeated custom sizes are kept once.
    pub fn icons(&self) -> Vec<IconSpec> {
        match &self.png {
            Some(sizes) => {
                let mut seen = HashSet::new();
                sizes
                    .iter()
                    .filter(|&&size| seen.insert(size))
                    .map(|&size| IconSpec::custom(size))
                    .collect()
            }
            None => default_icons(),
        }
    }
}

pub fn generate_icons(options: &Options) -> Result<()> {
    // Ensure the output directory exists
    create_dir_all(&options.output).context("Can't create output directory")?;

    let icons = options.icons();
    if options.png.is_some() {
        println!("Generating custom PNG sizes...");
    } else {
        println!("Generating app icons...");
    }

    let mut manifest = Manifest::new("app-icon-gen".to_string());
    for icon in &icons {
        let path = options.output.join(&icon.filename);
        create_icon(icon.size, &path, &options.palette)?;
        manifest.add_image(AssetEntry::new(&icon.filename, &icon.role, icon.size));
    }

    if options.manifest {
        write_manifest(&options.output, &manifest)?;
    }

    println!("All icons generated successfully!");
    Ok(())
}

/// Paint the gradient background and the "4U" glyph onto a fresh
/// `size`×`size` canvas.
pub fn render_icon(size: u32, palette: &Palette) -> RgbaImage {
    let mut canvas = RgbaImage::new(size, size);
    fill_vertical_gradient(&mut canvas, palette.start, palette.end);

    let layout = GlyphLayout::for_size(size);
    for stroke in layout.strokes() {
        fill_rect(&mut canvas, *stroke, palette.glyph);
    }

    canvas
}

/// Render one icon and write it to `path` as PNG.
pub fn create_icon(size: u32, path: &Path, palette: &Palette) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Icon size must be positive ({})", path.display());
    }
    if canvas_len(size).is_none() {
        anyhow::bail!(
            "Icon size {size}x{size} is too large to allocate ({})",
            path.display()
        );
    }

    let canvas = render_icon(size, palette);

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(canvas.as_raw(), &mut out_file, size)
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    println!("  ✓ Created {name} ({size}x{size})");
    Ok(())
}

/// Byte length of a `size`×`size` RGBA canvas, if it fits in memory addressing.
fn canvas_len(size: u32) -> Option<usize> {
    let side = usize::try_from(size).ok()?;
    side.checked_mul(side)?.checked_mul(4)
}

// Encode with the encoder's default settings; no extra optimization pass
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder =
        PngEncoder::new_with_quality(w, CompressionType::Default, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::gradient_color;
    use image::Rgba;

    #[test]
    fn test_default_icon_set() {
        let icons = default_icons();
        let names: Vec<_> = icons.iter().map(|i| i.filename.as_str()).collect();
        assert_eq!(
            names,
            ["icon.png", "adaptive-icon.png", "splash-icon.png", "favicon.png"]
        );
        let sizes: Vec<_> = icons.iter().map(|i| i.size).collect();
        assert_eq!(sizes, [1024, 1024, 1024, 48]);
    }

    #[test]
    fn test_custom_sizes_replace_defaults() {
        let options = Options {
            png: Some(vec![16, 192]),
            ..Options::default()
        };
        let icons = options.icons();
        assert_eq!(icons, [IconSpec::custom(16), IconSpec::custom(192)]);
        assert_eq!(icons[1].filename, "192x192.png");
    }

    #[test]
    fn test_repeated_custom_sizes_are_generated_once() {
        let options = Options {
            png: Some(vec![48, 16, 48, 16, 32]),
            ..Options::default()
        };
        let sizes: Vec<_> = options.icons().iter().map(|i| i.size).collect();
        assert_eq!(sizes, [48, 16, 32]);
    }

    #[test]
    fn test_repeated_sizes_give_one_manifest_entry() {
        let temp_dir = tempfile::tempdir().unwrap();
        let options = Options {
            output: temp_dir.path().to_path_buf(),
            png: Some(vec![24, 24]),
            manifest: true,
            ..Options::default()
        };

        generate_icons(&options).unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("icons.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["images"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_canvas_len() {
        assert_eq!(canvas_len(48), Some(48 * 48 * 4));
        assert_eq!(canvas_len(u32::MAX), None);
    }

    #[test]
    fn test_create_icon_rejects_oversized_canvas() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("huge.png");

        let err = create_icon(u32::MAX, &path, &Palette::default()).unwrap_err();
        assert!(err.to_string().contains("too large"), "{err}");
        assert!(!path.exists());
    }

    #[test]
    fn test_render_dimensions() {
        for size in [1, 7, 48, 1024] {
            let img = render_icon(size, &Palette::default());
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_render_corners_and_strokes() {
        let palette = Palette::default();
        let img = render_icon(1024, &palette);

        assert_eq!(*img.get_pixel(0, 0), palette.start);
        assert_eq!(*img.get_pixel(1023, 0), palette.start);
        assert_eq!(*img.get_pixel(0, 1023), Rgba([137, 42, 225, 255]));

        // stem of the 4, bottom of the U
        assert_eq!(*img.get_pixel(350, 500), palette.glyph);
        assert_eq!(*img.get_pixel(700, 730), palette.glyph);
        // inside the U
        assert_eq!(*img.get_pixel(700, 500), Rgba([112, 35, 179, 255]));
    }

    #[test]
    fn test_pixels_are_gradient_or_glyph() {
        let palette = Palette::default();
        for size in [48, 256] {
            let img = render_icon(size, &palette);
            let layout = GlyphLayout::for_size(size);
            for (x, y, pixel) in img.enumerate_pixels() {
                if layout.covers(x, y) {
                    assert_eq!(*pixel, palette.glyph, "({x}, {y})");
                } else {
                    let row = gradient_color(y, size, palette.start, palette.end);
                    assert_eq!(*pixel, row, "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let palette = Palette::default();
        assert_eq!(render_icon(1024, &palette), render_icon(1024, &palette));
    }

    #[test]
    fn test_create_icon_writes_decodable_png() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("favicon.png");

        create_icon(48, &path, &Palette::default()).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img, render_icon(48, &Palette::default()));
    }

    #[test]
    fn test_create_icon_rejects_zero_size() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("empty.png");

        assert!(create_icon(0, &path, &Palette::default()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_create_icon_unwritable_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing").join("icon.png");

        let err = create_icon(48, &path, &Palette::default()).unwrap_err();
        assert!(format!("{err:#}").contains("icon.png"));
    }

    #[test]
    fn test_generate_stops_at_first_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let options = Options {
            output: temp_dir.path().to_path_buf(),
            png: Some(vec![32, 0, 64]),
            manifest: true,
            ..Options::default()
        };

        assert!(generate_icons(&options).is_err());
        assert!(temp_dir.path().join("32x32.png").exists());
        assert!(!temp_dir.path().join("64x64.png").exists());
        assert!(!temp_dir.path().join("icons.json").exists());
    }
}

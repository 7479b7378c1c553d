//! `icons.json` manifest describing the generated assets
//!
//! Lists every PNG written in one run with its role and pixel size so an
//! asset pipeline can check what it received without decoding the images.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

pub const MANIFEST_FILE: &str = "icons.json";

/// Root of `icons.json`
#[derive(Serialize, Debug, Clone)]
pub struct Manifest {
    /// One entry per generated file, in generation order
    pub images: Vec<AssetEntry>,

    pub info: Info,
}

/// A single generated icon
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub filename: String,

    /// What the asset is used for (e.g. "icon", "adaptive-icon", "splash", "favicon")
    pub role: String,

    /// Pixel dimensions as "WxH"
    pub size: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// Manifest format version
    pub version: u8,

    /// Tool that wrote the manifest
    pub author: String,
}

impl Manifest {
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { version: 1, author },
        }
    }

    pub fn add_image(&mut self, image: AssetEntry) {
        self.images.push(image);
    }
}

impl AssetEntry {
    pub fn new(filename: &str, role: &str, size: u32) -> Self {
        Self {
            filename: filename.to_string(),
            role: role.to_string(),
            size: format!("{size}x{size}"),
        }
    }
}

/// Serialize `manifest` as pretty JSON into `dir/icons.json`.
pub fn write_manifest(dir: &Path, manifest: &Manifest) -> Result<()> {
    let json =
        serde_json::to_string_pretty(manifest).context("Failed to serialize icons.json")?;
    std::fs::write(dir.join(MANIFEST_FILE), json).context("Failed to write icons.json")?;

    println!("  ✓ Generated {MANIFEST_FILE}");
    Ok(())
}

use anyhow::Result;
use app_icon_gen::{icon_gen, palette::Palette};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "app-icon-gen",
    about = "Generate the app icon, adaptive icon, splash icon and favicon"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Custom PNG icon sizes to generate. When set, only these sizes are generated.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    png: Option<Vec<u32>>,

    /// Gradient color of the top row (CSS color format)
    #[clap(long, value_name = "COLOR")]
    start_color: Option<String>,

    /// Gradient color the bottom row approaches (CSS color format)
    #[clap(long, value_name = "COLOR")]
    end_color: Option<String>,

    /// Fill color of the "4U" glyph (CSS color format)
    #[clap(long, value_name = "COLOR")]
    glyph_color: Option<String>,

    /// Also write icons.json describing the generated files
    #[clap(long)]
    manifest: bool,
}

impl Args {
    fn into_options(self) -> Result<icon_gen::Options> {
        let palette = Palette::with_overrides(
            self.start_color.as_deref(),
            self.end_color.as_deref(),
            self.glyph_color.as_deref(),
        )?;

        Ok(icon_gen::Options {
            output: self.output,
            png: self.png,
            palette,
            manifest: self.manifest,
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&args.into_options()?)
}

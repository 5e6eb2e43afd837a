use crate::envelope::{render_envelope, Palette};
use crate::manifest;
use anyhow::{Context, Result};
use clap::Parser;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::{self, create_dir_all},
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Icon sizes expected by the extension manifest.
pub const DEFAULT_SIZES: &[u32] = &[16, 48, 128];

#[derive(Debug, Parser)]
#[clap(
    name = "envelope-gen",
    about = "Generate the envelope icon set for the Gmail Organizer extension"
)]
pub struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "icons")]
    pub output: PathBuf,

    /// Custom icon sizes to generate. When set, only these sizes are generated.
    #[clap(short, long, value_delimiter = ',', value_name = "SIZES")]
    pub sizes: Option<Vec<u32>>,

    /// Fill color for the envelope (CSS color format).
    #[clap(long, default_value = "#1a73e8")]
    pub fill: String,

    /// Outline color for the envelope (CSS color format).
    #[clap(long, default_value = "#1557b0")]
    pub outline: String,

    /// Also write an icons.json manifest fragment next to the icons.
    #[clap(long)]
    pub manifest: bool,
}

pub fn generate_icons(args: &Args) -> Result<()> {
    let palette = Palette {
        fill: parse_color(&args.fill)?,
        outline: parse_color(&args.outline)?,
    };

    // Ensure the output directory exists
    create_dir_all(&args.output).context("Can't create output directory")?;

    let sizes = args.sizes.as_deref().unwrap_or(DEFAULT_SIZES);

    let mut entries = Vec::new();
    for &size in sizes {
        let filename = format!("icon{size}.png");
        let path = args.output.join(&filename);

        let icon = render_envelope(size, &palette)
            .with_context(|| format!("Failed to render the {size}x{size} icon"))?;
        save_png(&icon, &path)?;
        println!("Criado: {} ({}x{})", path.display(), size, size);

        entries.push((size, filename));
    }

    if args.manifest {
        manifest::write_manifest(&args.output, &entries)?;
    }

    println!();
    println!("Todos os icones foram criados com sucesso!");
    println!("Arquivos salvos em: {}/", args.output.display());

    Ok(())
}

/// Parse a CSS color string into an RGBA pixel.
fn parse_color(value: &str) -> Result<Rgba<u8>> {
    let color = css_color::Srgb::from_str(value)
        .map_err(|_| anyhow::anyhow!("Invalid CSS color: {value}"))?;

    Ok(Rgba([
        (color.red * 255.) as u8,
        (color.green * 255.) as u8,
        (color.blue * 255.) as u8,
        (color.alpha * 255.) as u8,
    ]))
}

/// Write an icon to disk without ever exposing a partial file.
///
/// The PNG is encoded into memory first, written to a sibling temp file, and
/// renamed into place; a failure at any step leaves the final name untouched.
fn save_png(icon: &RgbaImage, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    write_png(icon.as_raw(), &mut buf, icon.width())?;

    let tmp = path.with_extension("png.tmp");
    if let Err(err) = fs::write(&tmp, &buf).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("Failed to write {}", path.display()));
    }

    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}

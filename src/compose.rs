//! Background tinting for card scans.
//!
//! Scryfall PNGs have transparent rounded corners. Drawing the scan over a
//! solid canvas turns those corners into a coloured border.

use std::path::{Path, PathBuf};

use image::{imageops, DynamicImage, ImageFormat, Rgba, RgbImage, RgbaImage};

use crate::cache::naming::PARTIAL_SUFFIX;
use crate::color::ColorSpec;
use crate::error::Result;

/// Draw `raw` (any format `image` can decode) unscaled at the origin of a
/// same-sized canvas filled with `color`, and flatten the result to RGB.
pub fn tint_background(raw: &[u8], color: &ColorSpec) -> Result<RgbImage> {
    let source = image::load_from_memory(raw)?.to_rgba8();
    let (width, height) = source.dimensions();

    let mut canvas = RgbaImage::from_pixel(width, height, Rgba(color.to_rgba()));
    imageops::overlay(&mut canvas, &source, 0, 0);

    Ok(DynamicImage::ImageRgba8(canvas).to_rgb8())
}

/// Encode as JPEG with the encoder's default quality. The image is written
/// to `<path>.part` and renamed into place, so `path` only ever holds a
/// complete file.
pub fn write_jpeg(image: &RgbImage, path: &Path) -> Result<()> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(PARTIAL_SUFFIX);
    let partial = PathBuf::from(partial);

    if let Err(e) = image.save_with_format(&partial, ImageFormat::Jpeg) {
        let _ = std::fs::remove_file(&partial);
        return Err(e.into());
    }
    std::fs::rename(&partial, path)?;
    Ok(())
}

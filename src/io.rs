use crate::bitmap::{Bitmap, Rgba};
use anyhow::{Context, Result};
use image::imageops::{resize, Nearest};
use std::cmp::max;
use std::path::Path;

/// Average color of a bitmap's RGB channels, with alpha fixed at 128 — the
/// reference implementation's convention for a half-transparent background
/// guess, kept here for compatibility with the rest of the pipeline.
pub fn average_color(bitmap: &Bitmap) -> Rgba {
    let mut sums = [0i64; 3];
    let pixel_count = (bitmap.width() as i64) * (bitmap.height() as i64);

    if pixel_count == 0 {
        return Rgba::new(0, 0, 0, 0);
    }

    for chunk in bitmap.pixels().chunks_exact(4) {
        sums[0] += chunk[0] as i64;
        sums[1] += chunk[1] as i64;
        sums[2] += chunk[2] as i64;
    }

    Rgba::new(
        (sums[0] / pixel_count) as u8,
        (sums[1] / pixel_count) as u8,
        (sums[2] / pixel_count) as u8,
        128,
    )
}

/// Load an image from disk and, if `scale_to > 0`, resize it so its largest
/// dimension becomes `scale_to` pixels (preserving aspect ratio). Returns the
/// loaded bitmap alongside its average color, used as the default background
/// fill when the caller doesn't supply one explicitly.
pub fn load_bitmap(path: &Path, scale_to: u32) -> Result<(Bitmap, Rgba)> {
    let original = image::open(path)
        .with_context(|| format!("failed to load image at {:?}", path))?
        .to_rgba8();

    let (width, height) = original.dimensions();

    let scale = if scale_to > 0 {
        scale_to as f64 / max(width, height) as f64
    } else {
        1.0
    };

    let new_width = ((width as f64 * scale) as u32).max(1);
    let new_height = ((height as f64 * scale) as u32).max(1);

    let resized = resize(&original, new_width, new_height, Nearest);
    let bitmap = Bitmap::from_image(&resized);
    let background = average_color(&bitmap);

    Ok((bitmap, background))
}

/// Save a bitmap as a raster image in whatever format `path`'s extension
/// implies (anything the `image` crate supports: png, jpg, bmp, ico, gif).
pub fn save_raster(bitmap: &Bitmap, path: &Path) -> Result<()> {
    bitmap
        .to_image()
        .save(path)
        .with_context(|| format!("failed to save image to {:?}", path))
}

/// Save an SVG document's already-assembled markup to `path`.
pub fn save_svg(markup: &str, path: &Path) -> Result<()> {
    std::fs::write(path, markup).with_context(|| format!("failed to write SVG to {:?}", path))
}

//! Screenshot export of a presented frame.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

use crate::colors::PackedColor;
use crate::error::Result;

/// Expands an RGB555 frame into an 8-bit-per-channel image.
pub fn to_image(pixels: &[PackedColor], width: u32, height: u32) -> RgbImage {
    debug_assert_eq!(pixels.len(), (width * height) as usize);
    RgbImage::from_fn(width, height, |x, y| {
        Rgb(pixels[(y * width + x) as usize].to_rgb8())
    })
}

/// File a capture of frame number `frame` is written to.
pub fn capture_path(dir: &Path, frame: u64) -> PathBuf {
    dir.join(format!("sankaku-{frame:06}.png"))
}

pub fn save_png(pixels: &[PackedColor], width: u32, height: u32, path: &Path) -> Result<()> {
    to_image(pixels, width, height).save(path)?;
    Ok(())
}

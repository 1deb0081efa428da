use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::imageops::FilterType;
use log::debug;

use crate::error::{ConvertError, Result};
use crate::mem;

/// What a finished conversion produced, for operator reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub width: u32,
    pub height: u32,
    pub pixels: u64,
    /// Payload size in bytes: one 24-bit word per pixel.
    pub bytes: u64,
}

/// Decodes `input`, resizes it to exactly `width`x`height` (Lanczos3, aspect
/// ratio is not preserved), converts to 24-bit RGB and writes a .mem dump to
/// `output`. A failed run may leave a truncated output file behind.
pub fn convert(input: &Path, output: &Path, width: u32, height: u32) -> Result<Summary> {
    if width == 0 || height == 0 {
        return Err(ConvertError::BadDimensions { width, height });
    }

    let decoded = image::open(input)?;
    debug!(
        "decoded {} ({}x{})",
        input.display(),
        decoded.width(),
        decoded.height()
    );

    let resized = decoded
        .resize_exact(width, height, FilterType::Lanczos3)
        .into_rgb8();

    let mut out = BufWriter::new(File::create(output)?);
    mem::write_mem(&mut out, &input.display().to_string(), &resized)?;
    out.flush()?;

    let pixels = u64::from(width) * u64::from(height);
    Ok(Summary {
        width,
        height,
        pixels,
        bytes: pixels * 3,
    })
}

use std::io::Write;

use image::{Rgb, RgbImage};

/// Packs one pixel into a 24-bit word: `0xRRGGBB`.
pub fn pixel_word(Rgb([r, g, b]): Rgb<u8>) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Writes a .mem dump: three `//` comment lines followed by one 6-digit
/// uppercase hex word per pixel, row-major starting at (0, 0).
pub fn write_mem(out: &mut impl Write, source: &str, image: &RgbImage) -> std::io::Result<()> {
    let (width, height) = image.dimensions();
    writeln!(out, "// Memory initialization file for {width}x{height} image")?;
    writeln!(out, "// Generated from: {source}")?;
    writeln!(out, "// Format: 24-bit RGB (8R, 8G, 8B)")?;
    for y in 0..height {
        for x in 0..width {
            writeln!(out, "{:06X}", pixel_word(*image.get_pixel(x, y)))?;
        }
    }
    Ok(())
}

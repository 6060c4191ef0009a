use std::io::{self, Write};

use crate::{image::{Image, RGB}, interval::Interval, types::Float};

/// Plain-text P3: header, then one `R G B` line per pixel, rows
/// top-to-bottom. Channels are clamped, gamma-2 corrected, scaled by 256
/// and truncated.
pub fn write_ppm(image: &Image, mut out: impl Write) -> io::Result<()> {
    write!(out, "P3\n{} {}\n255\n", image.width, image.height)?;
    for pixel in &image.pixels {
        let [r, g, b] = to_bytes(pixel);
        writeln!(out, "{} {} {}", r, g, b)?;
    }
    Ok(())
}

fn to_bytes(pixel: &RGB) -> [u8; 3] {
    [channel_to_byte(pixel.x), channel_to_byte(pixel.y), channel_to_byte(pixel.z)]
}

fn channel_to_byte(value: Float) -> u8 {
    let intensity = Interval::new(0.0, 0.999);
    (256.0 * linear_to_gamma(intensity.clamp(value))) as u8
}

fn linear_to_gamma(value: Float) -> Float {
    if value > 0.0 { value.sqrt() } else { 0.0 }
}

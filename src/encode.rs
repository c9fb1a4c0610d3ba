//! Canvas serialization to PNG
//!
//! PNG is lossless, so a decoded image reproduces the canvas pixels exactly.
//! Encoding failures are a separate fault domain from rasterization: "could
//! not serialize the finished pixels" never masquerades as a render error.

use crate::canvas::Canvas;
use crate::error::{Error, Result};

/// Serialize the finished canvas as an RGBA8 PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| Error::Encode(format!("writing PNG header: {}", e)))?;

    let mut data = Vec::with_capacity(canvas.pixels().len() * 4);
    for p in canvas.pixels() {
        data.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    writer
        .write_image_data(&data)
        .map_err(|e| Error::Encode(format!("writing PNG data: {}", e)))?;
    writer
        .finish()
        .map_err(|e| Error::Encode(format!("finishing PNG stream: {}", e)))?;

    Ok(out)
}

//! PNG encoding of finished tiles.
//!
//! Minimal RGBA encoder (color type 6) for dumping a rendered tile to
//! disk while debugging or feeding an external tile store. Not part of
//! the render path.

use std::io::Write;

use crate::error::{RenderError, RenderResult};

/// Encode a tile's packed ARGB pixels as an RGBA PNG.
pub fn encode_png(pixels: &[u32], width: usize, height: usize) -> RenderResult<Vec<u8>> {
    if pixels.len() < width * height {
        return Err(RenderError::Png(format!(
            "{} pixels for a {width}x{height} image",
            pixels.len()
        )));
    }

    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    // IHDR chunk
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(6); // color type 6 = RGBA
    ihdr.push(0); // compression method
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr);

    // IDAT chunk: filter byte 0 per scanline, ARGB unpacked to RGBA
    let mut scanlines = Vec::with_capacity(height * (1 + width * 4));
    for row in pixels[..width * height].chunks(width) {
        scanlines.push(0); // filter type: none
        for &pixel in row {
            scanlines.push((pixel >> 16) as u8);
            scanlines.push((pixel >> 8) as u8);
            scanlines.push(pixel as u8);
            scanlines.push((pixel >> 24) as u8);
        }
    }
    let mut encoder =
        flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&scanlines)
        .map_err(|e| RenderError::Png(e.to_string()))?;
    let idat = encoder
        .finish()
        .map_err(|e| RenderError::Png(e.to_string()))?;
    write_chunk(&mut png, b"IDAT", &idat);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write one PNG chunk: length, type, data, CRC over type + data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

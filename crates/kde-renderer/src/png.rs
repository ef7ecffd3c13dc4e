//! PNG encoding for rendered density maps (RGBA, color type 6).

use kde_common::{KdeError, KdeResult};
use std::io::Write;
use tracing::trace;

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Create a PNG image from interleaved RGBA pixel data.
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel, top row first)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn create_png(pixels: &[u8], width: usize, height: usize) -> KdeResult<Vec<u8>> {
    if pixels.len() != width * height * 4 {
        return Err(KdeError::Encoding(format!(
            "expected {} bytes for a {}x{} RGBA image, got {}",
            width * height * 4,
            width,
            height,
            pixels.len()
        )));
    }

    let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(KdeError::Encoding(format!(
                "image of {}x{} exceeds PNG dimension limits",
                width, height
            )))
        }
    };

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&w.to_be_bytes());
    ihdr.extend_from_slice(&h.to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(6); // color type (RGBA)
    ihdr.push(0); // compression method
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr);

    let idat = deflate_scanlines(pixels, width * 4, height)
        .map_err(|e| KdeError::Encoding(format!("IDAT compression failed: {}", e)))?;
    write_chunk(&mut png, b"IDAT", &idat);

    write_chunk(&mut png, b"IEND", &[]);

    trace!(width, height, bytes = png.len(), "Encoded PNG");
    Ok(png)
}

/// Write a PNG chunk: length, type, data, CRC over type + data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Prefix each scanline with filter type 0 and zlib-compress the result.
fn deflate_scanlines(data: &[u8], stride: usize, height: usize) -> std::io::Result<Vec<u8>> {
    let mut uncompressed = Vec::with_capacity(height * (1 + stride));
    for row in data.chunks_exact(stride.max(1)).take(height) {
        uncompressed.push(0);
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_layout() {
        let mut png = Vec::new();
        write_chunk(&mut png, b"IEND", &[]);
        assert_eq!(&png[0..4], &[0, 0, 0, 0]);
        assert_eq!(&png[4..8], b"IEND");
        // Well-known CRC of an empty IEND chunk
        assert_eq!(&png[8..12], &[0xAE, 0x42, 0x60, 0x82]);
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let err = create_png(&[0u8; 7], 1, 2).unwrap_err();
        assert!(matches!(err, KdeError::Encoding(_)));
    }
}

//! Tests for PNG encoding of rendered buffers.

use kde_renderer::png::{create_png, PNG_SIGNATURE};
use kde_renderer::{create_rgba_buffer, ColorScale, GradientType};

/// Read a big-endian u32 at `offset`.
fn be_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

// ============================================================================
// Basic PNG creation tests
// ============================================================================

#[test]
fn test_create_png_header() {
    let pixels = [
        255, 0, 0, 255, // red
        0, 255, 0, 255, // green
        0, 0, 255, 255, // blue
        0, 0, 0, 0, // transparent
    ];

    let png = create_png(&pixels, 2, 2).unwrap();
    assert_eq!(&png[0..8], &PNG_SIGNATURE);

    // IHDR follows the signature: length, type, width, height, depth, color type
    assert_eq!(be_u32(&png, 8), 13);
    assert_eq!(&png[12..16], b"IHDR");
    assert_eq!(be_u32(&png, 16), 2);
    assert_eq!(be_u32(&png, 20), 2);
    assert_eq!(png[24], 8);
    assert_eq!(png[25], 6);
}

#[test]
fn test_create_png_ends_with_iend() {
    let png = create_png(&[0u8; 4 * 6], 3, 2).unwrap();
    let tail = &png[png.len() - 12..];
    assert_eq!(&tail[4..8], b"IEND");
}

#[test]
fn test_non_square_dimensions() {
    let png = create_png(&vec![128u8; 5 * 3 * 4], 5, 3).unwrap();
    assert_eq!(be_u32(&png, 16), 5);
    assert_eq!(be_u32(&png, 20), 3);
}

#[test]
fn test_color_buffer_to_png() {
    let values: Vec<f64> = (0..64).map(|i| i as f64).collect();
    let buffer = create_rgba_buffer(
        &values,
        8,
        8,
        ColorScale::from_values(&values),
        GradientType::Classic,
        0.8,
    )
    .unwrap();

    let png = buffer.to_png().unwrap();
    assert_eq!(&png[0..8], &PNG_SIGNATURE);
    assert_eq!(be_u32(&png, 16), 8);
    assert_eq!(be_u32(&png, 20), 8);
}

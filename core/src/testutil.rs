//! Generated fixtures shared by the codec, gather, and convert tests.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// 8x8 gradient used as source material for conversions under test.
pub fn sample_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(8, 8, |x, y| {
        Rgb([(x * 32) as u8, (y * 32) as u8, 128])
    }))
}

/// The sample image encoded in the given format.
pub fn encoded(format: ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    sample_image()
        .write_to(&mut Cursor::new(&mut buf), format)
        .unwrap();
    buf
}

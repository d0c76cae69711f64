use image::codecs::gif::GifEncoder;
use image::{DynamicImage, ExtendedColorType, ImageFormat, Rgba, RgbaImage};

use crate::codec::Codec;
use crate::error::ConvertError;

/// GIF codec. `num_colors` caps the palette size (1-256).
#[derive(Debug, Clone)]
pub struct Gif {
    pub num_colors: u16,
}

impl Default for Gif {
    fn default() -> Self {
        Self { num_colors: 256 }
    }
}

impl Codec for Gif {
    fn decode(&self, data: &[u8]) -> Result<DynamicImage, ConvertError> {
        image::load_from_memory_with_format(data, ImageFormat::Gif)
            .map_err(|e| ConvertError::Decode(e.to_string()))
    }

    fn encode(&self, img: &DynamicImage) -> Result<Vec<u8>, ConvertError> {
        let rgba = if self.num_colors >= 256 {
            img.to_rgba8()
        } else if self.num_colors == 1 {
            solid_fill(img)
        } else {
            quantize(img, u32::from(self.num_colors))?
        };

        let (width, height) = rgba.dimensions();
        let mut output = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut output);
            encoder
                .encode(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
                .map_err(|e| ConvertError::Encode(e.to_string()))?;
        }
        Ok(output)
    }

    fn extname(&self) -> &'static str {
        "gif"
    }

    fn magic_bytes(&self) -> &'static [&'static [u8]] {
        &[b"GIF87a", b"GIF89a"]
    }

    fn processable_extnames(&self) -> &'static [&'static str] {
        &["gif"]
    }
}

/// Reduce the image to at most `max_colors` palette entries, remapping
/// every pixel onto the reduced palette.
fn quantize(img: &DynamicImage, max_colors: u32) -> Result<RgbaImage, ConvertError> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let pixels: Vec<imagequant::RGBA> = rgba
        .pixels()
        .map(|p| imagequant::RGBA::new(p[0], p[1], p[2], p[3]))
        .collect();

    let mut attr = imagequant::new();
    attr.set_max_colors(max_colors)
        .map_err(|e| ConvertError::Quantize(e.to_string()))?;

    let mut image = attr
        .new_image_borrowed(&pixels, width as usize, height as usize, 0.0)
        .map_err(|e| ConvertError::Quantize(e.to_string()))?;

    let mut quantization = attr
        .quantize(&mut image)
        .map_err(|e| ConvertError::Quantize(e.to_string()))?;

    let (palette, indices) = quantization
        .remapped(&mut image)
        .map_err(|e| ConvertError::Quantize(e.to_string()))?;

    let mut raw = Vec::with_capacity(indices.len() * 4);
    for index in indices {
        let color = palette[index as usize];
        raw.extend_from_slice(&[color.r, color.g, color.b, color.a]);
    }

    RgbaImage::from_raw(width, height, raw)
        .ok_or_else(|| ConvertError::Quantize("remapped buffer size mismatch".into()))
}

/// libimagequant needs at least two palette entries, so a one-color GIF
/// is the image flattened to its average color.
fn solid_fill(img: &DynamicImage) -> RgbaImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let count = u64::from(width) * u64::from(height);
    if count == 0 {
        return rgba;
    }

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for p in rgba.pixels() {
        r += u64::from(p[0]);
        g += u64::from(p[1]);
        b += u64::from(p[2]);
    }

    RgbaImage::from_pixel(
        width,
        height,
        Rgba([(r / count) as u8, (g / count) as u8, (b / count) as u8, 255]),
    )
}

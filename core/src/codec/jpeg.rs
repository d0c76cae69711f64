use image::{DynamicImage, ImageFormat};

use crate::codec::Codec;
use crate::error::ConvertError;

/// JPEG codec. `quality` is handed straight to the encoder (1-100).
#[derive(Debug, Clone)]
pub struct Jpeg {
    pub quality: u8,
}

impl Default for Jpeg {
    fn default() -> Self {
        Self { quality: 100 }
    }
}

impl Codec for Jpeg {
    fn decode(&self, data: &[u8]) -> Result<DynamicImage, ConvertError> {
        image::load_from_memory_with_format(data, ImageFormat::Jpeg)
            .map_err(|e| ConvertError::Decode(e.to_string()))
    }

    fn encode(&self, img: &DynamicImage) -> Result<Vec<u8>, ConvertError> {
        let mut output = Vec::new();

        // JPEG has no alpha channel
        let rgb = img.to_rgb8();

        let mut encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut output, self.quality);
        encoder
            .encode(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| ConvertError::Encode(e.to_string()))?;

        Ok(output)
    }

    fn extname(&self) -> &'static str {
        "jpg"
    }

    fn magic_bytes(&self) -> &'static [&'static [u8]] {
        &[&[0xFF, 0xD8, 0xFF]]
    }

    fn processable_extnames(&self) -> &'static [&'static str] {
        &["jpg", "jpeg"]
    }
}

use std::fmt;
use std::str::FromStr;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageFormat};

use crate::codec::Codec;
use crate::error::ConvertError;

/// PNG deflate level, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    #[default]
    Default,
    No,
    BestSpeed,
    BestCompression,
}

impl fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::No => write!(f, "no"),
            Self::BestSpeed => write!(f, "best-speed"),
            Self::BestCompression => write!(f, "best-compression"),
        }
    }
}

impl FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "no" => Ok(Self::No),
            "best-speed" => Ok(Self::BestSpeed),
            "best-compression" => Ok(Self::BestCompression),
            _ => Err(format!(
                "unknown compression level: {s} (expected one of: default, no, best-speed, best-compression)"
            )),
        }
    }
}

impl CompressionLevel {
    /// The `image` PNG encoder has no stored-block mode, so `no` maps to
    /// the fastest level it offers.
    fn to_compression_type(self) -> CompressionType {
        match self {
            Self::Default => CompressionType::Default,
            Self::No | Self::BestSpeed => CompressionType::Fast,
            Self::BestCompression => CompressionType::Best,
        }
    }
}

/// PNG codec.
#[derive(Debug, Clone, Default)]
pub struct Png {
    pub compression: CompressionLevel,
}

impl Codec for Png {
    fn decode(&self, data: &[u8]) -> Result<DynamicImage, ConvertError> {
        image::load_from_memory_with_format(data, ImageFormat::Png)
            .map_err(|e| ConvertError::Decode(e.to_string()))
    }

    fn encode(&self, img: &DynamicImage) -> Result<Vec<u8>, ConvertError> {
        let mut output = Vec::new();
        let encoder = PngEncoder::new_with_quality(
            &mut output,
            self.compression.to_compression_type(),
            FilterType::Adaptive,
        );
        img.write_with_encoder(encoder)
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
        Ok(output)
    }

    fn extname(&self) -> &'static str {
        "png"
    }

    fn magic_bytes(&self) -> &'static [&'static [u8]] {
        &[&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]]
    }

    fn processable_extnames(&self) -> &'static [&'static str] {
        &["png"]
    }
}

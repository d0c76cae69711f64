//! The three format codecs and the capability set they share.

use std::fs::File;
use std::path::Path;

use image::DynamicImage;

use crate::error::ConvertError;
use crate::sniff;

pub mod gif;
pub mod jpeg;
pub mod png;

pub use self::gif::Gif;
pub use self::jpeg::Jpeg;
pub use self::png::{CompressionLevel, Png};

/// One image format driven through decode, encode, and detection.
///
/// Each implementation carries its own encoder configuration; a run
/// constructs one codec for the source format and one for the target
/// format, and neither is mutated afterwards.
pub trait Codec {
    /// Decode `data` strictly as this codec's format.
    fn decode(&self, data: &[u8]) -> Result<DynamicImage, ConvertError>;

    /// Encode `img` using this codec's configured parameters.
    fn encode(&self, img: &DynamicImage) -> Result<Vec<u8>, ConvertError>;

    /// Canonical extension emitted for converted files.
    fn extname(&self) -> &'static str;

    /// Magic byte signatures; contents starting with any of them are this
    /// format.
    fn magic_bytes(&self) -> &'static [&'static [u8]];

    /// Extensions recognized as belonging to this format.
    fn processable_extnames(&self) -> &'static [&'static str];

    /// Returns whether the file contents start with one of this format's
    /// signatures. The file position is restored to the start on success.
    fn is_decodable(&self, fp: &mut File) -> Result<bool, ConvertError> {
        sniff::matches_any(fp, self.magic_bytes())
    }

    /// Case-sensitive extension check. Inclusion in a conversion run is
    /// governed by `is_decodable`; this exists for callers that only have
    /// a name.
    fn has_processable_extname(&self, path: &Path) -> bool {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.processable_extnames().contains(&ext),
            None => false,
        }
    }
}

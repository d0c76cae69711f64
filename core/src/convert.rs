use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::Codec;
use crate::error::ConvertError;

/// Re-encodes one file from the source format into the target format,
/// writing the result next to the original.
pub struct Converter<'a> {
    pub decoder: &'a dyn Codec,
    pub encoder: &'a dyn Codec,
}

impl Converter<'_> {
    /// Convert `path`, writing the result in the same directory with the
    /// target codec's extension. Refuses to overwrite an existing
    /// destination unless `force` is set. The source file is never
    /// modified.
    pub fn convert(&self, path: &Path, force: bool) -> Result<PathBuf, ConvertError> {
        let data = fs::read(path).map_err(|e| ConvertError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let img = self.decoder.decode(&data)?;

        let dest = path.with_extension(self.encoder.extname());
        if !force && dest.exists() {
            return Err(ConvertError::AlreadyExists(dest));
        }

        log::debug!(
            "converting {} ({} bytes) to {}",
            path.display(),
            data.len(),
            self.encoder.extname()
        );

        let encoded = self.encoder.encode(&img)?;
        fs::write(&dest, &encoded).map_err(|e| ConvertError::WriteFile {
            path: dest.clone(),
            source: e,
        })?;

        Ok(dest)
    }
}

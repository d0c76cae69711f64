use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("seek failed: {0}")]
    Seek(#[source] std::io::Error),

    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("unexpected end of data: {0}")]
    UnexpectedEof(#[source] std::io::Error),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("encoding failed: {0}")]
    Encode(String),

    #[error("quantization failed: {0}")]
    Quantize(String),

    #[error("File already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

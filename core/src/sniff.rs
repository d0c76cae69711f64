//! Content sniffing against magic byte signatures.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::error::ConvertError;

/// Returns whether the stream contents start with `signature`.
///
/// The stream is rewound to the start before reading and again after the
/// comparison, so on success the caller can re-read it from the beginning.
/// A stream shorter than the signature is an error, never a match. On
/// error the stream position is unspecified.
pub fn starts_contents_with<R: Read + Seek>(
    rs: &mut R,
    signature: &[u8],
) -> Result<bool, ConvertError> {
    let mut buf = vec![0u8; signature.len()];

    rs.seek(SeekFrom::Start(0)).map_err(ConvertError::Seek)?;

    rs.read_exact(&mut buf).map_err(|e| {
        if e.kind() == ErrorKind::UnexpectedEof {
            ConvertError::UnexpectedEof(e)
        } else {
            ConvertError::Read(e)
        }
    })?;

    rs.seek(SeekFrom::Start(0)).map_err(ConvertError::Seek)?;

    Ok(buf == signature)
}

/// Returns whether the stream contents start with any of `signatures`,
/// trying them in order.
pub fn matches_any<R: Read + Seek>(
    rs: &mut R,
    signatures: &[&[u8]],
) -> Result<bool, ConvertError> {
    for signature in signatures {
        if starts_contents_with(rs, signature)? {
            return Ok(true);
        }
    }
    Ok(false)
}

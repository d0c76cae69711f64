//! Batch image conversion between JPEG, PNG, and GIF.
//!
//! Convertible files are detected by their magic bytes rather than their
//! extension, gathered from a directory tree, then decoded with a source
//! codec and re-encoded with a target codec next to the original file.

pub mod codec;
pub mod convert;
pub mod error;
pub mod gather;
pub mod sniff;

#[cfg(test)]
pub(crate) mod testutil;

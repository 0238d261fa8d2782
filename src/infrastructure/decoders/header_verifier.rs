//! Structural verifier backed by `imagesize`
//!
//! Probes the header of any supported format with `imagesize`, then walks
//! the container framing of PNG and JPEG files, the two formats where
//! truncation is cheap to prove without decoding.

use super::jpeg_structure::{self, JPEG_SOI};
use super::png_structure::{self, PNG_SIGNATURE};
use crate::domain::repositories::{DecodeError, StructuralVerifier};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Stage A verifier
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderVerifier;

impl HeaderVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Verifies an in-memory image
    pub fn verify_bytes(&self, data: &[u8]) -> Result<(), DecodeError> {
        imagesize::blob_size(data).map_err(header_error)?;

        if data.starts_with(&PNG_SIGNATURE) {
            png_structure::walk_chunks(data)?;
        } else if data.starts_with(&JPEG_SOI) {
            jpeg_structure::walk_segments(data)?;
        }
        Ok(())
    }
}

impl StructuralVerifier for HeaderVerifier {
    fn name(&self) -> &str {
        "imagesize"
    }

    fn verify(&self, path: &Path) -> Result<(), DecodeError> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Err(DecodeError::Malformed("file is empty".into()));
        }

        // SAFETY: the mapping is read-only and dropped before returning.
        let map = unsafe { Mmap::map(&file) }?;
        self.verify_bytes(&map)
    }
}

fn header_error(err: imagesize::ImageError) -> DecodeError {
    match err {
        imagesize::ImageError::IoError(e) => DecodeError::Io(e),
        imagesize::ImageError::NotSupported => {
            DecodeError::Unsupported("no known image signature".into())
        }
        other => DecodeError::Malformed(other.to_string()),
    }
}

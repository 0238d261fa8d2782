//! Image decoder traits
//!
//! The two capabilities the integrity pipeline needs from codec libraries.
//! Implementations live in `infrastructure::decoders`; tests plug in fakes.

use crate::domain::entities::PixelBuffer;
use std::path::Path;
use thiserror::Error;

/// Errors a decoder may report for a single file
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognized image format: {0}")]
    Unsupported(String),

    #[error("malformed image: {0}")]
    Malformed(String),

    #[error("image exceeds decode limit: {0}")]
    LimitExceeded(String),
}

/// Opens a file and checks its structure without producing pixels.
///
/// Must fail on truncated input, on unknown formats and on any framing
/// error the underlying library can detect.
pub trait StructuralVerifier: Send + Sync {
    /// Library name, used in the `Corrupted Image (<name>)` issue
    fn name(&self) -> &str;

    fn verify(&self, path: &Path) -> Result<(), DecodeError>;
}

/// Decodes a file into an in-memory pixel buffer.
///
/// `Ok(None)` means the library accepted the call but produced no data.
pub trait PixelDecoder: Send + Sync {
    /// Library name, used in the `Corrupted Image (<name>)` issue
    fn name(&self) -> &str;

    fn decode(&self, path: &Path) -> Result<Option<PixelBuffer>, DecodeError>;
}

//! Repository traits (interfaces)
//!
//! Contracts for the external codec libraries the pipeline delegates to.

mod image_decoder;

pub use image_decoder::{DecodeError, PixelDecoder, StructuralVerifier};

//! Codec adapters for the decoder traits

mod header_verifier;
pub mod jpeg_structure;
pub mod png_structure;
mod raster_decoder;

pub use header_verifier::HeaderVerifier;
pub use raster_decoder::{RasterDecoder, into_pixel_buffer};

//! Pixel decoder backed by the `image` crate

use crate::domain::entities::{PixelBuffer, Samples};
use crate::domain::repositories::{DecodeError, PixelDecoder};
use image::{DynamicImage, ImageReader, Limits};
use std::path::Path;

/// Stage B decoder.
///
/// The format is sniffed from content, falling back to the file extension.
/// Decoding runs under `image`'s default allocation limits unless others are
/// supplied; a file over the limit is reported with its own wording.
#[derive(Debug, Default, Clone)]
pub struct RasterDecoder {
    limits: Limits,
}

impl RasterDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self { limits }
    }
}

impl PixelDecoder for RasterDecoder {
    fn name(&self) -> &str {
        "image"
    }

    fn decode(&self, path: &Path) -> Result<Option<PixelBuffer>, DecodeError> {
        let mut reader = ImageReader::open(path)?.with_guessed_format()?;
        reader.limits(self.limits.clone());
        let image = reader.decode().map_err(decode_error)?;
        Ok(Some(into_pixel_buffer(image)))
    }
}

/// Keeps the decoder's channel layout and sample depth
pub fn into_pixel_buffer(image: DynamicImage) -> PixelBuffer {
    let (width, height) = (image.width(), image.height());
    let channels = image.color().channel_count();

    let samples = match image {
        DynamicImage::ImageLuma8(b) => Samples::U8(b.into_raw()),
        DynamicImage::ImageLumaA8(b) => Samples::U8(b.into_raw()),
        DynamicImage::ImageRgb8(b) => Samples::U8(b.into_raw()),
        DynamicImage::ImageRgba8(b) => Samples::U8(b.into_raw()),
        DynamicImage::ImageLuma16(b) => Samples::U16(b.into_raw()),
        DynamicImage::ImageLumaA16(b) => Samples::U16(b.into_raw()),
        DynamicImage::ImageRgb16(b) => Samples::U16(b.into_raw()),
        DynamicImage::ImageRgba16(b) => Samples::U16(b.into_raw()),
        DynamicImage::ImageRgb32F(b) => Samples::F32(b.into_raw()),
        DynamicImage::ImageRgba32F(b) => Samples::F32(b.into_raw()),
        other => {
            let rgba = other.into_rgba8().into_raw();
            return PixelBuffer::new(width, height, 4, Samples::U8(rgba));
        }
    };

    PixelBuffer::new(width, height, channels, samples)
}

fn decode_error(err: image::ImageError) -> DecodeError {
    match err {
        image::ImageError::IoError(e) => DecodeError::Io(e),
        image::ImageError::Unsupported(e) => DecodeError::Unsupported(e.to_string()),
        image::ImageError::Limits(e) => DecodeError::LimitExceeded(e.to_string()),
        other => DecodeError::Malformed(other.to_string()),
    }
}

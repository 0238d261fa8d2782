//! Decoded raster entity
//!
//! The in-memory pixel buffer a [`PixelDecoder`](crate::domain::repositories::PixelDecoder)
//! hands to the degenerate-channel stage. Samples are interleaved and kept at
//! their native depth so channel comparisons are exact.

/// Interleaved samples at the decoder's native depth
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::U8(s) => s.len(),
            Samples::U16(s) => s.len(),
            Samples::F32(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A decoded image: `height` rows of `width` pixels with `channels` samples each
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    samples: Samples,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, channels: u8, samples: Samples) -> Self {
        Self {
            width,
            height,
            channels,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Total number of samples held
    pub fn size(&self) -> usize {
        self.samples.len()
    }

    /// True when the buffer holds no pixels or either axis is zero
    pub fn has_zero_area(&self) -> bool {
        self.size() == 0 || self.width == 0 || self.height == 0
    }

    /// Shape as `(rows, cols, channels)`
    pub fn shape(&self) -> String {
        format!("({}, {}, {})", self.height, self.width, self.channels)
    }

    /// Returns true for an RGB or RGBA buffer whose red, green and blue
    /// planes agree at every pixel. Alpha is ignored.
    pub fn has_identical_color_planes(&self) -> bool {
        let stride = match self.channels {
            3 | 4 => usize::from(self.channels),
            _ => return false,
        };
        if self.samples.is_empty() {
            return false;
        }

        match &self.samples {
            Samples::U8(s) => planes_identical(s, stride),
            Samples::U16(s) => planes_identical(s, stride),
            Samples::F32(s) => planes_identical(s, stride),
        }
    }
}

fn planes_identical<T: PartialEq>(samples: &[T], stride: usize) -> bool {
    samples
        .chunks_exact(stride)
        .all(|px| px[0] == px[1] && px[0] == px[2])
}

//! JPEG segment walk
//!
//! Follows marker segments by their declared lengths and skips entropy-coded
//! scan data, so embedded EXIF thumbnails do not confuse the walk.

use crate::domain::repositories::DecodeError;
use memchr::memchr;

pub const JPEG_SOI: [u8; 3] = [0xFF, 0xD8, 0xFF];

const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;
const SOS: u8 = 0xDA;
const TEM: u8 = 0x01;

#[inline]
const fn is_sof_marker(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC)
}

#[inline]
const fn is_restart_marker(marker: u8) -> bool {
    marker >= 0xD0 && marker <= 0xD7
}

/// Counts of what the walk saw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SegmentSummary {
    pub segments: usize,
    pub scans: usize,
}

/// Walks from SOI to EOI.
///
/// Fails when a segment or scan runs past the end of the data, when a frame
/// header or scan is missing, or when bytes between segments are not markers.
pub fn walk_segments(data: &[u8]) -> Result<SegmentSummary, DecodeError> {
    if data.len() < 4 || data[0] != 0xFF || data[1] != SOI {
        return Err(DecodeError::Malformed("missing JPEG SOI marker".into()));
    }

    let mut summary = SegmentSummary::default();
    let mut saw_sof = false;
    let mut pos = 2usize;

    loop {
        if pos >= data.len() {
            return Err(truncated(pos));
        }
        if data[pos] != 0xFF {
            return Err(DecodeError::Malformed(format!(
                "expected marker at offset {:#x}, found 0x{:02X}",
                pos, data[pos]
            )));
        }

        while pos + 1 < data.len() && data[pos + 1] == 0xFF {
            pos += 1;
        }
        if pos + 1 >= data.len() {
            return Err(truncated(pos));
        }

        let marker = data[pos + 1];
        match marker {
            EOI => {
                if !saw_sof {
                    return Err(DecodeError::Malformed("no SOF marker before EOI".into()));
                }
                if summary.scans == 0 {
                    return Err(DecodeError::Malformed("no SOS marker before EOI".into()));
                }
                return Ok(summary);
            }
            SOI => {
                return Err(DecodeError::Malformed(format!(
                    "unexpected SOI marker at offset {:#x}",
                    pos
                )));
            }
            0x00 => {
                return Err(DecodeError::Malformed(format!(
                    "stuffed byte outside scan data at offset {:#x}",
                    pos
                )));
            }
            m if m == TEM || is_restart_marker(m) => {
                pos += 2;
                continue;
            }
            _ => {}
        }

        if pos + 4 > data.len() {
            return Err(truncated(pos));
        }
        let length = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        if length < 2 {
            return Err(DecodeError::Malformed(format!(
                "segment 0x{:02X} at offset {:#x} has invalid length {}",
                marker, pos, length
            )));
        }
        let segment_end = pos + 2 + length;
        if segment_end > data.len() {
            return Err(DecodeError::Malformed(format!(
                "segment 0x{:02X} at offset {:#x} extends past end of file",
                marker, pos
            )));
        }
        summary.segments += 1;

        if is_sof_marker(marker) {
            saw_sof = true;
        }

        if marker == SOS {
            if !saw_sof {
                return Err(DecodeError::Malformed("SOS marker before SOF".into()));
            }
            summary.scans += 1;
            pos = skip_entropy_data(data, segment_end)?;
            continue;
        }

        pos = segment_end;
    }
}

/// Returns the offset of the first real marker after entropy-coded data
fn skip_entropy_data(data: &[u8], mut pos: usize) -> Result<usize, DecodeError> {
    loop {
        let Some(rel) = memchr(0xFF, &data[pos..]) else {
            return Err(DecodeError::Malformed(
                "scan data runs past end of file (missing EOI)".into(),
            ));
        };
        pos += rel;

        if pos + 1 >= data.len() {
            return Err(truncated(pos));
        }

        let next = data[pos + 1];
        if next == 0x00 || is_restart_marker(next) {
            pos += 2;
        } else if next == 0xFF {
            pos += 1;
        } else {
            return Ok(pos);
        }
    }
}

fn truncated(pos: usize) -> DecodeError {
    DecodeError::Malformed(format!(
        "truncated JPEG: end of file at offset {:#x} before EOI",
        pos
    ))
}

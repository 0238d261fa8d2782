//! PNG chunk walk
//!
//! Reads chunk framing and CRCs end to end without inflating image data.

use crate::domain::repositories::DecodeError;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

const IHDR_LENGTH: u32 = 13;
const MAX_CHUNK_LENGTH: u32 = 0x7FFF_FFFF;

/// Walks every chunk up to `IEND`, returning how many chunks were read.
///
/// Fails on a bad signature, a chunk running past the end of the data, a CRC
/// mismatch, a misplaced `IHDR`, or a missing `IHDR`/`IDAT`/`IEND`.
pub fn walk_chunks(data: &[u8]) -> Result<usize, DecodeError> {
    if data.len() < PNG_SIGNATURE.len() || data[..8] != PNG_SIGNATURE {
        return Err(DecodeError::Malformed("invalid PNG signature".into()));
    }

    let mut pos = PNG_SIGNATURE.len();
    let mut chunks = 0usize;
    let mut saw_ihdr = false;
    let mut saw_idat = false;

    loop {
        if pos + 12 > data.len() {
            return Err(DecodeError::Malformed(format!(
                "truncated PNG: no IEND chunk before end of file at offset {:#x}",
                pos
            )));
        }

        let length = u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]);
        let chunk_type = &data[pos + 4..pos + 8];
        let name = String::from_utf8_lossy(chunk_type);

        if !chunk_type.iter().all(u8::is_ascii_alphabetic) {
            return Err(DecodeError::Malformed(format!(
                "invalid chunk type at offset {:#x}",
                pos
            )));
        }
        if length > MAX_CHUNK_LENGTH {
            return Err(DecodeError::Malformed(format!(
                "{} chunk length {} out of range",
                name, length
            )));
        }

        let crc_start = pos + 8 + length as usize;
        let chunk_end = crc_start + 4;
        if chunk_end > data.len() {
            return Err(DecodeError::Malformed(format!(
                "{} chunk at offset {:#x} extends past end of file",
                name, pos
            )));
        }

        let stored = u32::from_be_bytes([
            data[crc_start],
            data[crc_start + 1],
            data[crc_start + 2],
            data[crc_start + 3],
        ]);
        let computed = crc32fast::hash(&data[pos + 4..crc_start]);
        if stored != computed {
            return Err(DecodeError::Malformed(format!(
                "CRC mismatch in {} chunk at offset {:#x} (stored {:08x}, computed {:08x})",
                name, pos, stored, computed
            )));
        }

        chunks += 1;

        match chunk_type {
            b"IHDR" => {
                if pos != PNG_SIGNATURE.len() || saw_ihdr {
                    return Err(DecodeError::Malformed("IHDR must be the first chunk".into()));
                }
                if length != IHDR_LENGTH {
                    return Err(DecodeError::Malformed(format!(
                        "IHDR length {} != {}",
                        length, IHDR_LENGTH
                    )));
                }
                saw_ihdr = true;
            }
            b"IDAT" => {
                if !saw_ihdr {
                    return Err(DecodeError::Malformed("IDAT before IHDR".into()));
                }
                saw_idat = true;
            }
            b"IEND" => {
                if !saw_ihdr {
                    return Err(DecodeError::Malformed("IEND before IHDR".into()));
                }
                if !saw_idat {
                    return Err(DecodeError::Malformed("no IDAT chunk found".into()));
                }
                return Ok(chunks);
            }
            _ => {
                if !saw_ihdr {
                    return Err(DecodeError::Malformed("IHDR must be the first chunk".into()));
                }
            }
        }

        pos = chunk_end;
    }
}

//! Shared dataset builders for integration tests

#![allow(dead_code)]

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use vision_lint::{Finding, IssueType};

/// 100x100 image with real chrominance
pub fn colorful_image() -> RgbImage {
    RgbImage::from_fn(100, 100, |x, y| Rgb([(x * 2) as u8, (y * 2) as u8, 128]))
}

/// 3-channel image whose planes are identical
pub fn gray_rgb_image() -> RgbImage {
    RgbImage::from_fn(64, 64, |x, y| {
        let v = ((x + y) * 2) as u8;
        Rgb([v, v, v])
    })
}

pub fn write_valid(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    colorful_image().save(&path).unwrap();
    path
}

pub fn write_gray_rgb(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    gray_rgb_image().save(&path).unwrap();
    path
}

/// RGBA image with identical color planes and varying alpha
pub fn write_gray_rgba(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_fn(8, 8, |x, y| {
        let v = (x * 16 + y) as u8;
        Rgba([v, v, v, 255 - y as u8])
    })
    .save(&path)
    .unwrap();
    path
}

pub fn write_empty(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"").unwrap();
    path
}

pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// Writes a valid image then cuts it down to `len` bytes
pub fn write_truncated(dir: &Path, name: &str, len: u64) -> PathBuf {
    let path = write_valid(dir, name);
    let file = OpenOptions::new().write(true).open(&path).unwrap();
    file.set_len(len).unwrap();
    path
}

/// Issue types grouped by file name
pub fn issues_by_file(findings: &[Finding]) -> HashMap<String, Vec<IssueType>> {
    let mut map: HashMap<String, Vec<IssueType>> = HashMap::new();
    for finding in findings {
        let name = Path::new(finding.file_path())
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        map.entry(name).or_default().push(finding.issue_type().clone());
    }
    map
}

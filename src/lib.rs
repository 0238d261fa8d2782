//! VisionLint - integrity audit for computer-vision datasets
//!
//! Walks an image dataset and reports files that would silently poison a
//! training run: empty files, truncated or corrupted encodings, zero-area
//! rasters and grayscale images stored as RGB.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use std::path::Path;

pub use application::{ProgressCallback, ScanDatasetUseCase};
pub use application::dto::ScanOptions;
pub use domain::entities::{Finding, IssueType, Severity};
pub use domain::services::IntegrityChecker;

/// Audits a file or directory with default options
pub fn scan(path: impl AsRef<Path>) -> Vec<Finding> {
    ScanDatasetUseCase::with_default_decoders(ScanOptions::default()).execute(path.as_ref())
}

/// Audits with default options, reporting `(checked, total)` after each file
pub fn scan_with_progress(path: impl AsRef<Path>, progress: &ProgressCallback) -> Vec<Finding> {
    ScanDatasetUseCase::with_default_decoders(ScanOptions::default())
        .execute_with_progress(path.as_ref(), Some(progress))
}

/// Runs the per-file pipeline on one file, regardless of its extension
pub fn check_file(path: impl AsRef<Path>) -> Vec<Finding> {
    ScanDatasetUseCase::with_default_decoders(ScanOptions::default())
        .checker()
        .check_file(path.as_ref())
}

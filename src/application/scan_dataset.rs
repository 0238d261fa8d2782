//! Scan dataset use case
//!
//! Turns a user-supplied path into the full list of findings: resolves the
//! root, enumerates candidate images, fans the per-file checks out over a
//! rayon pool and injects the dataset-level findings.

use crate::application::dto::ScanOptions;
use crate::domain::entities::{Finding, IssueType};
use crate::domain::services::IntegrityChecker;
use crate::domain::services::file_filter::{
    describe_extensions, has_supported_extension, is_hidden_or_system,
};
use crate::infrastructure::decoders::{HeaderVerifier, RasterDecoder};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Progress callback, called with `(checked, total)` after every file
pub type ProgressCallback = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Scan dataset use case
pub struct ScanDatasetUseCase {
    checker: IntegrityChecker,
    options: ScanOptions,
}

impl ScanDatasetUseCase {
    pub fn new(checker: IntegrityChecker, options: ScanOptions) -> Self {
        Self { checker, options }
    }

    /// Creates the use case with the `imagesize` verifier and `image` decoder
    pub fn with_default_decoders(options: ScanOptions) -> Self {
        let checker = IntegrityChecker::new(
            Arc::new(HeaderVerifier::new()),
            Arc::new(RasterDecoder::new()),
        );
        Self::new(checker, options)
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    pub fn checker(&self) -> &IntegrityChecker {
        &self.checker
    }

    /// Audits `path`, a single image or a directory tree
    pub fn execute(&self, path: &Path) -> Vec<Finding> {
        self.execute_with_progress(path, None)
    }

    /// Audits `path`, reporting progress after each checked file
    pub fn execute_with_progress(
        &self,
        path: &Path,
        progress: Option<&ProgressCallback>,
    ) -> Vec<Finding> {
        if !path.exists() {
            error!("Path not found: {}", path.display());
            return vec![Finding::new(path, IssueType::PathError, "Path does not exist")];
        }

        if path.is_file() {
            return self.check_single_file(path, progress);
        }

        let start_time = Instant::now();
        let candidates = if path.is_dir() {
            self.collect_candidates(path)
        } else {
            warn!("{} is neither a file nor a directory", path.display());
            Vec::new()
        };

        if candidates.is_empty() {
            return vec![Finding::new(
                path,
                IssueType::NoImagesFound,
                format!(
                    "No image files found with extensions {}",
                    describe_extensions(&self.options.extensions)
                ),
            )];
        }

        info!("Checking {} images under {}", candidates.len(), path.display());
        let findings = self.check_all(&candidates, progress);
        info!(
            "Audit complete: {} findings across {} images in {:.2}s",
            findings.len(),
            candidates.len(),
            start_time.elapsed().as_secs_f64()
        );

        findings
    }

    fn check_single_file(
        &self,
        path: &Path,
        progress: Option<&ProgressCallback>,
    ) -> Vec<Finding> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if !has_supported_extension(&name, &self.options.extensions) {
            return vec![Finding::new(
                path,
                IssueType::NoImagesFound,
                format!(
                    "File extension not supported. Supported: {}",
                    describe_extensions(&self.options.extensions)
                ),
            )];
        }

        let findings = self.checker.check_file(path);
        if let Some(callback) = progress {
            callback(1, 1);
        }
        findings
    }

    /// Every eligible image below `root`, in file-name order per directory
    pub fn collect_candidates(&self, root: &Path) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            // walkdir does not follow links, so a link to a directory shows up
            // as a non-directory entry
            if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if is_hidden_or_system(&name) {
                debug!("Skipping hidden/system file: {}", name);
                continue;
            }
            if !has_supported_extension(&name, &self.options.extensions) {
                continue;
            }

            candidates.push(entry.into_path());
        }

        candidates
    }

    fn check_all(
        &self,
        candidates: &[PathBuf],
        progress: Option<&ProgressCallback>,
    ) -> Vec<Finding> {
        let total = candidates.len();
        let checked = AtomicUsize::new(0);

        let check = |path: &PathBuf| {
            let findings = self.checker.check_file(path);
            let done = checked.fetch_add(1, Ordering::Relaxed) + 1;
            if let Some(callback) = progress {
                callback(done, total);
            }
            findings
        };

        let per_file: Vec<Vec<Finding>> = match self.options.threads {
            1 => candidates.iter().map(&check).collect(),
            0 => candidates.par_iter().map(&check).collect(),
            n => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(pool) => pool.install(|| candidates.par_iter().map(&check).collect()),
                Err(e) => {
                    warn!("Failed to build a {}-thread pool, using the global pool: {}", n, e);
                    candidates.par_iter().map(&check).collect()
                }
            },
        };

        per_file.into_iter().flatten().collect()
    }
}

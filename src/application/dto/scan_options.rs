//! Scan options DTO

use crate::domain::services::file_filter::{DEFAULT_EXTENSIONS, normalize_extension};

/// Options for auditing a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Recognized extensions, lowercase with a leading dot
    pub extensions: Vec<String>,
    /// Worker threads for per-file checks (0 = one per CPU, 1 = sequential)
    pub threads: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            threads: 0,
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the extension allow-list.
    ///
    /// Entries are normalized (`"JPG"` becomes `".jpg"`); blanks and
    /// duplicates are dropped.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            if let Some(ext) = normalize_extension(ext.as_ref()) {
                if !normalized.contains(&ext) {
                    normalized.push(ext);
                }
            }
        }
        self.extensions = normalized;
        self
    }

    /// Sets the worker count
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Checks files one at a time on the calling thread
    pub fn sequential(mut self) -> Self {
        self.threads = 1;
        self
    }
}

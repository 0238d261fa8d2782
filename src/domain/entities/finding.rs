//! Finding entity
//!
//! One reported integrity issue for one path. Findings are plain values:
//! created once by a pipeline stage and never mutated afterwards.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// Identifier stamped on every finding produced by the integrity pipeline
pub const INTEGRITY_CHECKER: &str = "IntegrityChecker";

/// How bad a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// The file (or the whole run) cannot be trusted for training
    Critical,
    /// Dataset hygiene smell, the pixels themselves are intact
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Warning => "Warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Closed set of issues the pipeline can report
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IssueType {
    /// The scanned root does not exist
    PathError,
    /// Nothing eligible was found to check
    NoImagesFound,
    /// Zero-byte file
    EmptyFile,
    /// A decoder rejected the file; carries the decoder's name
    CorruptedImage(String),
    /// Decoded raster has a zero dimension
    ZeroPixelArea,
    /// Three identical channel planes
    GrayscaleAsRgb,
    /// Any fault outside the decoders' documented failures
    UnknownError,
}

impl IssueType {
    /// Returns the severity this issue is always reported with
    pub fn severity(&self) -> Severity {
        match self {
            IssueType::GrayscaleAsRgb => Severity::Warning,
            _ => Severity::Critical,
        }
    }

    /// Returns true for any `Corrupted Image (..)` variant
    pub fn is_corruption(&self) -> bool {
        matches!(self, IssueType::CorruptedImage(_))
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::PathError => f.write_str("Path Error"),
            IssueType::NoImagesFound => f.write_str("No Images Found"),
            IssueType::EmptyFile => f.write_str("Empty File"),
            IssueType::CorruptedImage(library) => write!(f, "Corrupted Image ({})", library),
            IssueType::ZeroPixelArea => f.write_str("Zero Pixel Area"),
            IssueType::GrayscaleAsRgb => f.write_str("Grayscale as RGB"),
            IssueType::UnknownError => f.write_str("Unknown Error"),
        }
    }
}

impl Serialize for IssueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single integrity finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    file_path: String,
    checker_name: String,
    issue_type: IssueType,
    severity: Severity,
    message: String,
}

impl Finding {
    /// Creates a finding from the integrity pipeline.
    ///
    /// Severity follows from the issue type, see [`IssueType::severity`].
    pub fn new(path: impl AsRef<Path>, issue_type: IssueType, message: impl Into<String>) -> Self {
        Self {
            file_path: path.as_ref().display().to_string(),
            checker_name: INTEGRITY_CHECKER.to_string(),
            severity: issue_type.severity(),
            issue_type,
            message: message.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn checker_name(&self) -> &str {
        &self.checker_name
    }

    pub fn issue_type(&self) -> &IssueType {
        &self.issue_type
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.severity, self.file_path, self.issue_type, self.message
        )
    }
}

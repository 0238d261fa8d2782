//! Per-file integrity pipeline
//!
//! A file runs through an ordered list of stages. Every stage but the last
//! may halt the pipeline with a single Critical finding; the last stage only
//! appends a Warning. Faults outside the decoders' documented failures,
//! panics included, are contained here and reported as `Unknown Error`.

use crate::domain::entities::{Finding, IssueType, PixelBuffer};
use crate::domain::repositories::{PixelDecoder, StructuralVerifier};
use std::any::Any;
use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Faults that are not a decoder's verdict on the file
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("cannot read file metadata: {0}")]
    Metadata(std::io::Error),

    #[error("channel check reached without a decoded buffer")]
    MissingBuffer,

    #[error("decoder panicked: {0}")]
    Panic(String),
}

/// What a stage decided about the file
#[derive(Debug)]
pub enum StageOutcome {
    /// Nothing to report, run the next stage
    Continue,
    /// Stop here and report only this finding
    Halt(Finding),
    /// Record this finding and keep going
    Note(Finding),
}

/// State carried from one stage to the next
pub struct Inspection<'a> {
    path: &'a Path,
    buffer: Option<PixelBuffer>,
}

impl<'a> Inspection<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path, buffer: None }
    }

    pub fn path(&self) -> &'a Path {
        self.path
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }
}

type Stage = fn(&IntegrityChecker, &mut Inspection<'_>) -> Result<StageOutcome, CheckError>;

const STAGES: [(&str, Stage); 4] = [
    ("file_size", IntegrityChecker::check_size),
    ("structure", IntegrityChecker::verify_structure),
    ("pixel_decode", IntegrityChecker::decode_pixels),
    ("channel_degeneracy", IntegrityChecker::check_channels),
];

/// Checks one image file at a time.
///
/// Cheap to share across threads: decoders are held behind `Arc`.
#[derive(Clone)]
pub struct IntegrityChecker {
    verifier: Arc<dyn StructuralVerifier>,
    decoder: Arc<dyn PixelDecoder>,
}

impl IntegrityChecker {
    pub fn new(verifier: Arc<dyn StructuralVerifier>, decoder: Arc<dyn PixelDecoder>) -> Self {
        Self { verifier, decoder }
    }

    /// Names of the stages in execution order
    pub fn stage_names() -> impl Iterator<Item = &'static str> {
        STAGES.iter().map(|(name, _)| *name)
    }

    /// Runs every stage against `path`.
    ///
    /// Never fails: an empty vector means the file passed all checks.
    pub fn check_file(&self, path: &Path) -> Vec<Finding> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.run_stages(path)));

        let err = match outcome {
            Ok(Ok(findings)) => return findings,
            Ok(Err(err)) => err,
            Err(payload) => CheckError::Panic(panic_message(payload.as_ref())),
        };

        warn!("Unexpected error auditing file {}: {}", path.display(), err);
        vec![Finding::new(
            path,
            IssueType::UnknownError,
            format!("An unexpected error occurred: {}", err),
        )]
    }

    fn run_stages(&self, path: &Path) -> Result<Vec<Finding>, CheckError> {
        let mut inspection = Inspection::new(path);
        let mut findings = Vec::new();

        for (name, stage) in STAGES {
            match stage(self, &mut inspection)? {
                StageOutcome::Continue => {}
                StageOutcome::Note(finding) => findings.push(finding),
                StageOutcome::Halt(finding) => {
                    debug!(stage = name, "{} halted: {}", path.display(), finding.issue_type());
                    return Ok(vec![finding]);
                }
            }
        }

        Ok(findings)
    }

    /// Stage 1: zero-byte files
    pub fn check_size(&self, inspection: &mut Inspection<'_>) -> Result<StageOutcome, CheckError> {
        let metadata = fs::metadata(inspection.path()).map_err(CheckError::Metadata)?;

        if metadata.len() == 0 {
            return Ok(StageOutcome::Halt(Finding::new(
                inspection.path(),
                IssueType::EmptyFile,
                "File size is 0 bytes",
            )));
        }
        Ok(StageOutcome::Continue)
    }

    /// Stage 2: structural verification through library A
    pub fn verify_structure(
        &self,
        inspection: &mut Inspection<'_>,
    ) -> Result<StageOutcome, CheckError> {
        match self.verifier.verify(inspection.path()) {
            Ok(()) => Ok(StageOutcome::Continue),
            Err(e) => Ok(StageOutcome::Halt(Finding::new(
                inspection.path(),
                IssueType::CorruptedImage(self.verifier.name().to_string()),
                format!("{} cannot open/verify image: {}", self.verifier.name(), e),
            ))),
        }
    }

    /// Stage 3: full pixel decode through library B
    pub fn decode_pixels(
        &self,
        inspection: &mut Inspection<'_>,
    ) -> Result<StageOutcome, CheckError> {
        let corrupted = IssueType::CorruptedImage(self.decoder.name().to_string());

        let buffer = match self.decoder.decode(inspection.path()) {
            Ok(Some(buffer)) => buffer,
            Ok(None) => {
                return Ok(StageOutcome::Halt(Finding::new(
                    inspection.path(),
                    corrupted,
                    format!(
                        "{} cannot decode image (decode returned no data)",
                        self.decoder.name()
                    ),
                )));
            }
            Err(e) => {
                return Ok(StageOutcome::Halt(Finding::new(
                    inspection.path(),
                    corrupted,
                    format!("{} cannot decode image: {}", self.decoder.name(), e),
                )));
            }
        };

        if buffer.has_zero_area() {
            return Ok(StageOutcome::Halt(Finding::new(
                inspection.path(),
                IssueType::ZeroPixelArea,
                format!("Image has invalid dimensions: {}", buffer.shape()),
            )));
        }

        inspection.buffer = Some(buffer);
        Ok(StageOutcome::Continue)
    }

    /// Stage 4: color image without chrominance
    pub fn check_channels(
        &self,
        inspection: &mut Inspection<'_>,
    ) -> Result<StageOutcome, CheckError> {
        let buffer = inspection.buffer.as_ref().ok_or(CheckError::MissingBuffer)?;

        if buffer.has_identical_color_planes() {
            return Ok(StageOutcome::Note(Finding::new(
                inspection.path(),
                IssueType::GrayscaleAsRgb,
                "Image is encoded as RGB but all pixels are grayscale (R=G=B)",
            )));
        }
        Ok(StageOutcome::Continue)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

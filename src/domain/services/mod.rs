//! Domain services
//!
//! The per-file integrity pipeline and the pure candidate predicates.

pub mod file_filter;
mod integrity_checker;

pub use integrity_checker::{CheckError, Inspection, IntegrityChecker, StageOutcome};

//! Domain entities
//!
//! Core values that flow through the integrity pipeline.

mod finding;
mod pixel_buffer;

pub use finding::{Finding, INTEGRITY_CHECKER, IssueType, Severity};
pub use pixel_buffer::{PixelBuffer, Samples};

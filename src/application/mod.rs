//! Application layer
//!
//! Use cases that orchestrate the domain pipeline over a dataset.

pub mod dto;
mod scan_dataset;

pub use scan_dataset::{ProgressCallback, ScanDatasetUseCase};

//! CLI module

mod commands;
mod progress;
pub mod report;

pub use commands::{Cli, Commands};
pub use progress::ProgressReporter;

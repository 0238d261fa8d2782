//! Progress reporting for CLI

use crate::application::ProgressCallback;
use indicatif::style::TemplateError;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

/// Progress reporter using indicatif
pub struct ProgressReporter {
    bar: Arc<ProgressBar>,
}

impl ProgressReporter {
    /// Creates a bar whose length is learned from the first callback
    pub fn for_audit() -> Result<Self, TemplateError> {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} images ({eta})")?
                .progress_chars("#>-"),
        );

        Ok(Self { bar: Arc::new(bar) })
    }

    /// Gets a callback for the scan use case
    pub fn callback(&self) -> ProgressCallback {
        let bar = Arc::clone(&self.bar);
        Box::new(move |current: usize, total: usize| {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
        })
    }

    /// Removes the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

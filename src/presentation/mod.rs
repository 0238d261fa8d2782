//! Presentation layer - Command-line front end

pub mod cli;

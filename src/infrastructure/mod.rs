//! Infrastructure layer - Implementations of the domain traits
//!
//! Concrete adapters over the `imagesize` and `image` codec crates.

pub mod decoders;

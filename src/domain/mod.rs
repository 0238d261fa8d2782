//! Domain layer - Core integrity logic
//!
//! Findings, decoder contracts, and the staged checker. Decoding itself is
//! delegated through the traits in [`repositories`].

pub mod entities;
pub mod repositories;
pub mod services;

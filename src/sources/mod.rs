//! Transcript sources.
pub mod transcript;

pub use transcript::Transcript;

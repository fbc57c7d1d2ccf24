//! Gloss corpus generation pipeline.
pub mod pipeline;
pub mod types;

pub use pipeline::{CheckReport, GlossCorpus};

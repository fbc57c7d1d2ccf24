//! Pipelines.
//!
//! The gloss corpus pipeline is implemented here, and the module provides a
//! light [pipeline::Pipeline] trait that enables easy and flexible pipeline
//! creation.
pub mod gloss;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use gloss::{CheckReport, GlossCorpus};
pub use pipeline::Pipeline;

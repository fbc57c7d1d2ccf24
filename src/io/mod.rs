//! Corpus I/O.
pub mod writer;

pub use writer::CorpusWriter;

mod docwriter;

pub use docwriter::CorpusWriter;

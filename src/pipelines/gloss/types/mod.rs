//! Gloss corpus record types.
mod document;
mod search;
mod token;
mod unit;

pub use document::{Document, Metadata};
pub use search::SearchEntry;
pub use token::AlignedToken;
pub use unit::{AudioSpan, GlossUnit};

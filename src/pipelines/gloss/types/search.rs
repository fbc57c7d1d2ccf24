use serde::Deserialize;
use serde::Serialize;

use super::unit::GlossUnit;

/// One search-index entry: a single unit flattened with its document key,
/// for downstream full-text/gloss search across the whole corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    file: String,
    num: u32,
    ori: Vec<String>,
    gloss: Vec<(String, String, String)>,
    free: Vec<String>,
}

impl SearchEntry {
    pub fn new(file: &str, unit: &GlossUnit) -> Self {
        Self {
            file: file.to_string(),
            num: unit.number(),
            ori: unit.original_tokens().to_vec(),
            gloss: unit.gloss_tuples(),
            free: unit.free_lines().to_vec(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn num(&self) -> u32 {
        self.num
    }
}

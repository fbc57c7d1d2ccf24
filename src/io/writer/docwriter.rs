/*! Corpus output writer.

Writes one JSON record per processed document, mirroring the source's
relative path under the destination with a `.json` extension, plus the
flattened `all_lang.json` search index at the destination root.
!*/
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::pipelines::gloss::types::{Document, SearchEntry};

pub struct CorpusWriter {
    dst: PathBuf,
}

impl CorpusWriter {
    /// Create a writer rooted at `dst`, creating the folder if needed.
    pub fn new(dst: &Path) -> Result<Self, Error> {
        std::fs::create_dir_all(dst)?;
        Ok(Self {
            dst: dst.to_path_buf(),
        })
    }

    /// Write one per-document record.
    pub fn write_document(&self, document: &Document) -> Result<(), Error> {
        let out = self.dst.join(document.path().with_extension("json"));
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(out)?;
        serde_json::to_writer(file, document)?;
        Ok(())
    }

    /// Write the flattened cross-document search index.
    pub fn write_search_index(&self, entries: &[SearchEntry]) -> Result<(), Error> {
        let file = File::create(self.dst.join("all_lang.json"))?;
        serde_json::to_writer(file, entries)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::pipelines::gloss::types::{AudioSpan, GlossUnit, Metadata};

    fn sample_document() -> Document {
        let metadata: Arc<Metadata> = Arc::new(
            [("speaker".to_string(), "Balenge".to_string())]
                .into_iter()
                .collect(),
        );
        let unit = GlossUnit::new(
            1,
            vec![],
            vec![],
            vec!["#e done".to_string()],
            false,
            AudioSpan(None, None),
            None,
            metadata.clone(),
        );
        Document::new(PathBuf::from("rukai/20200325.txt"), metadata, vec![unit])
    }

    #[test]
    fn writes_document_under_relative_path() {
        let dst = tempfile::tempdir().unwrap();
        let writer = CorpusWriter::new(dst.path()).unwrap();
        writer.write_document(&sample_document()).unwrap();

        let out = dst.path().join("rukai/20200325.json");
        let value: serde_json::Value =
            serde_json::from_reader(File::open(out).unwrap()).unwrap();
        assert_eq!(value["meta"]["speaker"], "Balenge");
        assert_eq!(value["glosses"][0][0], 1);
        assert_eq!(value["glosses"][0][1]["free"][0], "#e done");
        // unset sentence span is omitted, not null
        assert!(value["glosses"][0][1].get("s_a_span").is_none());
    }

    #[test]
    fn writes_search_index() {
        let dst = tempfile::tempdir().unwrap();
        let writer = CorpusWriter::new(dst.path()).unwrap();
        let document = sample_document();
        writer.write_search_index(&document.search_entries()).unwrap();

        let out = dst.path().join("all_lang.json");
        let entries: Vec<SearchEntry> =
            serde_json::from_reader(File::open(out).unwrap()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file(), "rukai/20200325");
        assert_eq!(entries[0].num(), 1);
    }
}

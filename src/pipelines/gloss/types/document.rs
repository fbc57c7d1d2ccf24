use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use super::search::SearchEntry;
use super::unit::{GlossUnit, GlossUnitSer};

/// Header key/value mapping of a transcript, extracted once per document
/// and shared by reference across all of its units.
///
/// Ordered so that serialized output is byte-stable between runs.
pub type Metadata = BTreeMap<String, String>;

/// One source transcript: its header metadata and its elicitation units in
/// appearance order. Created per file during a batch run, discarded after
/// serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "DocumentSer")]
pub struct Document {
    path: PathBuf,
    metadata: Arc<Metadata>,
    units: Vec<GlossUnit>,
}

impl Document {
    pub fn new(path: PathBuf, metadata: Arc<Metadata>, units: Vec<GlossUnit>) -> Self {
        Self {
            path,
            metadata,
            units,
        }
    }

    /// Path of the source file, relative to the corpus root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata(&self) -> &Arc<Metadata> {
        &self.metadata
    }

    pub fn units(&self) -> &[GlossUnit] {
        &self.units
    }

    /// File key used by the search index and the frontend loader:
    /// the relative path without its extension.
    pub fn file_key(&self) -> String {
        self.path.with_extension("").display().to_string()
    }

    /// Flattened search-index entries, one per unit.
    pub fn search_entries(&self) -> Vec<SearchEntry> {
        let file = self.file_key();
        self.units
            .iter()
            .map(|u| SearchEntry::new(&file, u))
            .collect()
    }
}

#[derive(Serialize, Deserialize)]
/// Serializable version of [Document].
/// The path is the output file's name, so it is not repeated inside.
struct DocumentSer {
    meta: Metadata,
    glosses: Vec<(u32, GlossUnitSer)>,
}

impl From<Document> for DocumentSer {
    fn from(d: Document) -> Self {
        let glosses = d
            .units
            .into_iter()
            .map(|u| (u.number(), u.into()))
            .collect();

        Self {
            meta: (*d.metadata).clone(),
            glosses,
        }
    }
}

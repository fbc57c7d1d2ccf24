//! Transcript loading.
//!
//! Reads one source `.txt` file into trimmed lines and parses its header
//! block. The header is everything before the first unit header line;
//! `key: value` lines go into the metadata mapping, anything else is
//! ignored. Invalid UTF-8 is decoded lossily with a warning; full encoding
//! detection is left to upstream tooling.
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Error;
use crate::pipelines::gloss::types::Metadata;
use crate::processing::is_unit_header;

/// A loaded transcript: trimmed lines plus the parsed header metadata.
#[derive(Debug, Clone)]
pub struct Transcript {
    path: PathBuf,
    lines: Vec<String>,
    metadata: Metadata,
}

impl Transcript {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let bytes = std::fs::read(path)?;
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                warn!("file {} is not valid UTF-8, decoding lossily", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let lines: Vec<String> = content.lines().map(|l| l.trim().to_string()).collect();
        let metadata = parse_header(&lines);
        if metadata.is_empty() {
            warn!("no header metadata in {}", path.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
            lines,
            metadata,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn into_metadata(self) -> Metadata {
        self.metadata
    }
}

/// Parse the header block: `key: value` lines before the first unit header.
fn parse_header(lines: &[String]) -> Metadata {
    let mut metadata = Metadata::new();
    for line in lines {
        if is_unit_header(line) {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.trim().to_string());
            }
        }
    }
    metadata
}

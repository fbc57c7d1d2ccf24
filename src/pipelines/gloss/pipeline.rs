//! Gloss corpus generation pipeline.
//!
//! A batch run discovers transcript files, processes each one through the
//! segmenter → grouper → aligner → assembler passes, and writes one JSON
//! record per document plus a flattened search index.
//!
//! Documents are independent and processed in parallel, one worker owning a
//! whole document; nothing is shared between workers except the log sink.
//! Failures are caught at their own boundary: a malformed file or unit is
//! logged with enough context to fix the source transcript by hand, and
//! never aborts the batch.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{error, info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::io::CorpusWriter;
use crate::pipelines::gloss::types::{Document, GlossUnit, Metadata, SearchEntry};
use crate::pipelines::pipeline::Pipeline;
use crate::processing::{align, assemble, group, segment, UnitSpan};
use crate::sources::Transcript;

pub struct GlossCorpus {
    src: PathBuf,
    dst: PathBuf,
}

/// Counts reported by a parse-only [GlossCorpus::check] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub documents: usize,
    pub documents_skipped: usize,
    pub units: usize,
    pub units_skipped: usize,
}

impl GlossCorpus {
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self { src, dst }
    }

    /// List transcript files under `src`, sorted for deterministic output.
    fn discover(src: &Path) -> Result<Vec<PathBuf>, Error> {
        let pattern = format!("{}/**/*.txt", src.display());
        let mut paths: Vec<PathBuf> = glob::glob(&pattern)?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    error!("error reading source directory: {}", e);
                    None
                }
            })
            .collect();
        paths.sort();
        Ok(paths)
    }

    /// Process one transcript into a document record.
    ///
    /// Returns the document along with the number of units skipped for
    /// invalid gloss formatting. Document-level failures (unreadable file,
    /// no unit headers) are returned as errors for the caller to log.
    fn process_document(path: &Path, src: &Path) -> Result<(Document, usize), Error> {
        let transcript = Transcript::load(path)?;
        let spans = segment(transcript.lines())?;
        let relative = path.strip_prefix(src).unwrap_or(path).to_path_buf();
        let metadata = Arc::new(transcript.metadata().clone());

        let mut units: Vec<GlossUnit> = Vec::with_capacity(spans.len());
        let mut skipped = 0;
        for span in spans {
            let unit_id = format!("{}/#{}", path.display(), span.number);
            match Self::process_unit(&transcript, &span, &units, &metadata, &unit_id) {
                Ok(unit) => units.push(unit),
                Err(e) => {
                    warn!("invalid gloss formatting in {}: {:?}", unit_id, e);
                    skipped += 1;
                }
            }
        }

        Ok((Document::new(relative, metadata, units), skipped))
    }

    /// Run one unit through grouping, alignment and assembly.
    fn process_unit(
        transcript: &Transcript,
        span: &UnitSpan,
        previous: &[GlossUnit],
        metadata: &Arc<Metadata>,
        unit_id: &str,
    ) -> Result<GlossUnit, Error> {
        let body = &transcript.lines()[span.body.clone()];
        let grouped = group(span.number, body)?;
        let aligned = align(&grouped.rk, &grouped.en, &grouped.ch, unit_id);

        Ok(assemble(
            span.number,
            grouped.original_tokens,
            aligned,
            grouped.free_lines,
            &grouped.audio_lines,
            previous,
            metadata.clone(),
            unit_id,
        ))
    }

    /// Process every discovered transcript, skipping and logging failures.
    fn process_all(src: &Path) -> Result<(Vec<Document>, CheckReport), Error> {
        let paths = Self::discover(src)?;
        info!("processing {} transcripts", paths.len());

        let documents: Vec<(Document, usize)> = paths
            .par_iter()
            .filter_map(|path| match Self::process_document(path, src) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("invalid document formatting: {} ({:?})", path.display(), e);
                    None
                }
            })
            .collect();

        let mut report = CheckReport {
            documents: paths.len(),
            documents_skipped: paths.len() - documents.len(),
            ..Default::default()
        };
        let documents = documents
            .into_iter()
            .map(|(document, skipped)| {
                report.units += document.units().len();
                report.units_skipped += skipped;
                document
            })
            .collect();

        Ok((documents, report))
    }

    /// Parse-only run: process everything, write nothing, report counts.
    pub fn check(src: &Path) -> Result<CheckReport, Error> {
        let (_, report) = Self::process_all(src)?;
        Ok(report)
    }
}

impl Pipeline<()> for GlossCorpus {
    fn run(&self) -> Result<(), Error> {
        let (documents, report) = Self::process_all(&self.src)?;

        let writer = CorpusWriter::new(&self.dst)?;
        let mut search: Vec<SearchEntry> = Vec::new();
        for document in &documents {
            writer.write_document(document)?;
            search.extend(document.search_entries());
        }
        writer.write_search_index(&search)?;

        info!(
            "wrote {} documents and {} search entries ({} documents skipped, {} units skipped)",
            documents.len(),
            search.len(),
            report.documents_skipped,
            report.units_skipped
        );
        Ok(())
    }
}

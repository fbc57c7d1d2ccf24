//! Record assembly.
//!
//! Combines an aligned-token sequence with its free-annotation lines and
//! audio markers into the final unit record: sentence-boundary flag, audio
//! time span, and the sentence-level audio span on sentence-end units.
use std::sync::Arc;

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::pipelines::gloss::types::{AlignedToken, AudioSpan, GlossUnit, Metadata};

lazy_static! {
    static ref AUDIO_TIME: Regex =
        Regex::new(r"^#a ([0-9.]+|None), ([0-9.]+|None), ([0-9.]+|None)").unwrap();
}

/// Parse the first well-formed `#a` marker line into its time triple.
/// A marker line that matches nothing yields all-absent times and a
/// diagnostic; the unit itself is unaffected.
fn audio_time(audio_lines: &[String], unit_id: &str) -> [Option<f64>; 3] {
    for line in audio_lines {
        if let Some(caps) = AUDIO_TIME.captures(line) {
            let parse = |m: &str| {
                if m == "None" {
                    None
                } else {
                    m.parse::<f64>().ok()
                }
            };
            return [parse(&caps[1]), parse(&caps[2]), parse(&caps[3])];
        }
    }
    if !audio_lines.is_empty() {
        warn!(
            "unparseable audio time marker in {}: {:?}",
            unit_id, audio_lines
        );
    }
    [None, None, None]
}

/// Sentence-level audio span for a sentence-end unit: from the audio start
/// of the first unit after the previous sentence boundary (or this unit,
/// when it opens its own sentence) to the audio end of this unit.
///
/// Boundary tracking counts successfully assembled units only. When either
/// endpoint is unresolvable the span is omitted entirely.
fn sentence_span(
    current: AudioSpan,
    previous: &[GlossUnit],
    unit_id: &str,
) -> Option<(f64, f64)> {
    let sentence_start = previous
        .iter()
        .rposition(|u| u.is_sentence_end())
        .map(|i| i + 1)
        .unwrap_or(0);

    let start = match previous.get(sentence_start) {
        Some(first) => first.audio_span().0,
        None => current.0,
    };
    let end = current.1;

    match (start, end) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => {
            debug!(
                "missing sentence audio endpoint in {}: start={:?} end={:?}",
                unit_id, start, end
            );
            None
        }
    }
}

/// Assemble the final unit record.
///
/// `previous` holds the units already assembled for this document, in
/// order; it is only consulted to locate the current sentence's first
/// unit. Metadata is attached by reference, never re-parsed here.
#[allow(clippy::too_many_arguments)]
pub fn assemble(
    number: u32,
    original_tokens: Vec<String>,
    aligned_tokens: Vec<AlignedToken>,
    free_lines: Vec<String>,
    audio_lines: &[String],
    previous: &[GlossUnit],
    metadata: Arc<Metadata>,
    unit_id: &str,
) -> GlossUnit {
    // a Chinese free translation marks the end of a sentence
    let is_sentence_end = free_lines.iter().any(|l| l.starts_with("#c"));

    let times = audio_time(audio_lines, unit_id);
    let audio_span = AudioSpan(times[0], times[1]);

    let sentence_audio_span = if is_sentence_end {
        sentence_span(audio_span, previous, unit_id)
    } else {
        None
    };

    GlossUnit::new(
        number,
        original_tokens,
        aligned_tokens,
        free_lines,
        is_sentence_end,
        audio_span,
        sentence_audio_span,
        metadata,
    )
}

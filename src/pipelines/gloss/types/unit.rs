use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use super::document::Metadata;
use super::token::AlignedToken;

/// Audio play time span of a unit, in seconds.
/// Either endpoint is `None` when the transcript carries no usable
/// `#a` marker. Exchanged as a two-element `[start|null, end|null]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioSpan(pub Option<f64>, pub Option<f64>);

/// One numbered elicitation unit (IU): an interlinear gloss block with its
/// free-annotation lines, sentence-boundary flag and audio timing.
///
/// Created once per source block, immutable afterwards, and held in memory
/// only while its document is being processed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "GlossUnitSer")]
pub struct GlossUnit {
    number: u32,
    original_tokens: Vec<String>,
    aligned_tokens: Vec<AlignedToken>,
    free_lines: Vec<String>,
    is_sentence_end: bool,
    audio_span: AudioSpan,
    sentence_audio_span: Option<(f64, f64)>,
    metadata: Arc<Metadata>,
}

impl GlossUnit {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        number: u32,
        original_tokens: Vec<String>,
        aligned_tokens: Vec<AlignedToken>,
        free_lines: Vec<String>,
        is_sentence_end: bool,
        audio_span: AudioSpan,
        sentence_audio_span: Option<(f64, f64)>,
        metadata: Arc<Metadata>,
    ) -> Self {
        Self {
            number,
            original_tokens,
            aligned_tokens,
            free_lines,
            is_sentence_end,
            audio_span,
            sentence_audio_span,
            metadata,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    /// Tokens of the raw original-language line (empty if the unit used
    /// the 3-line convention).
    pub fn original_tokens(&self) -> &[String] {
        &self.original_tokens
    }

    pub fn aligned_tokens(&self) -> &[AlignedToken] {
        &self.aligned_tokens
    }

    pub fn free_lines(&self) -> &[String] {
        &self.free_lines
    }

    /// `true` iff a `#c` Chinese free translation line is present:
    /// in this transcription convention that marks sentence completion.
    pub fn is_sentence_end(&self) -> bool {
        self.is_sentence_end
    }

    pub fn audio_span(&self) -> AudioSpan {
        self.audio_span
    }

    /// Only set on the unit that ends a sentence, and only when both
    /// endpoints could be resolved.
    pub fn sentence_audio_span(&self) -> Option<(f64, f64)> {
        self.sentence_audio_span
    }

    pub fn metadata(&self) -> &Arc<Metadata> {
        &self.metadata
    }

    /// Gloss tuples in the exchanged `(ori, en, ch)` shape.
    pub fn gloss_tuples(&self) -> Vec<(String, String, String)> {
        self.aligned_tokens.iter().map(|t| t.into()).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Serializable version of [GlossUnit], matching the site format.
pub(crate) struct GlossUnitSer {
    ori: Vec<String>,
    gloss: Vec<(String, String, String)>,
    free: Vec<String>,
    s_end: bool,
    iu_a_span: AudioSpan,
    meta: Metadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    s_a_span: Option<(f64, f64)>,
}

impl From<GlossUnit> for GlossUnitSer {
    fn from(u: GlossUnit) -> Self {
        let gloss = u.gloss_tuples();
        Self {
            ori: u.original_tokens,
            gloss,
            free: u.free_lines,
            s_end: u.is_sentence_end,
            iu_a_span: u.audio_span,
            meta: (*u.metadata).clone(),
            s_a_span: u.sentence_audio_span,
        }
    }
}

//! Three-way positional token alignment.
//!
//! Aligns the original, English and Chinese gloss tiers of one unit.
//! Field transcriptions are produced by hand and frequently have
//! tier-length mismatches, so the aligner favors best-effort partial
//! alignment with loud logging over hard failure: one malformed unit must
//! never block publishing the rest of the corpus.
//!
//! The English and Chinese tiers share a single annotation cursor and are
//! never indexed independently. Pure discourse markers receive no per-token
//! annotation; a marker consumes an annotation slot only when both tiers
//! echo it verbatim.
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::pipelines::gloss::types::AlignedToken;

lazy_static! {
    static ref BRACKET_TOKEN: Regex = Regex::new(r"^\[X+\]$").unwrap();
    static ref NO_LOWERCASE: Regex = Regex::new(r"^[^a-z,]+$").unwrap();
}

/// Whether a token is a pure discourse marker.
///
/// Bracketed laughter/placeholder tokens (`[X]`, `[XXX]`, ...) are exempt,
/// and that exemption takes precedence. Otherwise a token with no lowercase
/// letter and no comma is a marker: punctuation-like or uppercase-only
/// tokens such as interjections rendered in caps. Anything containing a
/// lowercase letter or a comma is always a real lexical token.
pub fn is_discourse_marker(token: &str) -> bool {
    if BRACKET_TOKEN.is_match(token) {
        return false;
    }
    NO_LOWERCASE.is_match(token)
}

/// Cursor into the filtered annotation tiers. Both tiers stay in
/// lock-step on the same index.
#[derive(Debug, Default)]
struct AnnotationCursor {
    index: usize,
}

impl AnnotationCursor {
    /// Whether the cursor has reached the end of either tier.
    fn exhausted(&self, en: &[&str], ch: &[&str]) -> bool {
        self.index >= en.len() || self.index >= ch.len()
    }

    fn advance(&mut self) {
        self.index += 1;
    }
}

/// Align the three tier strings of one unit into position-aligned tokens.
///
/// All three tiers are whitespace-tokenized; bare `.` tokens in the
/// annotation tiers are alignment padding and are filtered out. A count
/// mismatch between the filtered annotation tiers is logged with `unit_id`
/// but alignment proceeds regardless.
///
/// The result is in original-tier order and may be shorter than the
/// original token count: once the cursor exhausts either annotation tier,
/// later original-tier tokens receive no aligned entry.
pub fn align(rk: &str, en: &str, ch: &str, unit_id: &str) -> Vec<AlignedToken> {
    // split_whitespace never yields empty tokens
    let ori_tokens: Vec<&str> = rk.split_whitespace().collect();
    let en_tokens: Vec<&str> = en.split_whitespace().filter(|t| *t != ".").collect();
    let ch_tokens: Vec<&str> = ch.split_whitespace().filter(|t| *t != ".").collect();

    if en_tokens.len() != ch_tokens.len() {
        warn!(
            "ragged annotation tiers in {}: en={} ch={}",
            unit_id,
            en_tokens.len(),
            ch_tokens.len()
        );
    }

    let mut cursor = AnnotationCursor::default();
    let mut aligned = Vec::with_capacity(ori_tokens.len());

    for token in ori_tokens {
        if cursor.exhausted(&en_tokens, &ch_tokens) {
            // trailing original-tier tokens with no annotation left get no
            // aligned entry
            break;
        }

        if is_discourse_marker(token) {
            let echoed = en_tokens[cursor.index] == token && ch_tokens[cursor.index] == token;
            aligned.push(AlignedToken::new(token, "", "", true));
            // a non-echoed marker borrows no annotation slot; the next real
            // token reads the same index
            if echoed {
                cursor.advance();
            }
        } else {
            let english = en_tokens.get(cursor.index).copied().unwrap_or_default();
            let chinese = ch_tokens.get(cursor.index).copied().unwrap_or_default();
            aligned.push(AlignedToken::new(token, english, chinese, false));
            cursor.advance();
        }
    }

    aligned
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn tuples(tokens: &[AlignedToken]) -> Vec<(String, String, String, bool)> {
        tokens
            .iter()
            .map(|t| {
                (
                    t.original().to_string(),
                    t.english_gloss().to_string(),
                    t.chinese_gloss().to_string(),
                    t.is_discourse_marker(),
                )
            })
            .collect()
    }

    fn tk(o: &str, e: &str, c: &str, dm: bool) -> (String, String, String, bool) {
        (o.to_string(), e.to_string(), c.to_string(), dm)
    }

    #[test]
    fn plain_round_trip() {
        let aligned = align("a b c", "x y z", "一 二 三", "t/#1");
        assert_eq!(
            tuples(&aligned),
            vec![
                tk("a", "x", "一", false),
                tk("b", "y", "二", false),
                tk("c", "z", "三", false),
            ]
        );
    }

    #[test]
    fn echoed_marker_consumes_its_slot() {
        let aligned = align("HEY a", "HEY x", "HEY 一", "t/#1");
        assert_eq!(
            tuples(&aligned),
            vec![tk("HEY", "", "", true), tk("a", "x", "一", false)]
        );
    }

    #[test]
    fn non_echoed_marker_borrows_no_slot() {
        let aligned = align("HEY a", "x y", "一 二", "t/#1");
        // `a` consumes slot 0, not slot 1
        assert_eq!(
            tuples(&aligned),
            vec![tk("HEY", "", "", true), tk("a", "x", "一", false)]
        );
    }

    #[test]
    fn dot_padding_is_filtered() {
        let aligned = align("a b", "x . y", ". 一 二", "t/#1");
        assert_eq!(
            tuples(&aligned),
            vec![tk("a", "x", "一", false), tk("b", "y", "二", false)]
        );
    }

    #[test]
    fn ragged_tiers_use_shared_cursor_until_exhaustion() {
        // en has 2 tokens, ch has 3: alignment stops when en runs out
        let aligned = align("a b c", "x y", "一 二 三", "t/#1");
        assert_eq!(
            tuples(&aligned),
            vec![tk("a", "x", "一", false), tk("b", "y", "二", false)]
        );
    }

    #[test]
    fn exhausted_cursor_truncates_output() {
        let aligned = align("a b c d", "x y", "一 二", "t/#1");
        assert_eq!(aligned.len(), 2);
        assert_eq!(aligned[1].original(), "b");
    }

    #[test]
    fn empty_annotation_tiers_align_nothing() {
        assert!(align("a b", "", "", "t/#1").is_empty());
        assert!(align("", "x", "一", "t/#1").is_empty());
    }

    #[test]
    fn marker_classification() {
        // uppercase-only or punctuation-like tokens are markers
        assert!(is_discourse_marker("HEY"));
        assert!(is_discourse_marker("..."));
        assert!(is_discourse_marker("MHM!"));
        // bracket exemption beats the no-lowercase rule
        assert!(!is_discourse_marker("[X]"));
        assert!(!is_discourse_marker("[XXX]"));
        // a lowercase letter or a comma always makes a lexical token
        assert!(!is_discourse_marker("yakay"));
        assert!(!is_discourse_marker("Hey"));
        assert!(!is_discourse_marker("HEY,"));
    }

    #[test]
    fn marker_emitted_at_cursor_exhaustion_boundary() {
        // the non-echoed marker borrows no slot, `a` consumes the only one,
        // and `b` finds the cursor exhausted
        let aligned = align("HEY a b", "x", "一", "t/#1");
        assert_eq!(
            tuples(&aligned),
            vec![tk("HEY", "", "", true), tk("a", "x", "一", false)]
        );
    }
}

//! Line grouping within one unit.
//!
//! A unit body mixes gloss-tier lines, free-annotation lines (`#e`, `#c`,
//! `#n`, ...) and audio-marker lines (`#a`). Gloss-tier lines follow either
//! the 3-line convention (original, English, Chinese) or the 4-line one,
//! where a raw original-language line precedes the three tiers. Multi-line
//! units repeat the 3-line groups; tier lines of each group are
//! concatenated in document order.
use itertools::Itertools;

use crate::error::Error;

/// A unit body partitioned into its line classes, with the gloss tiers
/// already concatenated into one logical line each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedUnit {
    /// Whitespace tokens of the raw original-language line
    /// (empty under the 3-line convention).
    pub original_tokens: Vec<String>,
    /// Romanized/original tier.
    pub rk: String,
    /// English gloss tier.
    pub en: String,
    /// Chinese gloss tier.
    pub ch: String,
    /// `#`-tagged annotation lines, except `#a`.
    pub free_lines: Vec<String>,
    /// `#a` audio-marker lines.
    pub audio_lines: Vec<String>,
}

/// Partition and group the body lines of one unit.
///
/// Fails with [Error::InvalidGlossFormat] when the gloss-tier line count is
/// congruent to neither 0 nor 1 mod 3; the caller skips the unit and keeps
/// processing its siblings.
pub fn group(number: u32, body: &[String]) -> Result<GroupedUnit, Error> {
    let mut gloss_lines: Vec<&str> = Vec::new();
    let mut free_lines: Vec<String> = Vec::new();
    let mut audio_lines: Vec<String> = Vec::new();

    for line in body {
        if line.is_empty() {
            continue;
        } else if line.starts_with("#a") {
            audio_lines.push(line.clone());
        } else if line.starts_with('#') {
            free_lines.push(line.clone());
        } else {
            gloss_lines.push(line);
        }
    }

    let n = gloss_lines.len();
    if n % 3 != 0 && (n - 1) % 3 != 0 {
        return Err(Error::InvalidGlossFormat {
            unit: number,
            gloss_lines: n,
        });
    }

    // 4-line convention: the first line is the raw original-language line,
    // tokenized separately from the gloss tiers
    let original_tokens = if n % 3 != 0 {
        let raw = gloss_lines.remove(0);
        raw.split_whitespace().map(str::to_string).collect()
    } else {
        Vec::new()
    };

    let mut rk: Vec<&str> = Vec::new();
    let mut en: Vec<&str> = Vec::new();
    let mut ch: Vec<&str> = Vec::new();
    for (r, e, c) in gloss_lines.into_iter().tuples() {
        rk.push(r);
        en.push(e);
        ch.push(c);
    }

    Ok(GroupedUnit {
        original_tokens,
        rk: rk.join("\t"),
        en: en.join("\t"),
        ch: ch.join("\t"),
        free_lines,
        audio_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_lines(body: &str) -> Vec<String> {
        body.lines().map(|l| l.trim().to_string()).collect()
    }

    #[test]
    fn three_line_unit() {
        let body = to_lines(
            "yakay ku agi
have POSS brother
有 屬格 弟弟
#e I have a brother
#a 1.5, 7.53, 7.6",
        );
        let g = group(1, &body).unwrap();
        assert!(g.original_tokens.is_empty());
        assert_eq!(g.rk, "yakay ku agi");
        assert_eq!(g.en, "have POSS brother");
        assert_eq!(g.ch, "有 屬格 弟弟");
        assert_eq!(g.free_lines, vec!["#e I have a brother"]);
        assert_eq!(g.audio_lines, vec!["#a 1.5, 7.53, 7.6"]);
    }

    #[test]
    fn four_line_unit_splits_raw_original() {
        let body = to_lines(
            "yakay ku agili
yakay ku agi-li
have POSS brother-1SG.POSS
有 屬格 弟弟-我的
#c 我有弟弟",
        );
        let g = group(1, &body).unwrap();
        assert_eq!(g.original_tokens, vec!["yakay", "ku", "agili"]);
        assert_eq!(g.rk, "yakay ku agi-li");
    }

    #[test]
    fn multi_line_tiers_concatenate_in_document_order() {
        let body = to_lines(
            "a b
x y
一 二
c d
z w
三 四
#e done",
        );
        let g = group(1, &body).unwrap();
        assert_eq!(g.rk, "a b\tc d");
        assert_eq!(g.en, "x y\tz w");
        assert_eq!(g.ch, "一 二\t三 四");
    }

    #[test]
    fn blank_lines_are_dropped() {
        let body = to_lines(
            "a

x
一
#e ok",
        );
        // the blank second line does not count towards the tier total
        let g = group(1, &body).unwrap();
        assert_eq!(g.rk, "a");
        assert_eq!(g.en, "x");
        assert_eq!(g.ch, "一");
    }

    #[test]
    fn invalid_tier_count_is_rejected() {
        let body = to_lines("a b\nx y\n一 二\nextra\nlines");
        match group(7, &body) {
            Err(Error::InvalidGlossFormat { unit, gloss_lines }) => {
                assert_eq!(unit, 7);
                assert_eq!(gloss_lines, 5);
            }
            other => panic!("expected InvalidGlossFormat, got {:?}", other),
        }
    }

    #[test]
    fn empty_body_yields_empty_tiers() {
        let g = group(1, &[]).unwrap();
        assert!(g.rk.is_empty() && g.en.is_empty() && g.ch.is_empty());
    }
}

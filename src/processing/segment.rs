//! Document segmentation.
//!
//! Splits a raw line-oriented transcript into numbered elicitation blocks.
//! A unit starts at a `<number>.` header line; its body runs to the line
//! before the next header. The last unit has no following header, so it is
//! closed by scanning for a `#` annotation line followed by either the end
//! of the document or a non-`#` line.
use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    static ref UNIT_HEADER: Regex = Regex::new(r"^(\d{1,4})\.\s*$").unwrap();
}

/// Whether a trimmed line is a unit header (`1.`, `42.`, ...).
pub fn is_unit_header(line: &str) -> bool {
    UNIT_HEADER.is_match(line)
}

/// One segmented unit: its number and the range of body lines strictly
/// between the header and the unit's close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSpan {
    pub number: u32,
    pub body: Range<usize>,
}

/// Segment a transcript into unit spans, in appearance order.
///
/// Unit numbers are unique within a document but not necessarily
/// contiguous. A document without any header is malformed and skipped as a
/// whole; so is a document whose last unit never reaches a closing `#`
/// annotation line.
pub fn segment(lines: &[String]) -> Result<Vec<UnitSpan>, Error> {
    let headers: Vec<(usize, u32)> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let caps = UNIT_HEADER.captures(line)?;
            let number = caps[1].parse().ok()?;
            Some((i, number))
        })
        .collect();

    if headers.is_empty() {
        return Err(Error::MalformedDocument(
            "no unit headers found".to_string(),
        ));
    }

    let mut spans = Vec::with_capacity(headers.len());
    for pair in headers.windows(2) {
        let (start, number) = pair[0];
        let (next, _) = pair[1];
        // the unit closes at the line before the next header, and the body
        // excludes the closing line itself
        let end = (next.saturating_sub(1)).max(start + 1);
        spans.push(UnitSpan {
            number,
            body: start + 1..end,
        });
    }

    // close the last unit: first `#` line followed by EOF or a non-`#` line
    let (start, number) = *headers.last().unwrap();
    let mut i = start + 1;
    let end = loop {
        if i >= lines.len() {
            return Err(Error::MalformedDocument(format!(
                "unit {} has no closing annotation line",
                number
            )));
        }
        if lines[i].starts_with('#') && (i + 1 == lines.len() || !lines[i + 1].starts_with('#')) {
            break i + 1;
        }
        i += 1;
    };
    spans.push(UnitSpan {
        number,
        body: start + 1..end,
    });

    Ok(spans)
}

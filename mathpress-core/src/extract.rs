//! Marker extraction — locating math spans in source text.
//!
//! Grammar: a span starts at [`START_MARKER`], optionally followed by the
//! inline flag `~` plus at least one whitespace character (consumed), then
//! a lazy body up to the next [`END_MARKER`]. Bodies may span newlines.
//! The scan is left-to-right and non-recursive; spans never overlap, and a
//! marker sequence inside a body is not a nested span.

use std::ops::Range;

use regex::Regex;

use crate::error::ExtractError;
use crate::types::{MathMode, MathSpan};

/// Token opening a math span.
pub const START_MARKER: &str = "!LATEX";

/// Token closing a math span.
pub const END_MARKER: &str = "!LATEX!";

/// `(?s)` lets the lazy body cross newlines; group 1 is the inline flag,
/// group 2 the expression body.
const SPAN_PATTERN: &str = r"(?s)!LATEX(~\s+)?(.+?)!LATEX!";

/// Scans text for math spans.
///
/// [`extract`](MathExtractor::extract) and
/// [`rewrite`](MathExtractor::rewrite) are driven by the same scan, so for
/// a given input they observe exactly the same spans in exactly the same
/// order.
pub struct MathExtractor {
    pattern: Regex,
}

impl MathExtractor {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(SPAN_PATTERN).expect("span pattern is a valid regex"),
        }
    }

    /// All spans in `text`, ordered by the first character of each match.
    pub fn extract(&self, text: &str) -> Result<Vec<MathSpan>, ExtractError> {
        Ok(self.scan(text)?.into_iter().map(|(_, span)| span).collect())
    }

    /// `text` with every span replaced by `replacer(&span)`.
    pub fn rewrite<F>(&self, text: &str, mut replacer: F) -> Result<String, ExtractError>
    where
        F: FnMut(&MathSpan) -> String,
    {
        let spans = self.scan(text)?;
        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        for (range, span) in &spans {
            out.push_str(&text[cursor..range.start]);
            out.push_str(&replacer(span));
            cursor = range.end;
        }
        out.push_str(&text[cursor..]);
        Ok(out)
    }

    /// Shared scan: matched spans with their byte ranges, after checking
    /// every unmatched region for a dangling start marker.
    fn scan(&self, text: &str) -> Result<Vec<(Range<usize>, MathSpan)>, ExtractError> {
        let mut spans = Vec::new();
        let mut cursor = 0;
        for caps in self.pattern.captures_iter(text) {
            let (Some(m), Some(body)) = (caps.get(0), caps.get(2)) else {
                continue;
            };
            check_gap(text, cursor..m.start())?;
            let mode = if caps.get(1).is_some() {
                MathMode::Inline
            } else {
                MathMode::Block
            };
            spans.push((
                m.range(),
                MathSpan {
                    mode,
                    expression: body.as_str().to_owned(),
                },
            ));
            cursor = m.end();
        }
        check_gap(text, cursor..text.len())?;
        Ok(spans)
    }
}

impl Default for MathExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// A start marker in an unmatched region has no end marker anywhere after
/// it (otherwise the leftmost-first scan would have matched it).
fn check_gap(text: &str, gap: Range<usize>) -> Result<(), ExtractError> {
    if let Some(pos) = text[gap.clone()].find(START_MARKER) {
        return Err(ExtractError::UnterminatedSpan {
            line: line_of(text, gap.start + pos),
        });
    }
    Ok(())
}

/// 1-based line number of byte `offset` in `text`.
fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].bytes().filter(|&b| b == b'\n').count() + 1
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

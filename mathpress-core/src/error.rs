//! Error types for mathpress-core.

use thiserror::Error;

/// All errors that can arise from marker extraction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// A start marker with no matching end marker anywhere after it.
    /// Aborts the scan: dropping the marker would silently lose math.
    #[error("unterminated math span: start marker on line {line} has no end marker")]
    UnterminatedSpan { line: usize },
}

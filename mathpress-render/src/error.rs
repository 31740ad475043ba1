//! Error types for mathpress-render.

use thiserror::Error;

/// All errors that can arise from math rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer rejected the expression as invalid math.
    #[error("invalid math expression `{expression}`: {reason}")]
    Malformed { expression: String, reason: String },
}

impl RenderError {
    pub(crate) fn malformed(expression: &str, reason: impl Into<String>) -> Self {
        RenderError::Malformed {
            expression: expression.to_owned(),
            reason: reason.into(),
        }
    }
}

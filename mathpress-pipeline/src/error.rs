//! Error types for mathpress-pipeline.

use std::path::PathBuf;

use thiserror::Error;

use mathpress_core::ExtractError;
use mathpress_render::RenderError;

/// All errors that can arise from a pipeline run.
///
/// Every failure is fatal to the run: there is no partial-success
/// tracking, retry, or resume.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Marker scan failed in a source file.
    #[error("marker scan failed in {file}: {source}")]
    Extract {
        file: PathBuf,
        #[source]
        source: ExtractError,
    },

    /// Math rendering failed for an expression found in `file`.
    #[error("failed to render math from {file}: {source}")]
    Render {
        file: PathBuf,
        #[source]
        source: RenderError,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`PipelineError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PipelineError {
    PipelineError::Io {
        path: path.into(),
        source,
    }
}

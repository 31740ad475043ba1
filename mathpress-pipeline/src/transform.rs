//! Per-file transformation: extract spans, rewrite to reference tokens,
//! relocate, write, render.

use std::fs;
use std::path::{Path, PathBuf};

use mathpress_core::{relocate::relocate, MathExtractor};

use crate::cache::{RenderCache, RenderOutcome};
use crate::config::PipelineConfig;
use crate::error::{io_err, PipelineError};
use crate::writer::atomic_write;

/// What happened to one source file.
#[derive(Debug)]
pub struct FileReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub outcomes: Vec<RenderOutcome>,
}

/// Transform one source file.
///
/// The rewritten text is written to the relocated destination before any
/// rendering happens; renders then run in extraction order. The order has
/// no semantic effect (rendering is keyed by content, not position) but
/// keeps runs deterministic.
pub(crate) fn transform_file(
    path: &Path,
    extractor: &MathExtractor,
    cache: &mut RenderCache,
    config: &PipelineConfig,
    dry_run: bool,
) -> Result<FileReport, PipelineError> {
    let text = fs::read_to_string(path).map_err(|e| io_err(path, e))?;

    let spans = extractor
        .extract(&text)
        .map_err(|e| extract_err(path, e))?;
    let rewritten = extractor
        .rewrite(&text, |span| {
            span.mode
                .reference_token(&config.algorithm.hash(&span.expression))
        })
        .map_err(|e| extract_err(path, e))?;

    let destination = relocate(path, config.source_marker(), &config.content_root);
    if dry_run {
        tracing::info!("[dry-run] would write: {}", destination.display());
    } else {
        atomic_write(&destination, &rewritten)?;
        tracing::info!("wrote: {}", destination.display());
    }

    let mut outcomes = Vec::with_capacity(spans.len());
    for span in &spans {
        outcomes.push(cache.ensure_rendered(span.mode, &span.expression, path, dry_run)?);
    }

    Ok(FileReport {
        source: path.to_path_buf(),
        destination,
        outcomes,
    })
}

fn extract_err(path: &Path, source: mathpress_core::ExtractError) -> PipelineError {
    PipelineError::Extract {
        file: path.to_path_buf(),
        source,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
//
// Sources here are absolute tempdir paths, which the relocator passes
// through unchanged, so files are rewritten in place. The relative-path
// relocation flow is covered by the end-to-end and CLI suites.

//! Pipeline entrypoint — artifact directory setup, walk, aggregation.

use std::fs;

use serde::Serialize;

use mathpress_core::MathExtractor;
use mathpress_render::MathRenderer;

use crate::cache::{RenderCache, RenderOutcome};
use crate::config::PipelineConfig;
use crate::error::{io_err, PipelineError};
use crate::transform::{transform_file, FileReport};
use crate::walker::walk;

/// Aggregated counts for one pipeline run.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Regular files visited.
    pub files: usize,
    /// Math spans extracted across all files.
    pub spans: usize,
    /// Artifacts rendered and written this run.
    pub rendered: usize,
    /// Artifacts found on disk from previous runs.
    pub reused: usize,
    /// Spans deduplicated against earlier spans in this run.
    pub deduplicated: usize,
    /// Artifacts a dry run would have rendered.
    pub would_render: usize,
}

impl RunSummary {
    fn absorb(&mut self, report: &FileReport) {
        self.files += 1;
        self.spans += report.outcomes.len();
        for outcome in &report.outcomes {
            match outcome {
                RenderOutcome::Rendered { .. } => self.rendered += 1,
                RenderOutcome::ReusedOnDisk { .. } => self.reused += 1,
                RenderOutcome::CachedThisRun => self.deduplicated += 1,
                RenderOutcome::WouldRender { .. } => self.would_render += 1,
            }
        }
    }
}

/// Run the whole pipeline: create the artifact directory, walk the source
/// tree, transform every file, and return the aggregated summary.
///
/// This is the canonical entrypoint for the `mathpress` binary and for
/// embedding the pass in a larger build.
pub fn run(
    config: &PipelineConfig,
    renderer: Box<dyn MathRenderer>,
    dry_run: bool,
) -> Result<RunSummary, PipelineError> {
    if !dry_run {
        fs::create_dir_all(&config.artifact_dir).map_err(|e| io_err(&config.artifact_dir, e))?;
    }

    let extractor = MathExtractor::new();
    let mut cache = RenderCache::new(renderer, config.algorithm, config.artifact_dir.clone());
    let mut summary = RunSummary::default();

    walk(&config.source_root, |path| {
        let report = transform_file(path, &extractor, &mut cache, config, dry_run)?;
        summary.absorb(&report);
        Ok(())
    })?;

    Ok(summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

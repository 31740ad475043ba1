//! Render cache — at-most-once rendering per unique `(hash, mode)` pair.
//!
//! The in-memory seen-set only prevents redundant renders and writes
//! within one run; the artifact files on disk are the durable form, and an
//! artifact left by a previous run is trusted as already valid.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use mathpress_core::{ContentHash, HashAlgorithm, MathMode};
use mathpress_render::{escape_template_braces, MathRenderer};

use crate::error::PipelineError;
use crate::writer::atomic_write;

/// Outcome of ensuring one span is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The expression was rendered and its artifact written.
    Rendered { path: PathBuf },
    /// The `(hash, mode)` pair was already rendered earlier in this run.
    CachedThisRun,
    /// The artifact already existed on disk from a previous run.
    ReusedOnDisk { path: PathBuf },
    /// Dry-run mode: the artifact *would* have been rendered and written.
    WouldRender { path: PathBuf },
}

/// Per-run render cache over an external [`MathRenderer`].
pub struct RenderCache {
    renderer: Box<dyn MathRenderer>,
    algorithm: HashAlgorithm,
    artifact_dir: PathBuf,
    seen: HashSet<(ContentHash, MathMode)>,
}

impl RenderCache {
    pub fn new(
        renderer: Box<dyn MathRenderer>,
        algorithm: HashAlgorithm,
        artifact_dir: PathBuf,
    ) -> Self {
        Self {
            renderer,
            algorithm,
            artifact_dir,
            seen: HashSet::new(),
        }
    }

    /// Ensure the artifact for `(expression, mode)` exists on disk.
    ///
    /// `origin` is the source file the expression came from; it is only
    /// used to annotate renderer rejections.
    pub fn ensure_rendered(
        &mut self,
        mode: MathMode,
        expression: &str,
        origin: &Path,
        dry_run: bool,
    ) -> Result<RenderOutcome, PipelineError> {
        let hash = self.algorithm.hash(expression);
        let key = (hash.clone(), mode);
        if self.seen.contains(&key) {
            tracing::debug!("cached this run: {hash} ({mode})");
            return Ok(RenderOutcome::CachedThisRun);
        }

        let path = self.artifact_dir.join(hash.artifact_name(mode));
        if path.exists() {
            tracing::debug!("artifact already on disk: {}", path.display());
            self.seen.insert(key);
            return Ok(RenderOutcome::ReusedOnDisk { path });
        }

        if dry_run {
            tracing::info!("[dry-run] would render: {}", path.display());
            self.seen.insert(key);
            return Ok(RenderOutcome::WouldRender { path });
        }

        let rendered =
            self.renderer
                .render(expression, mode)
                .map_err(|e| PipelineError::Render {
                    file: origin.to_path_buf(),
                    source: e,
                })?;
        atomic_write(&path, &escape_template_braces(&rendered))?;
        self.seen.insert(key);

        tracing::info!("rendered: {} ({mode})", path.display());
        Ok(RenderOutcome::Rendered { path })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

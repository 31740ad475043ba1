//! Run configuration — tree locations and digest selection, resolved once
//! at process start.

use std::path::{Path, PathBuf};

use mathpress_core::HashAlgorithm;

/// Default source tree scanned for math markup; its base name doubles as
/// the relocation marker.
pub const DEFAULT_SOURCE_ROOT: &str = "katex";

/// Default content tree that relocated files are written under.
pub const DEFAULT_CONTENT_ROOT: &str = "content";

/// Default directory for rendered math partials.
pub const DEFAULT_ARTIFACT_DIR: &str = "layouts/partials/rendered-latex";

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Tree walked for source files.
    pub source_root: PathBuf,
    /// Tree that relocated files land under.
    pub content_root: PathBuf,
    /// Directory rendered artifacts are written to.
    pub artifact_dir: PathBuf,
    /// Digest algorithm for content addressing; fixed for the whole run.
    pub algorithm: HashAlgorithm,
}

impl PipelineConfig {
    /// Relocation marker: the base name of the source root.
    pub fn source_marker(&self) -> &str {
        self.source_root
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_SOURCE_ROOT)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_root: Path::new(DEFAULT_SOURCE_ROOT).to_path_buf(),
            content_root: Path::new(DEFAULT_CONTENT_ROOT).to_path_buf(),
            artifact_dir: Path::new(DEFAULT_ARTIFACT_DIR).to_path_buf(),
            algorithm: HashAlgorithm::default(),
        }
    }
}

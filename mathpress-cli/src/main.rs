//! mathpress — pre-render embedded math for a static site tree.
//!
//! # Usage
//!
//! ```text
//! mathpress [--source <dir>] [--content <dir>] [--artifacts <dir>]
//!           [--hash-algo sha256|sha512] [--dry-run] [--json]
//! ```
//!
//! Walks the source tree, rewrites every `!LATEX … !LATEX!` span to a
//! shortcode reference, relocates the rewritten files under the content
//! tree, and renders each unique expression once into a hash-named HTML
//! partial. Paths are resolved relative to the working directory, which
//! should be the site root.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mathpress_core::HashAlgorithm;
use mathpress_pipeline::{
    run, PipelineConfig, RunSummary, DEFAULT_ARTIFACT_DIR, DEFAULT_CONTENT_ROOT,
    DEFAULT_SOURCE_ROOT,
};
use mathpress_render::KatexRenderer;

#[derive(Parser, Debug)]
#[command(
    name = "mathpress",
    version,
    about = "Render embedded math to cached HTML partials for a static site",
    long_about = None,
)]
struct Cli {
    /// Source tree scanned for math markup; its base name is the
    /// relocation marker.
    #[arg(long, default_value = DEFAULT_SOURCE_ROOT)]
    source: PathBuf,

    /// Content tree that relocated files are written under.
    #[arg(long, default_value = DEFAULT_CONTENT_ROOT)]
    content: PathBuf,

    /// Directory for rendered math partials.
    #[arg(long, default_value = DEFAULT_ARTIFACT_DIR)]
    artifacts: PathBuf,

    /// Digest algorithm for content addressing.
    #[arg(long, default_value_t = HashAlgorithm::Sha256)]
    hash_algo: HashAlgorithm,

    /// Show what would be written without writing any files.
    #[arg(long)]
    dry_run: bool,

    /// Emit a machine-readable JSON summary.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = PipelineConfig {
        source_root: cli.source,
        content_root: cli.content,
        artifact_dir: cli.artifacts,
        algorithm: cli.hash_algo,
    };

    let summary = run(&config, Box::new(KatexRenderer::new()), cli.dry_run)
        .with_context(|| {
            format!(
                "math preprocessing failed under '{}'",
                config.source_root.display()
            )
        })?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("failed to serialize summary JSON")?
        );
        return Ok(());
    }

    print_summary(&summary, cli.dry_run);
    Ok(())
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    if summary.files == 0 {
        println!("{prefix}✓ no source files found — nothing to do");
        return;
    }
    if dry_run {
        println!(
            "{prefix}✓ {} files, {} spans ({} would render, {} reused, {} deduplicated)",
            summary.files, summary.spans, summary.would_render, summary.reused,
            summary.deduplicated,
        );
    } else {
        println!(
            "{prefix}✓ {} files, {} spans ({} rendered, {} reused, {} deduplicated)",
            summary.files, summary.spans, summary.rendered, summary.reused,
            summary.deduplicated,
        );
    }
}

//! End-to-end pipeline runs over real directory trees.
//!
//! Relocation is defined over run-relative paths, so these tests change
//! the process working directory into a fresh tempdir. The lock serializes
//! them; every test in this binary must hold it before touching the cwd.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use mathpress_core::{HashAlgorithm, MathMode};
use mathpress_pipeline::{run, PipelineConfig, PipelineError, RunSummary};
use mathpress_render::KatexRenderer;
use tempfile::TempDir;

static CWD_LOCK: Mutex<()> = Mutex::new(());

fn enter_tempdir() -> (MutexGuard<'static, ()>, TempDir) {
    let guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let tmp = TempDir::new().expect("tempdir");
    std::env::set_current_dir(tmp.path()).expect("chdir");
    (guard, tmp)
}

fn write_source(relative: &str, text: &str) {
    let path = Path::new(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn run_default(dry_run: bool) -> Result<RunSummary, PipelineError> {
    run(
        &PipelineConfig::default(),
        Box::new(KatexRenderer::new()),
        dry_run,
    )
}

#[test]
fn full_run_relocates_rewrites_and_renders() {
    let (_guard, _tmp) = enter_tempdir();
    write_source(
        "katex/physics/inertia.md",
        "Inertia: !LATEXF=ma!LATEX! and !LATEX~ x^2!LATEX! done.",
    );

    let summary = run_default(false).unwrap();
    assert_eq!(summary.files, 1);
    assert_eq!(summary.spans, 2);
    assert_eq!(summary.rendered, 2);

    let rewritten = fs::read_to_string("content/physics/inertia.md").unwrap();
    let block_hash = HashAlgorithm::Sha256.hash("F=ma");
    let inline_hash = HashAlgorithm::Sha256.hash("x^2");
    assert_eq!(
        rewritten,
        format!(
            "Inertia: {{{{< katex-block \"{block_hash}\" >}}}} and \
             {{{{< katex-inline \"{inline_hash}\" >}}}} done."
        )
    );

    // The tokens and the artifact names agree on the hash.
    let block_artifact = Path::new("layouts/partials/rendered-latex")
        .join(block_hash.artifact_name(MathMode::Block));
    let inline_artifact = Path::new("layouts/partials/rendered-latex")
        .join(inline_hash.artifact_name(MathMode::Inline));
    assert!(fs::read_to_string(block_artifact)
        .unwrap()
        .contains(r"\[F=ma\]"));
    assert!(fs::read_to_string(inline_artifact)
        .unwrap()
        .contains(r"\(x^2\)"));
}

#[test]
fn same_expression_across_files_renders_once() {
    let (_guard, _tmp) = enter_tempdir();
    write_source("katex/a.md", "!LATEXE=mc^2!LATEX!");
    write_source("katex/sub/b.md", "also !LATEXE=mc^2!LATEX!");

    let summary = run_default(false).unwrap();
    assert_eq!(summary.files, 2);
    assert_eq!(summary.spans, 2);
    assert_eq!(summary.rendered, 1);
    assert_eq!(summary.deduplicated, 1);

    let artifacts: Vec<_> = fs::read_dir("layouts/partials/rendered-latex")
        .unwrap()
        .collect();
    assert_eq!(artifacts.len(), 1);
}

#[test]
fn rendered_braces_are_escaped_for_the_template_engine() {
    let (_guard, _tmp) = enter_tempdir();
    write_source("katex/frac.md", r"!LATEX\frac{a}{b}!LATEX!");

    run_default(false).unwrap();

    let hash = HashAlgorithm::Sha256.hash(r"\frac{a}{b}");
    let artifact = Path::new("layouts/partials/rendered-latex")
        .join(hash.artifact_name(MathMode::Block));
    let html = fs::read_to_string(artifact).unwrap();
    assert!(html.contains("&#123;"));
    assert!(html.contains("&#125;"));
    assert!(!html.contains('{'));
    assert!(!html.contains('}'));
}

#[test]
fn second_run_is_idempotent_and_renders_nothing() {
    let (_guard, _tmp) = enter_tempdir();
    write_source("katex/a.md", "!LATEXF=ma!LATEX! and !LATEX~ x^2!LATEX!");

    let first = run_default(false).unwrap();
    assert_eq!(first.rendered, 2);

    let content_before = fs::read("content/a.md").unwrap();
    let artifacts_before: Vec<Vec<u8>> = artifact_bytes();

    let second = run_default(false).unwrap();
    assert_eq!(second.rendered, 0);
    assert_eq!(second.reused, 2);

    assert_eq!(fs::read("content/a.md").unwrap(), content_before);
    assert_eq!(artifact_bytes(), artifacts_before);
}

fn artifact_bytes() -> Vec<Vec<u8>> {
    let mut paths: Vec<_> = fs::read_dir("layouts/partials/rendered-latex")
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    paths.sort();
    paths.into_iter().map(|p| fs::read(p).unwrap()).collect()
}

#[test]
fn dry_run_reports_without_writing() {
    let (_guard, _tmp) = enter_tempdir();
    write_source("katex/a.md", "!LATEXF=ma!LATEX!");

    let summary = run_default(true).unwrap();
    assert_eq!(summary.files, 1);
    assert_eq!(summary.would_render, 1);
    assert_eq!(summary.rendered, 0);

    assert!(!Path::new("content").exists());
    assert!(!Path::new("layouts").exists());
}

#[test]
fn malformed_math_aborts_the_run_naming_file_and_expression() {
    let (_guard, _tmp) = enter_tempdir();
    write_source("katex/ok.md", "!LATEXfine!LATEX!");
    write_source("katex/z_bad.md", r"!LATEX\frac{a}{b!LATEX!");

    let err = run_default(false).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("z_bad.md"), "got: {message}");
    assert!(matches!(err, PipelineError::Render { .. }));
}

#[test]
fn unterminated_marker_aborts_the_run() {
    let (_guard, _tmp) = enter_tempdir();
    write_source("katex/broken.md", "text\n!LATEX never closed");

    let err = run_default(false).unwrap_err();
    assert!(matches!(err, PipelineError::Extract { .. }));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn missing_source_root_is_a_fatal_io_error() {
    let (_guard, _tmp) = enter_tempdir();
    let err = run_default(false).unwrap_err();
    assert!(matches!(err, PipelineError::Io { .. }));
}

#[test]
fn deep_trees_do_not_exhaust_the_stack() {
    let (_guard, _tmp) = enter_tempdir();
    let mut dir = String::from("katex");
    for level in 0..100 {
        dir.push_str(&format!("/d{level}"));
    }
    write_source(&format!("{dir}/leaf.md"), "!LATEXdeep!LATEX!");

    let summary = run_default(false).unwrap();
    assert_eq!(summary.files, 1);
    assert!(Path::new(&format!(
        "content{}/leaf.md",
        &dir["katex".len()..]
    ))
    .exists());
}

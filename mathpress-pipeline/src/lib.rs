//! # mathpress-pipeline
//!
//! The content-addressed preprocessing pass: walk a math source tree,
//! rewrite every `!LATEX` span to a shortcode reference, relocate the
//! rewritten files under the content tree, and render each unique
//! expression once into a hash-named HTML partial.
//!
//! Call [`run`] with a [`PipelineConfig`] and a
//! [`MathRenderer`](mathpress_render::MathRenderer) to execute one pass.

pub mod cache;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod transform;
mod walker;
mod writer;

pub use cache::{RenderCache, RenderOutcome};
pub use config::{
    PipelineConfig, DEFAULT_ARTIFACT_DIR, DEFAULT_CONTENT_ROOT, DEFAULT_SOURCE_ROOT,
};
pub use error::PipelineError;
pub use pipeline::{run, RunSummary};
pub use transform::FileReport;

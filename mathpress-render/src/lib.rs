//! # mathpress-render
//!
//! The math-rendering seam of the pipeline: the [`MathRenderer`] trait, a
//! KaTeX client-side HTML backend, and the brace escaping applied to
//! rendered artifacts before they land in the partials directory.

pub mod error;
pub mod escape;
pub mod renderer;

pub use error::RenderError;
pub use escape::escape_template_braces;
pub use renderer::{KatexRenderer, MathRenderer};

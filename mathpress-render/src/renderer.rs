//! The math-rendering seam and the KaTeX HTML backend.

use mathpress_core::types::MathMode;

use crate::error::RenderError;

/// Renders one math expression to an HTML fragment.
///
/// The pipeline treats the renderer as an external collaborator: it only
/// requires that rendering is deterministic for a given `(expression,
/// mode)` pair and that malformed input is rejected with
/// [`RenderError::Malformed`].
pub trait MathRenderer {
    fn render(&self, expression: &str, mode: MathMode) -> Result<String, RenderError>;
}

/// Renderer emitting KaTeX-ready markup for client-side typesetting.
///
/// Inline expressions become a `\(...\)` span, block expressions a
/// `\[...\]` display div, with HTML entities escaped so the expression
/// survives embedding in a page.
pub struct KatexRenderer;

impl KatexRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KatexRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MathRenderer for KatexRenderer {
    fn render(&self, expression: &str, mode: MathMode) -> Result<String, RenderError> {
        validate(expression)?;
        let escaped = escape_html(expression);
        Ok(match mode {
            MathMode::Inline => {
                format!(r#"<span class="math inline">\({escaped}\)</span>"#)
            }
            MathMode::Block => {
                format!(r#"<div class="math display">\[{escaped}\]</div>"#)
            }
        })
    }
}

/// Structural checks a TeX engine would reject outright.
fn validate(expression: &str) -> Result<(), RenderError> {
    if expression.trim().is_empty() {
        return Err(RenderError::malformed(expression, "empty expression"));
    }

    let mut depth: i64 = 0;
    let mut chars = expression.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return Err(RenderError::malformed(
                        expression,
                        "dangling backslash at end of expression",
                    ));
                }
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return Err(RenderError::malformed(expression, "unbalanced braces"));
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(RenderError::malformed(expression, "unbalanced braces"));
    }
    Ok(())
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

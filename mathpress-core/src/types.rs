//! Domain types for math span extraction and content addressing.
//!
//! All path values elsewhere in the workspace use `PathBuf`; never `&str`
//! or `String` for filesystem paths.

use std::fmt;

// ---------------------------------------------------------------------------
// MathMode
// ---------------------------------------------------------------------------

/// Rendering mode of a math span.
///
/// Block spans render in display mode; inline spans render in text mode.
/// The mode is part of the cache key: the same expression rendered both
/// ways produces two distinct artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathMode {
    Inline,
    Block,
}

impl MathMode {
    /// Shortcode name the rewritten content references for this mode.
    pub fn shortcode(&self) -> &'static str {
        match self {
            MathMode::Inline => "katex-inline",
            MathMode::Block => "katex-block",
        }
    }

    /// The reference token spliced into rewritten content in place of a
    /// span, resolved by the site generator back to the artifact named by
    /// `hash` and this mode.
    pub fn reference_token(&self, hash: &ContentHash) -> String {
        format!("{{{{< {} \"{}\" >}}}}", self.shortcode(), hash)
    }
}

impl fmt::Display for MathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathMode::Inline => write!(f, "inline"),
            MathMode::Block => write!(f, "block"),
        }
    }
}

// ---------------------------------------------------------------------------
// MathSpan
// ---------------------------------------------------------------------------

/// One delimited math expression found in a source file.
///
/// `expression` is the raw text exactly as captured between the markers.
/// The inline flag consumes the whitespace that follows it, so inline
/// expressions carry no leading whitespace; block expressions are
/// byte-exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathSpan {
    pub mode: MathMode,
    pub expression: String,
}

// ---------------------------------------------------------------------------
// ContentHash
// ---------------------------------------------------------------------------

/// Hex digest of an expression's exact text — its durable identity, cache
/// key, and artifact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(pub String);

impl ContentHash {
    /// File name of the rendered artifact for this hash and `mode`:
    /// `<hash>-inline.html` or `<hash>-block.html`.
    pub fn artifact_name(&self, mode: MathMode) -> String {
        format!("{}-{}.html", self.0, mode)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ContentHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Path relocation — rebasing source-tree paths onto the content tree.

use std::path::{Component, Path, PathBuf};

/// Destination path for a source file.
///
/// Rooted paths pass through unchanged. Otherwise the directory ancestry
/// is searched from the leaf upward for a component equal to `marker`; if
/// one is found, everything at and above it is stripped and the remainder
/// is rebased under `content_root`. The deepest marker wins. Paths with no
/// marker ancestor pass through unchanged.
pub fn relocate(path: &Path, marker: &str, content_root: &Path) -> PathBuf {
    if path.has_root() {
        return path.to_path_buf();
    }

    let components: Vec<Component<'_>> = path.components().collect();
    // The file's own name is not an ancestor; search directories only.
    let ancestry = &components[..components.len().saturating_sub(1)];
    let marker_idx = ancestry.iter().rposition(|c| match c {
        Component::Normal(name) => name.to_str() == Some(marker),
        _ => false,
    });

    match marker_idx {
        Some(idx) => {
            let mut out = content_root.to_path_buf();
            for component in &components[idx + 1..] {
                out.push(component);
            }
            out
        }
        None => path.to_path_buf(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Source-tree traversal.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{io_err, PipelineError};

/// Visit every regular file under `root`, depth-first, in each
/// directory's listing order.
///
/// The descent keeps an explicit stack of open directory readers, so
/// arbitrarily deep trees never grow the call stack. Entries that are
/// neither regular files nor directories (symlinks, devices) are skipped.
pub(crate) fn walk<F>(root: &Path, mut visit: F) -> Result<(), PipelineError>
where
    F: FnMut(&Path) -> Result<(), PipelineError>,
{
    let mut stack = vec![open_dir(root)?];
    loop {
        let next = match stack.last_mut() {
            Some((dir, entries)) => entries
                .next()
                .map(|res| res.map_err(|e| io_err(dir.as_path(), e))),
            None => return Ok(()),
        };
        let Some(entry) = next else {
            stack.pop();
            continue;
        };
        let entry = entry?;
        let path = entry.path();
        // file_type() does not follow symlinks, so a link to a file or
        // directory still counts as "neither" and is skipped.
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_dir() {
            stack.push(open_dir(&path)?);
        } else if file_type.is_file() {
            visit(&path)?;
        } else {
            tracing::debug!("skipping non-regular entry: {}", path.display());
        }
    }
}

fn open_dir(path: &Path) -> Result<(PathBuf, fs::ReadDir), PipelineError> {
    let entries = fs::read_dir(path).map_err(|e| io_err(path, e))?;
    Ok((path.to_path_buf(), entries))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

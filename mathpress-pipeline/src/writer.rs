//! Atomic file writes — `.tmp` + rename, parent directories created on
//! demand.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{io_err, PipelineError};

/// Write `content` to `path` atomically: write `<path>.mathpress.tmp`,
/// then rename over the final path. The tmp file is removed if the rename
/// fails, leaving any previous content intact.
pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    let tmp = PathBuf::from(format!("{}.mathpress.tmp", path.display()));
    fs::write(&tmp, content).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

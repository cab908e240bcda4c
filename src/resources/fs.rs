//! File-system helpers shared by the component repository and `init`.
use std::path::Path;

use crate::error::ComponentError;

fn io_err(path: &Path, source: std::io::Error) -> ComponentError {
    ComponentError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns [`ComponentError::Io`] if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<(), ComponentError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    Ok(())
}

/// Write `content` to `path`, creating missing parent directories and
/// replacing any existing file. No backup is kept.
///
/// # Errors
///
/// Returns [`ComponentError::Io`] if a directory or the file cannot be written.
pub fn overwrite(path: &Path, content: &str) -> Result<(), ComponentError> {
    ensure_parent_dir(path)?;
    std::fs::write(path, content).map_err(|e| io_err(path, e))
}

/// Create `dir` and its ancestors. Returns `true` if it did not exist before.
///
/// # Errors
///
/// Returns [`ComponentError::Io`] if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<bool, ComponentError> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    Ok(true)
}

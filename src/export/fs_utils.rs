// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::path::Path;

/// Checks that `path` can be created or overwritten.
///
/// - the file does not exist → Ok
/// - it exists and `force` is set → Ok
/// - it exists without `force` → error
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(AppError::Export(format!(
            "directory '{}' does not exist",
            parent.display()
        )));
    }
    if !path.exists() {
        return Ok(());
    }
    if force {
        info(format!("Overwriting existing file '{}'.", path.display()));
        return Ok(());
    }
    Err(AppError::Export(format!(
        "'{}' already exists (use --force to overwrite)",
        path.display()
    )))
}

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Refuse to replace an existing file unless `force` is set.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }
    Err(AppError::Export(format!(
        "File '{}' already exists. Use --force to overwrite.",
        path.display()
    )))
}

// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Check whether an export target can be created or overwritten.
///
/// - If the file does not exist → Ok
/// - If it exists and `force` is set → Ok
/// - If it exists and `force == false` → error; the host decides whether
///   to prompt and retry with `force`.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }
    Err(AppError::Export(format!(
        "target file '{}' already exists",
        path.display()
    )))
}

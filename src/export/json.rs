use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::TimesheetExport;
use std::fs;
use std::path::Path;

/// Serialize export rows as formatted JSON.
pub fn to_json_string(rows: &[TimesheetExport]) -> AppResult<String> {
    serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))
}

/// Write the JSON to a file. Refuses to overwrite unless `force` is set.
pub fn write_json_file(path: &Path, rows: &[TimesheetExport], force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;
    let json = to_json_string(rows)?;
    fs::write(path, json)?;
    Ok(())
}

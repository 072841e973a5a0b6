use crate::config::Labels;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::TimesheetExport;
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::Path;

/// Serialize export rows to the flat CSV format: a fixed, unquoted header
/// row followed by one line per entry with every field double-quoted.
pub fn to_csv_string(rows: &[TimesheetExport], labels: &Labels) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .has_headers(false)
        .from_writer(vec![]);

    for row in rows {
        wtr.write_record(row.as_row())
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    let body = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    let body = String::from_utf8(body).map_err(|e| AppError::Export(e.to_string()))?;

    Ok(format!("{}\n{}", labels.csv_header.join(","), body))
}

/// Write the CSV to a file. Refuses to overwrite unless `force` is set.
pub fn write_csv_file(
    path: &Path,
    rows: &[TimesheetExport],
    labels: &Labels,
    force: bool,
) -> AppResult<()> {
    ensure_writable(path, force)?;
    let csv = to_csv_string(rows, labels)?;
    fs::write(path, csv)?;
    Ok(())
}

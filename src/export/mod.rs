// src/export/mod.rs

mod fs_utils;
pub mod csv;
pub mod json;
pub mod model;

pub use model::TimesheetExport;

use crate::config::Labels;
use crate::errors::AppResult;
use std::path::Path;

/// Supported export serializations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write export rows to a file in the requested format.
pub fn write_file(
    format: ExportFormat,
    path: &Path,
    rows: &[TimesheetExport],
    labels: &Labels,
    force: bool,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::write_csv_file(path, rows, labels, force),
        ExportFormat::Json => json::write_json_file(path, rows, force),
    }
}

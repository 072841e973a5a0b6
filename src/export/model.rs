// src/export/model.rs

use crate::config::Labels;
use crate::directory;
use crate::models::site::Site;
use crate::models::timesheet::TimesheetEntry;
use crate::models::worker::Worker;
use serde::Serialize;

/// Flat row for export, with worker name and position joined in and the
/// dangling-reference fallbacks already applied.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TimesheetExport {
    pub utilisateur: String,
    pub poste: String,
    pub chantier: String,
    pub date: String,
    pub heures: String,
    pub statut: String,
}

/// Hours render the way form input reads: no trailing `.0` on whole
/// values (8, not 8.0; 7.5 stays 7.5).
pub(crate) fn format_hours(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

impl TimesheetExport {
    pub fn from_entry(
        entry: &TimesheetEntry,
        workers: &[Worker],
        sites: &[Site],
        labels: &Labels,
    ) -> Self {
        Self {
            utilisateur: directory::worker_name(workers, &entry.worker_id, labels).to_string(),
            poste: directory::worker_position(workers, &entry.worker_id, labels).to_string(),
            chantier: directory::site_name(sites, &entry.site_id).to_string(),
            date: entry.date.format("%d/%m/%Y").to_string(),
            heures: format_hours(entry.hours),
            statut: entry.status.as_label().to_string(),
        }
    }

    pub(crate) fn as_row(&self) -> [&str; 6] {
        [
            &self.utilisateur,
            &self.poste,
            &self.chantier,
            &self.date,
            &self.heures,
            &self.statut,
        ]
    }
}

/// Resolve a filtered subset into export rows, preserving order.
pub fn to_rows(
    entries: &[TimesheetEntry],
    workers: &[Worker],
    sites: &[Site],
    labels: &Labels,
) -> Vec<TimesheetExport> {
    entries
        .iter()
        .map(|e| TimesheetExport::from_entry(e, workers, sites, labels))
        .collect()
}

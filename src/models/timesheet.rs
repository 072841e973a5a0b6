use super::status::Status;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One timesheet line: a worker's declared hours on a site for a day.
///
/// `worker_id` and `site_id` are not enforced to resolve; dangling
/// references display through the directory fallbacks. Empty `trajet_id`
/// / `transport_id` mean "unset".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimesheetEntry {
    pub id: String,
    pub worker_id: String,
    pub date: NaiveDate,
    pub site_id: String,
    pub hours: f64,
    pub hours_sup: f64,
    pub notes: String,
    pub status: Status,
    pub panier: bool,
    pub trajet_id: String,
    pub transport_id: String,
}

impl TimesheetEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Form payload used to create or edit an entry.
/// Hours arrive as free text from the form; `parse_hours` applies the
/// blank-or-invalid-means-zero coercion explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimesheetDraft {
    pub date: NaiveDate,
    pub site_id: String,
    pub hours: f64,
    pub hours_sup: f64,
    pub notes: String,
    pub panier: bool,
    pub trajet_id: String,
    pub transport_id: String,
}

/// Coerce form text to hours: blank or unparseable input counts as 0.
pub fn parse_hours(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0)
}

/// Generate an entry id from the current epoch millis, the same shape the
/// hosting apps used for ad hoc id generation.
pub fn next_entry_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

//! KPI aggregation over a filtered timesheet subset.

use crate::models::status::Status;
use crate::models::timesheet::TimesheetEntry;
use serde::Serialize;

/// Totals and per-status counts for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Aggregates {
    pub total_hours: f64,
    pub total_hours_sup: f64,
    pub pending_count: usize,
    pub approved_count: usize,
    pub declined_count: usize,
}

impl Aggregates {
    /// The value shown to users as "hours this period"; supplemental
    /// hours are tracked separately only for the "night hours" subtitle.
    pub fn display_total(&self) -> f64 {
        self.total_hours + self.total_hours_sup
    }
}

/// Non-finite hours (NaN, infinities) count as zero. Host forms coerce
/// blank input to zero already; this makes the contract explicit.
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

pub struct Aggregator;

impl Aggregator {
    pub fn aggregate(entries: &[TimesheetEntry]) -> Aggregates {
        let mut agg = Aggregates::default();
        for e in entries {
            agg.total_hours += finite_or_zero(e.hours);
            agg.total_hours_sup += finite_or_zero(e.hours_sup);
            match e.status {
                Status::Pending => agg.pending_count += 1,
                Status::Approved => agg.approved_count += 1,
                Status::Declined => agg.declined_count += 1,
            }
        }
        agg
    }
}

//! Timesheet filtering: period containment plus optional worker, site and
//! status predicates. Pure and order-preserving; sorting is a separate,
//! explicit step applied by the caller.

use crate::models::context::{AuthContext, Role};
use crate::models::period::Period;
use crate::models::status::Status;
use crate::models::timesheet::TimesheetEntry;
use crate::models::worker::Worker;
use log::debug;
use std::collections::HashSet;

/// Filter predicates for one derivation pass. Empty optional filters
/// match everything.
#[derive(Debug, Clone, Default)]
pub struct PeriodFilter {
    pub period: Option<Period>,
    pub worker_id: Option<String>,
    pub site_ids: HashSet<String>,
    pub statuses: HashSet<Status>,
}

impl PeriodFilter {
    pub fn for_period(period: Period) -> Self {
        Self {
            period: Some(period),
            ..Default::default()
        }
    }

    pub fn with_worker(mut self, worker_id: impl Into<String>) -> Self {
        self.worker_id = Some(worker_id.into());
        self
    }

    pub fn with_sites<I: IntoIterator<Item = String>>(mut self, sites: I) -> Self {
        self.site_ids = sites.into_iter().collect();
        self
    }

    pub fn with_statuses<I: IntoIterator<Item = Status>>(mut self, statuses: I) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    fn matches(&self, entry: &TimesheetEntry) -> bool {
        if let Some(p) = &self.period {
            if !p.contains(entry.date) {
                return false;
            }
        }
        if let Some(w) = &self.worker_id {
            if &entry.worker_id != w {
                return false;
            }
        }
        if !self.site_ids.is_empty() && !self.site_ids.contains(&entry.site_id) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&entry.status) {
            return false;
        }
        true
    }

    /// Return the matching subset, in input order.
    pub fn apply(&self, entries: &[TimesheetEntry]) -> Vec<TimesheetEntry> {
        let out: Vec<TimesheetEntry> = entries
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();
        debug!("filter: {} of {} entries match", out.len(), entries.len());
        out
    }
}

/// Descending-by-date order, the usual presentation order of the lists.
pub fn sort_by_date_desc(entries: &mut [TimesheetEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Role-based visibility, applied before any period filtering: an employee
/// sees only their own entries, an agency sees the entries of its workers,
/// admins and validators see everything.
pub fn scope_visible(
    entries: &[TimesheetEntry],
    workers: &[Worker],
    ctx: &AuthContext,
) -> Vec<TimesheetEntry> {
    match ctx.role {
        Role::Admin | Role::Validator => entries.to_vec(),
        Role::Employee => entries
            .iter()
            .filter(|e| e.worker_id == ctx.user_id)
            .cloned()
            .collect(),
        Role::Agency => {
            let Some(agency_id) = ctx.agency_id.as_deref() else {
                return Vec::new();
            };
            let agency_workers: HashSet<&str> = workers
                .iter()
                .filter(|w| w.agency_id.as_deref() == Some(agency_id))
                .map(|w| w.id.as_str())
                .collect();
            entries
                .iter()
                .filter(|e| agency_workers.contains(e.worker_id.as_str()))
                .cloned()
                .collect()
        }
    }
}

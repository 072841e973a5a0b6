//! Per-worker grouping index: drives the validator's worklist, one row
//! per directory worker with a pending-count badge.

use crate::models::timesheet::TimesheetEntry;
use crate::models::worker::Worker;

/// One worklist row. Workers with no matching entries appear with a
/// pending count of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerPending {
    pub worker: Worker,
    pub pending: usize,
}

pub struct Grouping;

impl Grouping {
    /// Bucket an already period-scoped subset by worker, preserving the
    /// directory's ordering.
    pub fn by_worker(entries: &[TimesheetEntry], workers: &[Worker]) -> Vec<WorkerPending> {
        workers
            .iter()
            .map(|worker| {
                let pending = entries
                    .iter()
                    .filter(|e| e.worker_id == worker.id && e.status.is_pending())
                    .count();
                WorkerPending {
                    worker: worker.clone(),
                    pending,
                }
            })
            .collect()
    }

    /// Entries of one worker within the subset, in input order. Selecting
    /// a worklist row narrows the detail view with this.
    pub fn entries_of<'a>(
        entries: &'a [TimesheetEntry],
        worker_id: &str,
    ) -> Vec<&'a TimesheetEntry> {
        entries.iter().filter(|e| e.worker_id == worker_id).collect()
    }
}

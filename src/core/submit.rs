//! Entry lifecycle: create, edit and delete, with the pending-only rules
//! the role screens enforce.

use crate::errors::{AppError, AppResult};
use crate::models::context::Role;
use crate::models::status::Status;
use crate::models::timesheet::{TimesheetDraft, TimesheetEntry, next_entry_id};
use log::debug;

pub struct Lifecycle;

impl Lifecycle {
    /// Build a new entry from a submitted form. The id is generated here
    /// and the status is forced to Pending regardless of the draft.
    pub fn create(draft: &TimesheetDraft, worker_id: &str) -> TimesheetEntry {
        Self::create_with_id(draft, worker_id, next_entry_id())
    }

    /// Id-injectable variant, used by hosts that allocate ids themselves.
    pub fn create_with_id(
        draft: &TimesheetDraft,
        worker_id: &str,
        id: String,
    ) -> TimesheetEntry {
        TimesheetEntry {
            id,
            worker_id: worker_id.to_string(),
            date: draft.date,
            site_id: draft.site_id.clone(),
            hours: draft.hours,
            hours_sup: draft.hours_sup,
            notes: draft.notes.clone(),
            status: Status::Pending,
            panier: draft.panier,
            trajet_id: draft.trajet_id.clone(),
            transport_id: draft.transport_id.clone(),
        }
    }

    /// Full field edit, allowed only while the entry is still pending.
    /// Worker, id and status are never touched by an edit.
    pub fn edit(entry: &TimesheetEntry, draft: &TimesheetDraft) -> AppResult<TimesheetEntry> {
        if entry.status != Status::Pending {
            return Err(AppError::EditNotAllowed(entry.status));
        }
        Ok(TimesheetEntry {
            date: draft.date,
            site_id: draft.site_id.clone(),
            hours: draft.hours,
            hours_sup: draft.hours_sup,
            notes: draft.notes.clone(),
            panier: draft.panier,
            trajet_id: draft.trajet_id.clone(),
            transport_id: draft.transport_id.clone(),
            ..entry.clone()
        })
    }

    /// Remove an entry: workers may delete their pending entries, an
    /// admin deletes unconditionally. Returns the replacement collection.
    pub fn delete(
        collection: &[TimesheetEntry],
        id: &str,
        role: Role,
    ) -> AppResult<Vec<TimesheetEntry>> {
        let entry = collection
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

        if role != Role::Admin && entry.status != Status::Pending {
            return Err(AppError::DeleteNotAllowed(entry.status));
        }

        debug!("entry {}: deleted by {:?}", id, role);
        Ok(collection.iter().filter(|e| e.id != id).cloned().collect())
    }
}

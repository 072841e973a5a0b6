//! Approval state machine for a single timesheet entry.
//!
//! Every transition returns an updated copy; the host replaces the entry
//! in its owned collection by id (`replace`). Nothing is mutated in place.
//! Declining is the only two-step flow: `request_decline` captures the
//! target without touching it, `confirm_decline` applies the status change
//! and appends the note.

use crate::models::status::Status;
use crate::models::timesheet::TimesheetEntry;
use log::debug;

/// Separator used when appending a decline note to the free-text notes.
const NOTE_SEPARATOR: &str = " - Note: ";

/// A decline awaiting its note. Holds only the target id; the entry is
/// untouched until `Approval::confirm_decline`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclineRequest {
    pub entry_id: String,
}

pub struct Approval;

impl Approval {
    pub fn approve(entry: &TimesheetEntry) -> TimesheetEntry {
        Self::set_status(entry, Status::Approved)
    }

    pub fn revert_to_pending(entry: &TimesheetEntry) -> TimesheetEntry {
        Self::set_status(entry, Status::Pending)
    }

    /// Begin the decline flow. No mutation happens until the note is
    /// confirmed.
    pub fn request_decline(entry: &TimesheetEntry) -> DeclineRequest {
        DeclineRequest {
            entry_id: entry.id.clone(),
        }
    }

    /// Decline with a note. The note is appended to the entry's notes
    /// (never replacing them) and survives a later revert to pending.
    pub fn confirm_decline(entry: &TimesheetEntry, note: &str) -> TimesheetEntry {
        let mut updated = Self::set_status(entry, Status::Declined);
        updated.notes = format!("{}{}{}", entry.notes, NOTE_SEPARATOR, note);
        updated
    }

    /// Direct status assignment, backing the toggle buttons
    /// (Valider/Dévalider, Refuser/Annuler refus). The UI constrains
    /// which targets are offered; the machine itself accepts any.
    pub fn set_status(entry: &TimesheetEntry, status: Status) -> TimesheetEntry {
        debug!(
            "entry {}: status {:?} -> {:?}",
            entry.id, entry.status, status
        );
        TimesheetEntry {
            status,
            ..entry.clone()
        }
    }

    /// Swap an updated entry into the host-owned collection by id,
    /// producing the replacement collection. Unknown ids leave the
    /// collection unchanged.
    pub fn replace(collection: &[TimesheetEntry], updated: TimesheetEntry) -> Vec<TimesheetEntry> {
        collection
            .iter()
            .map(|e| {
                if e.id == updated.id {
                    updated.clone()
                } else {
                    e.clone()
                }
            })
            .collect()
    }
}

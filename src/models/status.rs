use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Closed approval status of a timesheet entry.
///
/// Replaces the loosely-typed French string literals used by hosts
/// ("En attente" / "Validé" / "Refusé"); `as_label` / `from_label`
/// round-trip those labels for interop with source-shaped data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Status {
    Pending,
    Approved,
    Declined,
}

impl Status {
    /// French display label, matching the labels stored by the hosts.
    pub fn as_label(&self) -> &'static str {
        match self {
            Status::Pending => "En attente",
            Status::Approved => "Validé",
            Status::Declined => "Refusé",
        }
    }

    /// Parse a host-side label back into the enum.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "En attente" => Some(Status::Pending),
            "Validé" => Some(Status::Approved),
            "Refusé" => Some(Status::Declined),
            _ => None,
        }
    }

    /// Parse a label, erroring on unknown input. Used when ingesting
    /// legacy host data where the status was stored as free text.
    pub fn parse_label(s: &str) -> AppResult<Self> {
        Self::from_label(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Status::Pending)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pending
    }
}

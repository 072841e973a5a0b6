use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Week or month window, anchored to a reference date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ViewMode {
    Week,
    Month,
}

/// Half-open date interval `[start, end)` representing "this week" or
/// "this month". Derived from `(reference date, view mode)`, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

//! Period resolution: maps a reference date and a view mode to the
//! half-open `[start, end)` interval the filters work with.

use crate::models::period::{Period, ViewMode};
use chrono::{Datelike, Duration, NaiveDate};

pub struct PeriodResolver;

impl PeriodResolver {
    /// Monday of the week containing `date`. The week starts on Monday;
    /// if `date` is a Sunday, step back 6 days.
    pub fn start_of_week(date: NaiveDate) -> NaiveDate {
        let back = date.weekday().num_days_from_monday() as i64;
        date - Duration::days(back)
    }

    /// First calendar day of the month containing `date`.
    pub fn start_of_month(date: NaiveDate) -> NaiveDate {
        // day 1 always exists for a valid date's year/month
        NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
    }

    /// First calendar day of the following month (exclusive month end).
    pub fn end_of_month_exclusive(date: NaiveDate) -> NaiveDate {
        let (y, m) = if date.month() == 12 {
            (date.year() + 1, 1)
        } else {
            (date.year(), date.month() + 1)
        };
        NaiveDate::from_ymd_opt(y, m, 1).unwrap_or(date)
    }

    /// Resolve the current period for a reference date and view mode.
    pub fn resolve(reference: NaiveDate, mode: ViewMode) -> Period {
        match mode {
            ViewMode::Week => {
                let start = Self::start_of_week(reference);
                Period {
                    start,
                    end: start + Duration::days(7),
                }
            }
            ViewMode::Month => Period {
                start: Self::start_of_month(reference),
                end: Self::end_of_month_exclusive(reference),
            },
        }
    }

    /// Move the navigation cursor one week back.
    pub fn previous_week(reference: NaiveDate) -> NaiveDate {
        reference - Duration::days(7)
    }

    /// Move the navigation cursor one week forward.
    pub fn next_week(reference: NaiveDate) -> NaiveDate {
        reference + Duration::days(7)
    }
}

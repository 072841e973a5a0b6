//! Date utilities: ISO parsing, French display formatting, week labels.

use crate::config::Labels;
use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a stored `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// French display format, `dd/MM/yyyy`.
pub fn format_date_fr(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

const MONTHS_SHORT_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// Short day-and-month label, e.g. "17 mars".
pub fn format_day_month_fr(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!(
        "{} {}",
        date.day(),
        MONTHS_SHORT_FR[(date.month0()) as usize]
    )
}

/// Banner label for a week cursor, e.g. "Semaine du 17 mars au 23 mars".
/// The displayed end is the last day inside the week, not the exclusive
/// period end.
pub fn format_week_label(week_start: NaiveDate, labels: &Labels) -> String {
    let week_end = week_start + Duration::days(6);
    format!(
        "{} {} {} {}",
        labels.week_label_prefix,
        format_day_month_fr(week_start),
        labels.week_label_infix,
        format_day_month_fr(week_end)
    )
}

mod common;
use common::d;
use pointage::{PeriodResolver, ViewMode};

#[test]
fn test_start_of_week_midweek() {
    // 2025-03-19 is a Wednesday; the week starts Monday the 17th
    assert_eq!(PeriodResolver::start_of_week(d("2025-03-19")), d("2025-03-17"));
}

#[test]
fn test_start_of_week_on_monday_is_identity() {
    assert_eq!(PeriodResolver::start_of_week(d("2025-03-17")), d("2025-03-17"));
}

#[test]
fn test_start_of_week_on_sunday_steps_back_six_days() {
    // 2025-03-23 is a Sunday
    assert_eq!(PeriodResolver::start_of_week(d("2025-03-23")), d("2025-03-17"));
}

#[test]
fn test_week_period_is_half_open_seven_days() {
    let p = PeriodResolver::resolve(d("2025-03-19"), ViewMode::Week);
    assert_eq!(p.start, d("2025-03-17"));
    assert_eq!(p.end, d("2025-03-24"));
    assert!(p.contains(d("2025-03-17")));
    assert!(p.contains(d("2025-03-23")));
    assert!(!p.contains(d("2025-03-24")));
}

#[test]
fn test_month_period_ends_on_first_of_next_month() {
    let p = PeriodResolver::resolve(d("2025-03-19"), ViewMode::Month);
    assert_eq!(p.start, d("2025-03-01"));
    assert_eq!(p.end, d("2025-04-01"));
    assert!(!p.contains(d("2025-04-01")));
}

#[test]
fn test_month_period_december_rolls_over_year() {
    let p = PeriodResolver::resolve(d("2025-12-15"), ViewMode::Month);
    assert_eq!(p.start, d("2025-12-01"));
    assert_eq!(p.end, d("2026-01-01"));
}

#[test]
fn test_week_navigation_moves_cursor_by_seven_days() {
    let cursor = d("2025-03-17");
    assert_eq!(PeriodResolver::previous_week(cursor), d("2025-03-10"));
    assert_eq!(PeriodResolver::next_week(cursor), d("2025-03-24"));
}

// Host-side tests for timeline date handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod timeline {
    include!("../src/timeline.rs");
}

use timeline::*;

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

#[test]
fn parses_iso_dates_and_ignores_time_part() {
    assert_eq!(CalendarDate::parse_iso("2026-10-17"), Some(date(2026, 10, 17)));
    assert_eq!(
        CalendarDate::parse_iso(" 2026-03-01T09:30:00 "),
        Some(date(2026, 3, 1))
    );
    assert_eq!(CalendarDate::parse_iso("2024-02-29"), Some(date(2024, 2, 29)));
}

#[test]
fn rejects_malformed_or_impossible_dates() {
    for s in [
        "",
        "2026-1-5",
        "2026/10/17",
        "2026-13-01",
        "2026-04-31",
        "2025-02-29",
        "17-10-2026",
        "2026-10-17x",
        "October 17, 2026",
    ] {
        assert_eq!(CalendarDate::parse_iso(s), None, "{s:?}");
    }
}

#[test]
fn status_compares_calendar_days() {
    let today = date(2026, 10, 17);
    assert_eq!(
        MilestoneStatus::for_dates(today, date(2026, 10, 16)),
        MilestoneStatus::Done
    );
    assert_eq!(
        MilestoneStatus::for_dates(today, date(2026, 10, 17)),
        MilestoneStatus::Live
    );
    assert_eq!(
        MilestoneStatus::for_dates(today, date(2026, 10, 18)),
        MilestoneStatus::Upcoming
    );
    assert_eq!(
        MilestoneStatus::for_dates(today, date(2025, 12, 31)),
        MilestoneStatus::Done
    );
    assert_eq!(
        MilestoneStatus::for_dates(today, date(2027, 1, 1)),
        MilestoneStatus::Upcoming
    );
}

#[test]
fn status_labels_and_classes() {
    assert_eq!(MilestoneStatus::Done.label(), "DONE");
    assert_eq!(MilestoneStatus::Live.label(), "LIVE NOW");
    assert_eq!(MilestoneStatus::Upcoming.label(), "UPCOMING");
    assert_eq!(MilestoneStatus::Done.class_name(), "status-done");
    assert_eq!(MilestoneStatus::Live.class_name(), "status-live");
    assert_eq!(MilestoneStatus::Upcoming.class_name(), "status-upcoming");
}

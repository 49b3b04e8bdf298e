//! Tests for day filtering, text search, and week ordering.

use chrono::{TimeZone, Utc};
use week_engine::entry::{MinuteSpan, ScheduleEntry};
use week_engine::filter::{entries_on_day, search_day, sort_by_day_and_start};
use week_engine::time::DayOfWeek;

fn entry(title: &str, day: DayOfWeek, start: u16, end: u16) -> ScheduleEntry {
    let created = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    ScheduleEntry::new(title, day, MinuteSpan::new(start, end).unwrap(), created)
}

fn titles(found: &[&ScheduleEntry]) -> Vec<String> {
    found.iter().map(|e| e.title.clone()).collect()
}

// ── Day filtering ───────────────────────────────────────────────────────────

#[test]
fn entries_on_day_keeps_only_that_day_in_input_order() {
    let entries = vec![
        entry("Gym", DayOfWeek::Monday, 700, 760),
        entry("Math", DayOfWeek::Tuesday, 480, 540),
        entry("Lunch", DayOfWeek::Monday, 720, 780),
    ];

    let monday = entries_on_day(&entries, DayOfWeek::Monday);

    assert_eq!(titles(&monday), vec!["Gym", "Lunch"], "input order preserved");
    assert!(entries_on_day(&entries, DayOfWeek::Sunday).is_empty());
}

// ── Text search ─────────────────────────────────────────────────────────────

#[test]
fn search_matches_title_case_insensitively() {
    let entries = vec![
        entry("Math 101", DayOfWeek::Monday, 480, 540),
        entry("Gym", DayOfWeek::Monday, 700, 760),
    ];

    let found = search_day(&entries, DayOfWeek::Monday, "mAtH");

    assert_eq!(titles(&found), vec!["Math 101"]);
}

#[test]
fn search_reaches_location_and_note() {
    let entries = vec![
        entry("Math", DayOfWeek::Monday, 480, 540).with_location("Room 12"),
        entry("Chem", DayOfWeek::Monday, 600, 660).with_note("bring goggles"),
        entry("Gym", DayOfWeek::Monday, 700, 760),
    ];

    assert_eq!(
        titles(&search_day(&entries, DayOfWeek::Monday, "room 12")),
        vec!["Math"]
    );
    assert_eq!(
        titles(&search_day(&entries, DayOfWeek::Monday, "GOGGLES")),
        vec!["Chem"]
    );
}

#[test]
fn blank_query_matches_the_whole_day() {
    let entries = vec![
        entry("Math", DayOfWeek::Monday, 480, 540),
        entry("Gym", DayOfWeek::Monday, 700, 760),
        entry("Tue", DayOfWeek::Tuesday, 480, 540),
    ];

    assert_eq!(search_day(&entries, DayOfWeek::Monday, "").len(), 2);
    assert_eq!(search_day(&entries, DayOfWeek::Monday, "   ").len(), 2);
}

#[test]
fn query_is_trimmed_before_matching() {
    let entries = vec![entry("Gym", DayOfWeek::Monday, 700, 760)];

    assert_eq!(search_day(&entries, DayOfWeek::Monday, "  gym  ").len(), 1);
}

#[test]
fn search_never_leaves_the_requested_day() {
    // The same title exists on two days; only the requested day answers.
    let entries = vec![
        entry("Math", DayOfWeek::Monday, 480, 540),
        entry("Math", DayOfWeek::Tuesday, 480, 540),
    ];

    let found = search_day(&entries, DayOfWeek::Tuesday, "math");

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].day, DayOfWeek::Tuesday);
}

#[test]
fn unmatched_query_yields_empty() {
    let entries = vec![entry("Math", DayOfWeek::Monday, 480, 540)];

    assert!(search_day(&entries, DayOfWeek::Monday, "piano").is_empty());
}

// ── Week ordering ───────────────────────────────────────────────────────────

#[test]
fn sort_orders_by_day_then_start_then_end() {
    let mut entries = vec![
        entry("d", DayOfWeek::Tuesday, 480, 540),
        entry("b", DayOfWeek::Monday, 600, 660),
        entry("c", DayOfWeek::Monday, 600, 700),
        entry("a", DayOfWeek::Monday, 480, 540),
        entry("e", DayOfWeek::Sunday, 60, 120),
    ];

    sort_by_day_and_start(&mut entries);

    let order: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        order,
        vec!["a", "b", "c", "d", "e"],
        "Monday first, Sunday last; ties broken by start then end"
    );
}

#[test]
fn sort_is_stable_for_fully_equal_keys() {
    let mut entries = vec![
        entry("first", DayOfWeek::Wednesday, 480, 540),
        entry("second", DayOfWeek::Wednesday, 480, 540),
    ];

    sort_by_day_and_start(&mut entries);

    assert_eq!(entries[0].title, "first");
    assert_eq!(entries[1].title, "second");
}

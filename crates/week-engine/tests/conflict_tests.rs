//! Tests for same-day overlap detection.

use chrono::{TimeZone, Utc};
use week_engine::entry::{MinuteSpan, ScheduleEntry};
use week_engine::time::DayOfWeek;
use week_engine::{describe_conflict, find_conflict, overlap_minutes};

/// Helper to create an entry occupying [start, end) minutes on a day.
fn entry(title: &str, day: DayOfWeek, start: u16, end: u16) -> ScheduleEntry {
    let created = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    ScheduleEntry::new(title, day, MinuteSpan::new(start, end).unwrap(), created)
}

#[test]
fn overlapping_entry_detected() {
    // Math: Mon 08:00-09:00, candidate Lab: Mon 08:20-09:20 → conflict
    let math = entry("Math", DayOfWeek::Monday, 480, 540);
    let lab = entry("Lab", DayOfWeek::Monday, 500, 560);

    let blocking = find_conflict(&lab, std::slice::from_ref(&math), None);

    assert_eq!(
        blocking.map(|e| e.id),
        Some(math.id),
        "candidate overlapping an existing entry should report it"
    );
}

#[test]
fn back_to_back_entries_not_a_conflict() {
    // Existing Mon 08:00-09:00, candidate Mon 09:00-10:00 → adjacent
    let existing = vec![entry("Math", DayOfWeek::Monday, 480, 540)];
    let after = entry("Chem", DayOfWeek::Monday, 540, 600);
    let before = entry("Early", DayOfWeek::Monday, 420, 480);

    assert!(
        find_conflict(&after, &existing, None).is_none(),
        "entry starting exactly at another's end is not a conflict"
    );
    assert!(
        find_conflict(&before, &existing, None).is_none(),
        "entry ending exactly at another's start is not a conflict"
    );
}

#[test]
fn other_days_ignored() {
    // Identical interval on Tuesday does not block a Monday candidate.
    let existing = vec![entry("Math", DayOfWeek::Tuesday, 480, 540)];
    let candidate = entry("Lab", DayOfWeek::Monday, 480, 540);

    assert!(find_conflict(&candidate, &existing, None).is_none());
}

#[test]
fn excluded_id_skipped_during_edit() {
    // Editing an entry in place: the stored version must not block itself.
    let stored = entry("Math", DayOfWeek::Monday, 480, 540);
    let mut edited = stored.clone();
    edited.span = MinuteSpan::new(500, 560).unwrap();

    let existing = vec![stored];
    assert!(
        find_conflict(&edited, &existing, Some(edited.id)).is_none(),
        "an edit must skip the candidate's own stored version"
    );
    assert!(
        find_conflict(&edited, &existing, None).is_some(),
        "without the exclusion the stored version still blocks"
    );
}

#[test]
fn earliest_start_reported_among_multiple_overlaps() {
    // Input order is late-starting first; the 08:00 entry must still win.
    let existing = vec![
        entry("Later", DayOfWeek::Monday, 500, 560),
        entry("Earlier", DayOfWeek::Monday, 480, 540),
    ];
    let candidate = entry("Long", DayOfWeek::Monday, 490, 600);

    let blocking = find_conflict(&candidate, &existing, None)
        .expect("candidate overlaps both existing entries");
    assert_eq!(blocking.title, "Earlier");
}

#[test]
fn equal_starts_report_first_in_input_order() {
    let existing = vec![
        entry("First", DayOfWeek::Monday, 480, 520),
        entry("Second", DayOfWeek::Monday, 480, 530),
    ];
    let candidate = entry("Long", DayOfWeek::Monday, 480, 600);

    let blocking = find_conflict(&candidate, &existing, None)
        .expect("candidate overlaps both existing entries");
    assert_eq!(blocking.title, "First");
}

#[test]
fn fully_contained_entry_is_a_conflict() {
    // Existing Mon 09:00-12:00, candidate Mon 10:00-11:00 fully inside.
    let outer = entry("Long", DayOfWeek::Monday, 540, 720);
    let inner = entry("Short", DayOfWeek::Monday, 600, 660);

    assert!(find_conflict(&inner, std::slice::from_ref(&outer), None).is_some());
    assert_eq!(
        overlap_minutes(&inner, &outer),
        60,
        "overlap equals the contained entry's duration"
    );
}

#[test]
fn overlap_minutes_zero_when_disjoint_or_cross_day() {
    let a = entry("A", DayOfWeek::Monday, 480, 540);
    let b = entry("B", DayOfWeek::Monday, 540, 600);
    let c = entry("C", DayOfWeek::Tuesday, 480, 540);

    assert_eq!(overlap_minutes(&a, &b), 0, "adjacent entries share no minutes");
    assert_eq!(overlap_minutes(&a, &c), 0, "different days share no minutes");
}

#[test]
fn partial_overlap_minutes_counted() {
    // 08:00-09:00 vs 08:30-09:30 → 30 shared minutes, symmetric.
    let a = entry("A", DayOfWeek::Friday, 480, 540);
    let b = entry("B", DayOfWeek::Friday, 510, 570);

    assert_eq!(overlap_minutes(&a, &b), 30);
    assert_eq!(overlap_minutes(&b, &a), 30);
}

#[test]
fn empty_existing_set_never_blocks() {
    let candidate = entry("Solo", DayOfWeek::Sunday, 0, 1440);
    assert!(find_conflict(&candidate, &[], None).is_none());
}

#[test]
fn conflict_message_names_entry_and_interval() {
    let math = entry("Math", DayOfWeek::Monday, 480, 540);
    assert_eq!(
        describe_conflict(&math),
        "This overlaps with \"Math\" (8:00 AM–9:00 AM)."
    );
}

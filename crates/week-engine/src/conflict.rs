//! Detect overlapping entries within a day's schedule.
//!
//! Compares a candidate entry against the existing set before the caller
//! commits an insert or edit. Adjacent entries (where one ends exactly when
//! another starts) are NOT conflicts.

use crate::entry::{EntryId, ScheduleEntry};

/// Find the entry blocking `candidate`, if any.
///
/// Only entries on the candidate's day are considered, and `exclude` lets an
/// edit-in-place skip comparing the entry against its own stored version.
/// Two entries conflict when their half-open minute intervals overlap:
/// `candidate.start < other.end && other.start < candidate.end`, which
/// excludes the back-to-back case where one ends as the other starts.
///
/// When several entries overlap the candidate, the one with the earliest
/// start minute is reported (the first such entry on equal starts),
/// independent of input order.
pub fn find_conflict<'a>(
    candidate: &ScheduleEntry,
    existing: &'a [ScheduleEntry],
    exclude: Option<EntryId>,
) -> Option<&'a ScheduleEntry> {
    let mut blocking: Option<&ScheduleEntry> = None;

    for other in existing {
        if other.day != candidate.day || exclude == Some(other.id) {
            continue;
        }
        // Two intervals overlap iff a.start < b.end AND b.start < a.end.
        // This excludes the adjacent case where a.end == b.start.
        if candidate.span.overlaps(other.span)
            && blocking.is_none_or(|b| other.span.start() < b.span.start())
        {
            blocking = Some(other);
        }
    }

    blocking
}

/// Length of the overlap between two entries in minutes, zero when they do
/// not overlap or sit on different days.
///
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
pub fn overlap_minutes(a: &ScheduleEntry, b: &ScheduleEntry) -> u16 {
    if a.day != b.day || !a.span.overlaps(b.span) {
        return 0;
    }
    a.span.end().min(b.span.end()) - a.span.start().max(b.span.start())
}

/// User-facing sentence naming the blocking entry and its interval, shown
/// when a save is refused.
pub fn describe_conflict(blocking: &ScheduleEntry) -> String {
    format!("This overlaps with \"{}\" ({}).", blocking.title, blocking.span)
}

//! Day filtering, text search, and the deterministic week order.

use crate::entry::ScheduleEntry;
use crate::time::DayOfWeek;

/// Entries scheduled on `day`, in input order.
pub fn entries_on_day(entries: &[ScheduleEntry], day: DayOfWeek) -> Vec<&ScheduleEntry> {
    entries.iter().filter(|e| e.day == day).collect()
}

/// Entries on `day` whose title, location, or note matches `query`.
///
/// Matching is case-insensitive against the whitespace-trimmed query; an
/// empty (or all-whitespace) query matches the whole day.
pub fn search_day<'a>(
    entries: &'a [ScheduleEntry],
    day: DayOfWeek,
    query: &str,
) -> Vec<&'a ScheduleEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| e.day == day)
        .filter(|e| {
            needle.is_empty()
                || e.title.to_lowercase().contains(&needle)
                || e.location.to_lowercase().contains(&needle)
                || e.note.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort a week into display order: day of week, then start minute, then end
/// minute. Feeding this order through the engine keeps outputs stable
/// between calls with the same store contents.
pub fn sort_by_day_and_start(entries: &mut [ScheduleEntry]) {
    entries.sort_by_key(|e| (e.day, e.span.start(), e.span.end()));
}

//! Duplicate one day's schedule onto another.
//!
//! Produces brand-new entries (fresh identifiers) for the caller to insert,
//! re-registering a reminder for every clone that carries a lead. The copy
//! deliberately skips conflict checking: clones may overlap whatever already
//! sits on the target day, and the caller can run
//! [`find_conflict`](crate::conflict::find_conflict) afterwards if it wants
//! to warn.

use chrono::{DateTime, TimeZone, Utc};

use crate::entry::{EntryId, ScheduleEntry};
use crate::reminder::{apply_reminder, Notifier};
use crate::time::DayOfWeek;

/// Clone every `source`-day entry onto `target`.
///
/// Each clone gets a freshly generated id, `day = target`, `created_at =
/// now`, and every other field copied verbatim (title, category link,
/// location, note, interval, color, reminder lead). Clones carrying a lead
/// are registered with the notifier immediately, keyed by the clone's own
/// id. Returns the clones for the caller to insert; an empty source day
/// yields an empty list.
///
/// `source == target` is not special-cased: it duplicates the day onto
/// itself, and callers normally reject that upfront.
pub fn copy_day<Tz: TimeZone>(
    source: DayOfWeek,
    target: DayOfWeek,
    entries: &[ScheduleEntry],
    notifier: &dyn Notifier,
    now: &DateTime<Tz>,
) -> Vec<ScheduleEntry> {
    let created_at = now.with_timezone(&Utc);
    let mut clones = Vec::new();

    for entry in entries.iter().filter(|e| e.day == source) {
        let clone = ScheduleEntry {
            id: EntryId::new(),
            title: entry.title.clone(),
            category_id: entry.category_id,
            location: entry.location.clone(),
            note: entry.note.clone(),
            day: target,
            span: entry.span,
            color: entry.color.clone(),
            reminder_lead: entry.reminder_lead,
            created_at,
        };

        if clone.reminder_lead.is_some() {
            apply_reminder(notifier, &clone, now);
        }

        clones.push(clone);
    }

    tracing::debug!(
        source = %source,
        target = %target,
        copied = clones.len(),
        "day copied"
    );

    clones
}

//! Find the next entry coming up today within a bounded look-ahead window.
//!
//! Pure query over the current entry set: recomputed on every call, with no
//! "already shown" suppression state, so the caller layer can poll it on a
//! timer and render whatever comes back.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::entry::ScheduleEntry;
use crate::time::{day_of_week, minute_of_day};

/// Look-ahead window used when the caller has no opinion, in minutes.
pub const DEFAULT_LOOKAHEAD_MINUTES: u16 = 180;

/// Label substituted when the soonest entry has a blank title.
pub const FALLBACK_TITLE: &str = "Activity";

/// The soonest entry still ahead today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingEvent {
    /// Display title, never blank.
    pub title: String,
    /// Minutes from the reference instant to the entry's start, >= 0.
    pub minutes_until: u16,
}

/// Find the entry starting soonest at or after `now` on the current day.
///
/// Entries on other days or already started are ignored. Among today's
/// survivors the minimum start minute wins, first in input order on ties.
/// Returns `None` when nothing survives or the winner starts more than
/// `lookahead_minutes` away (a delta equal to the window still counts).
/// A blank title is replaced with [`FALLBACK_TITLE`].
pub fn next_upcoming<Tz: TimeZone>(
    entries: &[ScheduleEntry],
    now: &DateTime<Tz>,
    lookahead_minutes: u16,
) -> Option<UpcomingEvent> {
    let today = day_of_week(now);
    let now_minute = minute_of_day(now);

    let mut soonest: Option<&ScheduleEntry> = None;
    for entry in entries {
        if entry.day != today || entry.span.start() < now_minute {
            continue;
        }
        // Strict comparison keeps the first of equal starts.
        if soonest.is_none_or(|s| entry.span.start() < s.span.start()) {
            soonest = Some(entry);
        }
    }

    let entry = soonest?;
    let minutes_until = entry.span.start() - now_minute;
    if minutes_until > lookahead_minutes {
        return None;
    }

    let title = if entry.title.trim().is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        entry.title.clone()
    };

    Some(UpcomingEvent {
        title,
        minutes_until,
    })
}

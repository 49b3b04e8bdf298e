//! Reminder scheduling -- turns an entry's lead time into a weekly-repeating
//! trigger registered with an abstract [`Notifier`].
//!
//! The engine owns the cancel-before-reschedule discipline and the trigger
//! math; actual alarm delivery belongs to the platform behind the trait.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::entry::{EntryId, ReminderLead, ScheduleEntry};
use crate::time::{next_occurrence, TimeOfWeek};

/// Notification title used for every reminder.
pub const REMINDER_TITLE: &str = "Upcoming activity";

/// Registration failure reported by a [`Notifier`]. Opaque to the engine;
/// surfaced to callers inside [`ReminderOutcome::Failed`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct NotifierError(pub String);

/// Platform capability for weekly-repeating alarms. Implementations must
/// treat `cancel` of an unknown key as a no-op.
pub trait Notifier: Send + Sync {
    /// Drop any registration stored under `key`.
    fn cancel(&self, key: &str);

    /// Register a weekly-repeating alarm.
    fn schedule_weekly(&self, request: &ReminderRequest) -> Result<(), NotifierError>;
}

/// Everything a platform needs to register one weekly reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderRequest {
    /// Registration key, stable per entry: see [`registration_key`].
    pub key: String,
    /// First occurrence of the trigger, after the reference instant.
    pub anchor: DateTime<Utc>,
    /// Weekday and minute the trigger repeats at.
    pub repeats_at: TimeOfWeek,
    pub message: ReminderMessage,
}

/// User-facing notification content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderMessage {
    pub title: String,
    pub body: String,
}

/// Result of [`apply_reminder`]. Failures are data, not errors: a rejected
/// registration never rolls back the entry the caller just committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderOutcome {
    /// A weekly trigger is registered, anchored at the contained instant.
    Registered { anchor: DateTime<Utc> },
    /// The entry has no reminder lead; any previous registration was
    /// cancelled and nothing new was registered.
    Disabled,
    /// The notifier rejected the registration. The previous registration is
    /// already cancelled; the entry's next edit retries.
    Failed { reason: String },
}

/// Registration key for an entry's reminder.
pub fn registration_key(id: EntryId) -> String {
    format!("entry-reminder-{id}")
}

/// Notification content for an entry reminder.
pub fn reminder_message(title: &str, lead: ReminderLead) -> ReminderMessage {
    ReminderMessage {
        title: REMINDER_TITLE.to_string(),
        body: format!("{} starts in {} minutes", title, lead.minutes()),
    }
}

/// The registration an entry calls for, or `None` when its reminders are
/// off. The trigger fires `lead` minutes before the start, clamped to
/// midnight, weekly on the entry's day; the anchor is its next occurrence
/// after `now`.
pub fn build_request<Tz: TimeZone>(
    entry: &ScheduleEntry,
    now: &DateTime<Tz>,
) -> Option<ReminderRequest> {
    let lead = entry.reminder_lead?;

    let trigger_minute = entry.span.start().saturating_sub(lead.minutes());
    let repeats_at = TimeOfWeek::new(entry.day, trigger_minute);
    let anchor = next_occurrence(repeats_at, now).with_timezone(&Utc);

    Some(ReminderRequest {
        key: registration_key(entry.id),
        anchor,
        repeats_at,
        message: reminder_message(&entry.title, lead),
    })
}

/// Synchronize an entry's reminder registration with its current fields.
///
/// Call after creating an entry and after any edit touching the start time,
/// day, lead, or title. The previous registration keyed by the entry id is
/// always cancelled first (cancelling an unknown key is a no-op), so the
/// call is idempotent. With no lead, reminders for the entry are now off.
/// Otherwise the trigger fires `lead` minutes before the start (clamped to
/// midnight) every week, first at the next occurrence after `now`.
///
/// A rejected registration comes back as [`ReminderOutcome::Failed`] and is
/// logged as a warning; it never becomes an `Err`, because the entry commit
/// it follows must stand regardless.
pub fn apply_reminder<Tz: TimeZone>(
    notifier: &dyn Notifier,
    entry: &ScheduleEntry,
    now: &DateTime<Tz>,
) -> ReminderOutcome {
    notifier.cancel(&registration_key(entry.id));

    let Some(request) = build_request(entry, now) else {
        return ReminderOutcome::Disabled;
    };
    let anchor = request.anchor;

    match notifier.schedule_weekly(&request) {
        Ok(()) => ReminderOutcome::Registered { anchor },
        Err(err) => {
            tracing::warn!(
                entry = %entry.id,
                error = %err,
                "reminder registration rejected; entry keeps no active reminder until its next edit"
            );
            ReminderOutcome::Failed { reason: err.0 }
        }
    }
}

/// Cancel an entry's reminder registration. The delete path: the entry is
/// going away, so nothing is re-registered.
pub fn clear_reminder(notifier: &dyn Notifier, id: EntryId) {
    notifier.cancel(&registration_key(id));
}

//! # week-engine
//!
//! Deterministic engine for a personal weekly-recurring timetable: entries
//! anchored to a day of week and a half-open minute interval, overlap
//! conflict detection, calendar-accurate weekly reminder triggers, a bounded
//! "what's next" query, and day-to-day duplication.
//!
//! Every operation is a synchronous pure function over caller-supplied
//! values, and the reference instant is always an explicit zoned parameter.
//! Persistence sits behind [`store::Store`] and alarm delivery behind
//! [`reminder::Notifier`], both implemented by the embedding layer.
//!
//! ## Modules
//!
//! - [`time`] -- day-of-week and minute-of-day values, next-occurrence projection
//! - [`entry`] -- the schedule entry model and its validated field types
//! - [`conflict`] -- half-open overlap detection within a day
//! - [`reminder`] -- weekly trigger registration through a [`reminder::Notifier`]
//! - [`upcoming`] -- soonest entry today within a look-ahead window
//! - [`template`] -- duplicate one day's schedule onto another
//! - [`filter`] -- day filtering, text search, display ordering
//! - [`category`] -- categories and display fallback resolution
//! - [`color`] -- opaque color tags
//! - [`store`] -- the storage contract consumed by callers
//! - [`error`] -- error types

pub mod category;
pub mod color;
pub mod conflict;
pub mod entry;
pub mod error;
pub mod filter;
pub mod reminder;
pub mod store;
pub mod template;
pub mod time;
pub mod upcoming;

pub use category::{resolve_display, Category, CategoryId, ResolvedDisplay};
pub use color::{ColorTag, Rgba, DEFAULT_COLOR};
pub use conflict::{describe_conflict, find_conflict, overlap_minutes};
pub use entry::{EntryId, MinuteSpan, ReminderLead, ScheduleEntry};
pub use error::{Result, ScheduleError};
pub use filter::{entries_on_day, search_day, sort_by_day_and_start};
pub use reminder::{
    apply_reminder, build_request, clear_reminder, registration_key, reminder_message, Notifier,
    NotifierError, ReminderMessage, ReminderOutcome, ReminderRequest,
};
pub use store::{MemoryStore, Store};
pub use template::copy_day;
pub use time::{
    day_of_week, format_minutes, minute_of_day, next_occurrence, DayOfWeek, TimeOfWeek,
    MAX_MINUTE, MINUTES_PER_DAY,
};
pub use upcoming::{next_upcoming, UpcomingEvent, DEFAULT_LOOKAHEAD_MINUTES, FALLBACK_TITLE};

//! The schedule entry data model.
//!
//! Range rules live in the field types themselves: a `MinuteSpan` cannot be
//! inverted or run past midnight, a `ReminderLead` cannot leave its bounds,
//! and a `DayOfWeek` is always one of the seven days. An entry built from
//! these parts stays valid under in-place edits, so the struct exposes plain
//! public fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::CategoryId;
use crate::color::ColorTag;
use crate::error::{Result, ScheduleError};
use crate::time::{format_minutes, DayOfWeek, MINUTES_PER_DAY};

/// Stable identifier for a schedule entry. Assigned at creation, immutable
/// for the entry's lifetime, and used as the reminder-registration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        EntryId(Uuid::new_v4())
    }

    /// Parse the canonical hyphenated form.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidId` when `s` is not a UUID.
    pub fn parse(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(EntryId)
            .map_err(|_| ScheduleError::InvalidId(s.to_string()))
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Half-open minute interval `[start, end)` within a single day.
///
/// Invariant: `start < end <= 1440`. The end minute is excluded, so two
/// spans sharing a boundary minute are back-to-back, not overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMinuteSpan", into = "RawMinuteSpan")]
pub struct MinuteSpan {
    start: u16,
    end: u16,
}

impl MinuteSpan {
    /// Build a span, rejecting inverted, empty, or out-of-range intervals.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidSpan` when `start >= end` or
    /// `end > 1440`.
    pub fn new(start: u16, end: u16) -> Result<Self> {
        if start >= end || end > MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidSpan { start, end });
        }
        Ok(MinuteSpan { start, end })
    }

    /// First minute covered by the span.
    pub fn start(self) -> u16 {
        self.start
    }

    /// Exclusive end minute, at most 1440.
    pub fn end(self) -> u16 {
        self.end
    }

    pub fn duration_minutes(self) -> u16 {
        self.end - self.start
    }

    /// Half-open overlap test: touching endpoints do not overlap.
    pub fn overlaps(self, other: MinuteSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for MinuteSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}–{}", format_minutes(self.start), format_minutes(self.end))
    }
}

/// Serde shape for [`MinuteSpan`]; conversion re-runs the range checks.
#[derive(Serialize, Deserialize)]
struct RawMinuteSpan {
    start: u16,
    end: u16,
}

impl TryFrom<RawMinuteSpan> for MinuteSpan {
    type Error = ScheduleError;

    fn try_from(raw: RawMinuteSpan) -> Result<Self> {
        MinuteSpan::new(raw.start, raw.end)
    }
}

impl From<MinuteSpan> for RawMinuteSpan {
    fn from(span: MinuteSpan) -> Self {
        RawMinuteSpan {
            start: span.start,
            end: span.end,
        }
    }
}

/// Reminder lead time: minutes before an entry's start at which its
/// reminder fires, between 5 and 180 inclusive. An entry with no lead has
/// reminders disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ReminderLead(u16);

impl ReminderLead {
    pub const MIN_MINUTES: u16 = 5;
    pub const MAX_MINUTES: u16 = 180;

    /// Build a lead, rejecting values outside 5..=180.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidLead` when out of range.
    pub fn new(minutes: u16) -> Result<Self> {
        if !(Self::MIN_MINUTES..=Self::MAX_MINUTES).contains(&minutes) {
            return Err(ScheduleError::InvalidLead(minutes));
        }
        Ok(ReminderLead(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for ReminderLead {
    type Error = ScheduleError;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ReminderLead> for u16 {
    fn from(lead: ReminderLead) -> u16 {
        lead.minutes()
    }
}

/// One recurring weekly activity: a titled half-open minute interval on a
/// day of the week, with an optional category link, free-text location and
/// note, a color tag, and an optional reminder lead.
///
/// Entries are plain values. The caller layer owns their lifecycle (create,
/// edit in place, delete); the engine only reads the current set, except
/// that reminder registration is re-driven through
/// [`apply_reminder`](crate::reminder::apply_reminder) after any edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub note: String,
    pub day: DayOfWeek,
    pub span: MinuteSpan,
    #[serde(default)]
    pub color: ColorTag,
    #[serde(default)]
    pub reminder_lead: Option<ReminderLead>,
    /// Informational only; never drives engine behavior.
    pub created_at: DateTime<Utc>,
}

impl ScheduleEntry {
    /// New entry with a fresh identifier and empty optional fields. The
    /// creation instant comes from the caller, like every other clock read.
    pub fn new(
        title: impl Into<String>,
        day: DayOfWeek,
        span: MinuteSpan,
        created_at: DateTime<Utc>,
    ) -> Self {
        ScheduleEntry {
            id: EntryId::new(),
            title: title.into(),
            category_id: None,
            location: String::new(),
            note: String::new(),
            day,
            span,
            color: ColorTag::default(),
            reminder_lead: None,
            created_at,
        }
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_color(mut self, color: ColorTag) -> Self {
        self.color = color;
        self
    }

    pub fn with_reminder_lead(mut self, lead: ReminderLead) -> Self {
        self.reminder_lead = Some(lead);
        self
    }
}

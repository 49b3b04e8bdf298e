//! Day-of-week and minute-of-day values -- 12-hour formatting, platform
//! weekday mapping, and projection onto the next absolute calendar occurrence.
//!
//! Every function reads calendar fields (weekday, local date, minute of day)
//! from an explicitly supplied zoned `DateTime`; nothing here consults a
//! system clock, so results are pure functions of their inputs.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Weekday,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Minutes in a day. Interval ends may equal it as an exclusive bound.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Largest valid minute-of-day position (23:59).
pub const MAX_MINUTE: u16 = MINUTES_PER_DAY - 1;

/// Day of the week on the engine's Monday-first numbering: 1 = Monday
/// through 7 = Sunday. Serializes as that number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl DayOfWeek {
    /// All seven days in engine order, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Parse an engine day number (1 = Monday .. 7 = Sunday).
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDay` for anything outside 1..=7.
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1 => Ok(DayOfWeek::Monday),
            2 => Ok(DayOfWeek::Tuesday),
            3 => Ok(DayOfWeek::Wednesday),
            4 => Ok(DayOfWeek::Thursday),
            5 => Ok(DayOfWeek::Friday),
            6 => Ok(DayOfWeek::Saturday),
            7 => Ok(DayOfWeek::Sunday),
            other => Err(ScheduleError::InvalidDay(other)),
        }
    }

    /// Map a Sunday-first platform weekday (1 = Sunday .. 7 = Saturday) onto
    /// the engine numbering: `engineDay = ((platform + 5) mod 7) + 1`.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDay` for anything outside 1..=7.
    pub fn from_sunday_first(platform: u8) -> Result<Self> {
        if !(1..=7).contains(&platform) {
            return Err(ScheduleError::InvalidDay(platform));
        }
        Self::from_number(((platform + 5) % 7) + 1)
    }

    /// Convert from a chrono weekday.
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }

    /// Convert to a chrono weekday.
    pub fn weekday(self) -> Weekday {
        match self {
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
            DayOfWeek::Sunday => Weekday::Sun,
        }
    }

    /// Engine day number, 1 = Monday .. 7 = Sunday.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Three-letter label, "Mon" through "Sun".
    pub fn short_name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
            DayOfWeek::Sunday => "Sun",
        }
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = ScheduleError;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_number(value)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> u8 {
        day.number()
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// A position in the recurring week: a day plus a minute offset from local
/// midnight. The constructor clamps the minute to 23:59 rather than wrapping
/// into a neighbouring day, so a value always names a real wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTimeOfWeek", into = "RawTimeOfWeek")]
pub struct TimeOfWeek {
    day: DayOfWeek,
    minute: u16,
}

impl TimeOfWeek {
    pub fn new(day: DayOfWeek, minute: u16) -> Self {
        TimeOfWeek {
            day,
            minute: minute.min(MAX_MINUTE),
        }
    }

    /// Build a position, rejecting an out-of-range minute instead of
    /// clamping it. Boundary code validating external input wants this;
    /// internal trigger math uses [`TimeOfWeek::new`].
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidMinute` when `minute` is past 23:59.
    pub fn checked(day: DayOfWeek, minute: u16) -> Result<Self> {
        if minute > MAX_MINUTE {
            return Err(ScheduleError::InvalidMinute(minute));
        }
        Ok(TimeOfWeek { day, minute })
    }

    pub fn day(self) -> DayOfWeek {
        self.day
    }

    /// Minute offset from midnight, 0..=1439.
    pub fn minute(self) -> u16 {
        self.minute
    }
}

impl std::fmt::Display for TimeOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day.short_name(), format_minutes(self.minute))
    }
}

/// Serde shape for [`TimeOfWeek`]; conversion re-applies the minute clamp.
#[derive(Serialize, Deserialize)]
struct RawTimeOfWeek {
    day: DayOfWeek,
    minute: u16,
}

impl From<RawTimeOfWeek> for TimeOfWeek {
    fn from(raw: RawTimeOfWeek) -> Self {
        TimeOfWeek::new(raw.day, raw.minute)
    }
}

impl From<TimeOfWeek> for RawTimeOfWeek {
    fn from(time: TimeOfWeek) -> Self {
        RawTimeOfWeek {
            day: time.day,
            minute: time.minute,
        }
    }
}

/// Format a minute-of-day on the 12-hour clock, e.g. `8:05 AM`.
///
/// Hour zero renders as 12, so minute 0 is `12:00 AM` and minute 720 is
/// `12:00 PM`.
pub fn format_minutes(minute: u16) -> String {
    let hour = minute / 60;
    let min = minute % 60;
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = ((hour + 11) % 12) + 1;
    format!("{}:{:02} {}", display_hour, min, meridiem)
}

/// Engine day of week for a zoned instant, read in that instant's timezone.
pub fn day_of_week<Tz: TimeZone>(now: &DateTime<Tz>) -> DayOfWeek {
    DayOfWeek::from_weekday(now.weekday())
}

/// Minute offset from local midnight for a zoned instant.
pub fn minute_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> u16 {
    (now.hour() * 60 + now.minute()) as u16
}

/// Project a weekly position onto its next concrete calendar occurrence.
///
/// Returns the first instant strictly after `now` whose local weekday and
/// minute of day match `time`, expressed in `now`'s own timezone. An instant
/// exactly equal to `now` resolves one week ahead, which keeps weekly
/// rescheduling periodic: feeding a result back in as `now` advances by
/// exactly seven calendar days.
///
/// The week step is calendar arithmetic on the local date, so occurrences
/// stay at the requested wall-clock time across DST transitions. A time that
/// falls inside a spring-forward gap resolves to the first valid instant
/// after the gap; a time that occurs twice during a fall-back fold resolves
/// to the earlier occurrence.
pub fn next_occurrence<Tz: TimeZone>(time: TimeOfWeek, now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let days_ahead = i64::from((time.day().number() + 7 - day_of_week(now).number()) % 7);
    let date = now.date_naive() + Duration::days(days_ahead);

    let candidate = resolve_wall_clock(&tz, date, time.minute());
    if candidate > *now {
        candidate
    } else {
        // Today's slot already passed (or equals now): take next week's.
        resolve_wall_clock(&tz, date + Duration::days(7), time.minute())
    }
}

/// Materialize the wall-clock time `minute` on `date` in `tz`.
fn resolve_wall_clock<Tz: TimeZone>(tz: &Tz, date: NaiveDate, minute: u16) -> DateTime<Tz> {
    let naive = date.and_time(naive_time_at(minute));
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            // Inside a spring-forward gap. Probe forward in 15-minute steps
            // until the clock exists again; no real zone gaps more than a
            // few hours.
            let mut probe = naive;
            for _ in 0..16 {
                probe += Duration::minutes(15);
                if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
                    return dt;
                }
            }
            tz.from_utc_datetime(&naive)
        }
    }
}

/// Minute-of-day as a `NaiveTime`. Addition from midnight cannot wrap
/// because callers clamp to [`MAX_MINUTE`].
fn naive_time_at(minute: u16) -> NaiveTime {
    NaiveTime::MIN + Duration::minutes(i64::from(minute))
}

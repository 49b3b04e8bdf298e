//! WASM bindings for week-engine.
//!
//! Exposes conflict detection, next-occurrence projection, the upcoming
//! lookup, and day copying to JavaScript via `wasm-bindgen`. All complex
//! types cross the boundary as JSON strings; entries use the same JSON shape
//! `week-engine` itself serializes.
//!
//! Reminder delivery stays on the JavaScript side: `copyDay` returns the
//! clones without touching any notifier, and the caller registers triggers
//! itself by feeding each entry through [`reminder_request`].
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p week-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/week-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/week_engine_wasm.wasm
//! # Rename .js -> .cjs for ESM compatibility
//! mv packages/week-engine-js/wasm/week_engine_wasm.js \
//!    packages/week-engine-js/wasm/week_engine_wasm.cjs
//! ```

use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use week_engine::entry::{EntryId, ScheduleEntry};
use week_engine::reminder::{Notifier, NotifierError, ReminderRequest};
use week_engine::time::{DayOfWeek, TimeOfWeek, MAX_MINUTE};

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// A detected conflict: the blocking entry plus the user-facing sentence.
#[derive(Serialize)]
struct ConflictDto {
    entry: ScheduleEntry,
    message: String,
}

/// Notifier stand-in for `copyDay`: registration happens in JavaScript.
struct DeferredNotifier;

impl Notifier for DeferredNotifier {
    fn cancel(&self, _key: &str) {}

    fn schedule_weekly(&self, _request: &ReminderRequest) -> Result<(), NotifierError> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Parse an IANA timezone name, e.g. "America/New_York".
fn parse_timezone(timezone: &str) -> Result<chrono_tz::Tz, JsValue> {
    timezone
        .parse()
        .map_err(|_| JsValue::from_str(&format!("Unknown timezone '{}'", timezone)))
}

/// Parse an ISO 8601 datetime string into the given timezone.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-03-04T14:00:00Z")
/// and naive local time (e.g., "2026-03-04T14:00:00"), which is interpreted
/// as UTC before conversion.
fn parse_instant(s: &str, tz: chrono_tz::Tz) -> Result<DateTime<chrono_tz::Tz>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc().with_timezone(&tz))
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_day(number: u8) -> Result<DayOfWeek, JsValue> {
    DayOfWeek::from_number(number).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_entry(json: &str) -> Result<ScheduleEntry, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid entry JSON: {}", e)))
}

fn parse_entries(json: &str) -> Result<Vec<ScheduleEntry>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid entries JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Format a minute-of-day on the 12-hour clock, e.g. `"8:05 AM"`.
///
/// Values past 23:59 are clamped to 23:59.
#[wasm_bindgen(js_name = "formatMinutes")]
pub fn format_minutes(minute: u16) -> String {
    week_engine::time::format_minutes(minute.min(MAX_MINUTE))
}

/// Map a Sunday-first platform weekday (1 = Sunday .. 7 = Saturday) onto the
/// engine numbering (1 = Monday .. 7 = Sunday).
#[wasm_bindgen(js_name = "dayFromSundayFirst")]
pub fn day_from_sunday_first(platform: u8) -> Result<u8, JsValue> {
    DayOfWeek::from_sunday_first(platform)
        .map(|d| d.number())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Engine day number (1 = Monday .. 7 = Sunday) for an instant, read in the
/// given timezone.
///
/// # Arguments
/// - `now` -- ISO 8601 datetime string
/// - `timezone` -- IANA timezone (e.g., "America/New_York")
#[wasm_bindgen(js_name = "currentDayOfWeek")]
pub fn current_day_of_week(now: &str, timezone: &str) -> Result<u8, JsValue> {
    let tz = parse_timezone(timezone)?;
    let now = parse_instant(now, tz)?;
    Ok(week_engine::time::day_of_week(&now).number())
}

/// Minute offset from local midnight (0..=1439) for an instant, read in the
/// given timezone.
#[wasm_bindgen(js_name = "currentMinuteOfDay")]
pub fn current_minute_of_day(now: &str, timezone: &str) -> Result<u16, JsValue> {
    let tz = parse_timezone(timezone)?;
    let now = parse_instant(now, tz)?;
    Ok(week_engine::time::minute_of_day(&now))
}

/// Project a weekly position onto its next concrete occurrence after `now`.
///
/// Returns an RFC 3339 datetime string in the given timezone.
///
/// # Arguments
/// - `day` -- engine day number, 1 = Monday .. 7 = Sunday
/// - `minute` -- minute of day, 0..=1439
/// - `now` -- ISO 8601 datetime string for the reference instant
/// - `timezone` -- IANA timezone the weekly position lives in
#[wasm_bindgen(js_name = "nextOccurrence")]
pub fn next_occurrence(
    day: u8,
    minute: u16,
    now: &str,
    timezone: &str,
) -> Result<String, JsValue> {
    let day = parse_day(day)?;
    let time = TimeOfWeek::checked(day, minute).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let tz = parse_timezone(timezone)?;
    let now = parse_instant(now, tz)?;

    let result = week_engine::time::next_occurrence(time, &now);
    Ok(result.to_rfc3339())
}

/// Find the entry blocking `candidate`, if any.
///
/// `candidate_json` is one entry object and `existing_json` an array of
/// them; `exclude_id` lets an edit skip its own stored version. Returns a
/// JSON string: `null` when the slot is free, otherwise an object with the
/// blocking `entry` and a display `message`.
#[wasm_bindgen(js_name = "findConflict")]
pub fn find_conflict(
    candidate_json: &str,
    existing_json: &str,
    exclude_id: Option<String>,
) -> Result<String, JsValue> {
    let candidate = parse_entry(candidate_json)?;
    let existing = parse_entries(existing_json)?;
    let exclude = match exclude_id {
        Some(id) => {
            Some(EntryId::parse(&id).map_err(|e| JsValue::from_str(&e.to_string()))?)
        }
        None => None,
    };

    let conflict = week_engine::conflict::find_conflict(&candidate, &existing, exclude).map(
        |blocking| ConflictDto {
            message: week_engine::conflict::describe_conflict(blocking),
            entry: blocking.clone(),
        },
    );

    to_json(&conflict)
}

/// Find the entry starting soonest at or after `now` on the current day.
///
/// Returns a JSON string: `null` when nothing qualifies within the window,
/// otherwise `{title, minutes_until}`. `lookahead_minutes` defaults to 180.
#[wasm_bindgen(js_name = "nextUpcoming")]
pub fn next_upcoming(
    entries_json: &str,
    now: &str,
    timezone: &str,
    lookahead_minutes: Option<u16>,
) -> Result<String, JsValue> {
    let entries = parse_entries(entries_json)?;
    let tz = parse_timezone(timezone)?;
    let now = parse_instant(now, tz)?;
    let lookahead =
        lookahead_minutes.unwrap_or(week_engine::upcoming::DEFAULT_LOOKAHEAD_MINUTES);

    to_json(&week_engine::upcoming::next_upcoming(&entries, &now, lookahead))
}

/// Clone every `source`-day entry onto `target`.
///
/// Returns the clones as a JSON array: fresh ids, `day = target`, creation
/// stamped at `now`, every other field copied verbatim. No conflict check
/// runs against the target day, and no reminders are registered here; feed
/// each clone through [`reminderRequest`](reminder_request) to register its
/// trigger.
#[wasm_bindgen(js_name = "copyDay")]
pub fn copy_day(
    source: u8,
    target: u8,
    entries_json: &str,
    now: &str,
    timezone: &str,
) -> Result<String, JsValue> {
    let source = parse_day(source)?;
    let target = parse_day(target)?;
    let entries = parse_entries(entries_json)?;
    let tz = parse_timezone(timezone)?;
    let now = parse_instant(now, tz)?;

    let clones = week_engine::template::copy_day(source, target, &entries, &DeferredNotifier, &now);
    to_json(&clones)
}

/// The weekly reminder registration an entry calls for.
///
/// Returns a JSON string: `null` when the entry has no reminder lead,
/// otherwise `{key, anchor, repeats_at: {day, minute}, message: {title,
/// body}}` with the anchor as an RFC 3339 UTC string. The anchor is the
/// trigger's next occurrence after `now` in the given timezone.
#[wasm_bindgen(js_name = "reminderRequest")]
pub fn reminder_request(entry_json: &str, now: &str, timezone: &str) -> Result<String, JsValue> {
    let entry = parse_entry(entry_json)?;
    let tz = parse_timezone(timezone)?;
    let now = parse_instant(now, tz)?;

    to_json(&week_engine::reminder::build_request(&entry, &now))
}

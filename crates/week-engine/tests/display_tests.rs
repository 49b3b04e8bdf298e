//! Tests for category fallback resolution and color decoding.

use chrono::{DateTime, TimeZone, Utc};
use week_engine::category::{resolve_display, Category, CategoryId};
use week_engine::color::{ColorTag, Rgba, DEFAULT_COLOR};
use week_engine::entry::{MinuteSpan, ScheduleEntry};
use week_engine::time::DayOfWeek;

fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

fn entry(title: &str) -> ScheduleEntry {
    let span = MinuteSpan::new(480, 540).unwrap();
    ScheduleEntry::new(title, DayOfWeek::Monday, span, created())
}

// ── Category resolution ─────────────────────────────────────────────────────

#[test]
fn linked_category_supplies_title_and_color() {
    let category = Category::new("Lectures", created()).with_color(ColorTag::from("#AA0000"));
    let e = entry("Math").with_category(category.id);

    let display = resolve_display(&e, std::slice::from_ref(&category));

    assert_eq!(display.title, "Lectures");
    assert_eq!(display.color, ColorTag::from("#AA0000"));
}

#[test]
fn entry_location_wins_over_the_category_default() {
    let category = Category::new("Lectures", created()).with_default_location("Hall A");
    let e = entry("Math")
        .with_category(category.id)
        .with_location("Room 12");

    let display = resolve_display(&e, std::slice::from_ref(&category));

    assert_eq!(display.location, "Room 12");
}

#[test]
fn blank_entry_location_falls_back_to_the_category_default() {
    let category = Category::new("Lectures", created()).with_default_location("Hall A");
    let e = entry("Math")
        .with_category(category.id)
        .with_location("   ");

    let display = resolve_display(&e, std::slice::from_ref(&category));

    assert_eq!(display.location, "Hall A");
}

#[test]
fn dangling_category_id_resolves_from_the_entry_itself() {
    // The referenced category was deleted; the entry keeps working.
    let e = entry("Math")
        .with_category(CategoryId::new())
        .with_location("Room 12")
        .with_color(ColorTag::from("#00FF00"));

    let display = resolve_display(&e, &[]);

    assert_eq!(display.title, "Math");
    assert_eq!(display.location, "Room 12");
    assert_eq!(display.color, ColorTag::from("#00FF00"));
}

#[test]
fn unlinked_entry_uses_its_own_fields() {
    let e = entry("Math");

    let display = resolve_display(&e, &[]);

    assert_eq!(display.title, "Math");
    assert_eq!(display.location, "");
    assert_eq!(display.color, ColorTag::default());
}

#[test]
fn resolved_text_fields_are_trimmed() {
    let category = Category::new("  Lectures  ", created()).with_default_location(" Hall A ");
    let e = entry("Math").with_category(category.id);

    let display = resolve_display(&e, std::slice::from_ref(&category));

    assert_eq!(display.title, "Lectures");
    assert_eq!(display.location, "Hall A");
}

#[test]
fn lookup_matches_by_id_among_many_categories() {
    let lectures = Category::new("Lectures", created());
    let sports = Category::new("Sports", created());
    let e = entry("Gym").with_category(sports.id);

    let display = resolve_display(&e, &[lectures, sports.clone()]);

    assert_eq!(display.title, "Sports");
}

// ── Color decoding ──────────────────────────────────────────────────────────

#[test]
fn six_digit_hex_reads_as_rgb_with_full_alpha() {
    let rgba = ColorTag::from("#3B82F6").rgba();

    assert_eq!(
        rgba,
        Rgba {
            r: 0x3B,
            g: 0x82,
            b: 0xF6,
            a: 0xFF
        }
    );
}

#[test]
fn eight_digit_hex_reads_as_argb() {
    let rgba = ColorTag::from("#80FF8800").rgba();

    assert_eq!(
        rgba,
        Rgba {
            r: 0xFF,
            g: 0x88,
            b: 0x00,
            a: 0x80
        }
    );
}

#[test]
fn lowercase_and_missing_hash_decode_the_same() {
    assert_eq!(
        ColorTag::from("#3b82f6").rgba(),
        ColorTag::from("3B82F6").rgba()
    );
}

#[test]
fn unparseable_colors_degrade_to_opaque_black() {
    assert_eq!(ColorTag::from("").rgba(), Rgba::BLACK);
    assert_eq!(ColorTag::from("#12345").rgba(), Rgba::BLACK);
    assert_eq!(ColorTag::from("not a color").rgba(), Rgba::BLACK);
}

#[test]
fn stored_string_survives_round_trips_untouched() {
    let tag = ColorTag::from("#AbCdEf");

    assert_eq!(tag.as_str(), "#AbCdEf");
    assert_eq!(tag.to_string(), "#AbCdEf");
}

#[test]
fn default_color_is_the_medium_blue() {
    assert_eq!(ColorTag::default().as_str(), DEFAULT_COLOR);
    assert_eq!(
        ColorTag::default().rgba(),
        Rgba {
            r: 0x3B,
            g: 0x82,
            b: 0xF6,
            a: 0xFF
        }
    );
}

//! End-to-end tests for the flows the lesson screens drive: creating a
//! lesson from form input, re-opening a stored lesson for editing, and
//! rendering a month of fetched sessions.

use std::io::Write;

use lessontime::calendar::{date_key, DayBuckets, MonthGrid};
use lessontime::models::DurationHours;
use lessontime::parsing::{
    parse_display_date, parse_display_time, parse_sessions_json, ParseError,
};
use lessontime::time::{
    add_duration, duration_between, format_display_time_12h, format_wire_date, format_wire_time,
};

/// The lesson-creation flow: raw form strings in, wire-format request
/// fields out. Start "09:00 AM" with the 1.5-hour option must produce the
/// fixed ("09:00", "10:30") pair the backend expects.
#[test]
fn test_create_lesson_flow() {
    let date = parse_display_date("1/5/2026").unwrap();
    let start = parse_display_time("09:00 AM").unwrap();

    let end = add_duration(&start, DurationHours::NinetyMinutes);

    assert_eq!(format_wire_date(&date), "2026-01-05");
    assert_eq!(format_wire_time(&start), "09:00");
    assert_eq!(format_wire_time(&end), "10:30");
}

/// The lesson-edit flow: stored wire times come back and the form must
/// re-select the duration option and redisplay the 12-hour start time.
#[test]
fn test_edit_lesson_flow() {
    // Wire times re-enter through the display parser after reformatting in
    // the UI; model them directly here.
    let start = parse_display_time("02:00 PM").unwrap();
    let end = parse_display_time("03:30 PM").unwrap();
    assert_eq!(format_wire_time(&start), "14:00");
    assert_eq!(format_wire_time(&end), "15:30");

    let hours = duration_between(&start, &end);
    assert_eq!(DurationHours::from_hours(hours), Some(DurationHours::NinetyMinutes));

    assert_eq!(format_display_time_12h(&start), "02:00 PM");
}

/// Invalid form input stops at the parsing boundary.
#[test]
fn test_form_rejects_bad_input() {
    assert_eq!(parse_display_date("02/30/2026"), Err(ParseError::InvalidDate));
    assert_eq!(parse_display_time("25:00 AM"), Err(ParseError::InvalidFormat));
}

/// The sessions-screen flow: fetched JSON -> buckets -> month grid cells.
#[test]
fn test_render_month_of_sessions() {
    let json = r##"[
        {"date": "2026-01-05", "startTime": "09:00", "endTime": "10:30",
         "color": "#4A90D9", "students": ["Ada"]},
        {"date": "2026-01-05T00:00:00.000000Z", "startTime": "14:00", "endTime": "15:00"},
        {"date": "2026-02-01", "startTime": "09:00", "endTime": "10:00"}
    ]"##;
    let mut temp_file = tempfile::NamedTempFile::new().unwrap();
    write!(temp_file, "{}", json).unwrap();

    let sessions = parse_sessions_json(temp_file.path()).unwrap();
    let buckets = DayBuckets::from_sessions(&sessions);
    let grid = MonthGrid::build(2026, 0);

    // Both the bare date and the full timestamp land on January 5th.
    let jan5 = grid.sessions_for_day(&buckets, Some(5));
    assert_eq!(jan5.len(), 2);
    assert_eq!(jan5[0].start_time, "09:00");
    assert_eq!(jan5[1].start_time, "14:00");

    // The February session is invisible to the January grid.
    assert!(grid.sessions_for_day(&buckets, Some(1)).is_empty());

    // Selection comparisons route through the same key constructor.
    assert_eq!(grid.date_key_for(5), date_key(2026, 0, 5));
}

/// A late-night lesson wraps past midnight without advancing the date;
/// the request still carries the entry date.
#[test]
fn test_cross_midnight_lesson_keeps_entry_date() {
    let date = parse_display_date("01/31/2026").unwrap();
    let start = parse_display_time("11:00 PM").unwrap();
    let end = add_duration(&start, DurationHours::TwoHours);

    assert_eq!(format_wire_time(&end), "01:00");
    assert_eq!(format_wire_date(&date), "2026-01-31");
}

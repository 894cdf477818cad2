//! Parsers for the human-facing date and time formats.
//!
//! This is the engine's only validation boundary: form handlers call these
//! two functions on raw input strings and must not proceed to the formatting
//! or duration functions on an error result.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{CalendarDate, ClockTime};
use crate::parsing::error::{ParseError, ParseResult};

/// Shape of a 12-hour display time: `hh:mm AM|PM`, case-insensitive,
/// optional whitespace before the meridiem.
static DISPLAY_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(AM|PM)$").expect("display time pattern is valid")
});

/// Parses a display date string (`mm/dd/yyyy`, mixed padding accepted) into
/// a validated [`CalendarDate`].
///
/// Fails with [`ParseError::InvalidFormat`] unless the input is exactly
/// three `/`-separated numeric groups, and with [`ParseError::InvalidDate`]
/// when the groups name no real calendar date. Validation goes through
/// `NaiveDate::from_ymd_opt`, which refuses impossible dates outright
/// rather than rolling them into the next month, so `02/30/2026` is an
/// error and never becomes March 2nd.
///
/// # Examples
///
/// ```
/// use lessontime::parsing::parse_display_date;
/// use lessontime::models::CalendarDate;
///
/// assert_eq!(parse_display_date("1/5/2026"), Ok(CalendarDate::new(2026, 0, 5)));
/// assert!(parse_display_date("02/30/2026").is_err());
/// ```
pub fn parse_display_date(s: &str) -> ParseResult<CalendarDate> {
    let groups: Vec<&str> = s.split('/').collect();
    if groups.len() != 3 {
        return Err(ParseError::InvalidFormat);
    }

    let month: u32 = groups[0].parse().map_err(|_| ParseError::InvalidFormat)?;
    let day: u32 = groups[1].parse().map_err(|_| ParseError::InvalidFormat)?;
    let year: i32 = groups[2].parse().map_err(|_| ParseError::InvalidFormat)?;

    // Construct the real date to validate; a None here means the components
    // name no actual day on the calendar.
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Err(ParseError::InvalidDate);
    }

    Ok(CalendarDate::new(year, month - 1, day))
}

/// Parses a 12-hour display time string (`hh:mm AM|PM`) into a 24-hour
/// [`ClockTime`].
///
/// Meridiem conversion: 12 AM is hour 0, 12 PM stays 12, 1-11 PM add 12.
/// Anything outside the expected shape (missing meridiem, hour not in
/// 1-12, minute above 59, single-digit minute) is
/// [`ParseError::InvalidFormat`].
///
/// # Examples
///
/// ```
/// use lessontime::parsing::parse_display_time;
/// use lessontime::models::ClockTime;
///
/// assert_eq!(parse_display_time("12:00 AM"), Ok(ClockTime::new(0, 0)));
/// assert_eq!(parse_display_time("11:30 PM"), Ok(ClockTime::new(23, 30)));
/// ```
pub fn parse_display_time(s: &str) -> ParseResult<ClockTime> {
    let caps = DISPLAY_TIME_RE
        .captures(s)
        .ok_or(ParseError::InvalidFormat)?;

    let hour12: u32 = caps[1].parse().map_err(|_| ParseError::InvalidFormat)?;
    let minute: u32 = caps[2].parse().map_err(|_| ParseError::InvalidFormat)?;

    if !(1..=12).contains(&hour12) || minute > 59 {
        return Err(ParseError::InvalidFormat);
    }

    let is_pm = caps[3].eq_ignore_ascii_case("PM");
    let hour = match (hour12, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    Ok(ClockTime::new(hour, minute))
}

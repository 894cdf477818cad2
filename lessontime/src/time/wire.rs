use crate::models::{CalendarDate, ClockTime};

/// Format a date in the backend's wire format, `yyyy-mm-dd`.
///
/// Trusts its input: the parser is the only validation boundary, so this
/// does no range checking. Pure zero-padded integer formatting; no
/// date-time object is constructed, so the host timezone cannot shift the
/// result.
///
/// # Example
/// ```
/// use lessontime::models::CalendarDate;
/// use lessontime::time::format_wire_date;
///
/// assert_eq!(format_wire_date(&CalendarDate::new(2026, 0, 1)), "2026-01-01");
/// ```
pub fn format_wire_date(d: &CalendarDate) -> String {
    format!("{:04}-{:02}-{:02}", d.year, d.month0 + 1, d.day)
}

/// Format a time in the backend's wire format, 24-hour `HH:MM`.
pub fn format_wire_time(t: &ClockTime) -> String {
    format!("{:02}:{:02}", t.hour, t.minute)
}

/// Format a date for display, zero-padded `mm/dd/yyyy`.
///
/// Inverse of `parse_display_date` (input accepts mixed padding, output is
/// always padded).
pub fn format_display_date(d: &CalendarDate) -> String {
    format!("{:02}/{:02}/{:04}", d.month0 + 1, d.day, d.year)
}

/// Format a time for display in 12-hour form, `hh:mm AM|PM`.
///
/// Inverse of `parse_display_time`: hour 0 displays as 12 AM, hour 12 as
/// 12 PM, hours 13-23 as (hour - 12) PM.
///
/// # Example
/// ```
/// use lessontime::models::ClockTime;
/// use lessontime::time::format_display_time_12h;
///
/// assert_eq!(format_display_time_12h(&ClockTime::new(0, 5)), "12:05 AM");
/// assert_eq!(format_display_time_12h(&ClockTime::new(23, 30)), "11:30 PM");
/// ```
pub fn format_display_time_12h(t: &ClockTime) -> String {
    let (hour12, meridiem) = match t.hour {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    format!("{:02}:{:02} {}", hour12, t.minute, meridiem)
}

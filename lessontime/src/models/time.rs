use serde::{Deserialize, Serialize};

/// A validated calendar date with a 0-based month.
///
/// `CalendarDate` is always constructed from components that have already
/// passed validation (the display parser is the only validation boundary);
/// it never holds an impossible day-of-month such as February 30th.
///
/// The month is 0-based (`0` = January, `11` = December) to match the form
/// widgets and the calendar grid, which both index months from zero. The
/// wire formatter adds 1 when serializing.
///
/// # Examples
///
/// ```
/// use lessontime::models::CalendarDate;
///
/// let d = CalendarDate::new(2026, 0, 5); // January 5th, 2026
/// assert_eq!(d.month0, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    /// 0-based month, `0..=11`.
    pub month0: u32,
    /// 1-based day of month.
    pub day: u32,
}

impl CalendarDate {
    /// Creates a date from already-validated components.
    pub fn new(year: i32, month0: u32, day: u32) -> Self {
        Self { year, month0, day }
    }
}

/// A time of day in 24-hour form.
///
/// Stored as `hour: 0..=23`, `minute: 0..=59` regardless of whether it was
/// entered as a 12-hour display string. Immutable once constructed.
///
/// # Examples
///
/// ```
/// use lessontime::models::ClockTime;
///
/// let t = ClockTime::new(23, 30);
/// assert_eq!(t.minutes_since_midnight(), 1410);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    /// Creates a time from already-validated components.
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Builds a time from a minutes-since-midnight count, wrapping past
    /// midnight back into `0..=23` hours.
    ///
    /// ```
    /// use lessontime::models::ClockTime;
    ///
    /// assert_eq!(ClockTime::from_minutes_since_midnight(25 * 60), ClockTime::new(1, 0));
    /// ```
    pub fn from_minutes_since_midnight(total: u32) -> Self {
        Self {
            hour: (total / 60) % 24,
            minute: total % 60,
        }
    }
}

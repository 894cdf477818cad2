use crate::models::{ClockTime, DurationHours};

/// Compute a lesson's end time from its start time and picked duration.
///
/// Works in minutes since midnight and wraps the hour mod 24, so a lesson
/// starting at 23:00 with a 2-hour duration ends at 01:00 under the same
/// nominal entry date; the date is never advanced. Callers that observe an
/// end time before the start time must treat it as same-day wraparound.
///
/// Total over its domain: `DurationHours` is already constrained to the
/// picker set, so there is nothing to validate here.
///
/// # Example
/// ```
/// use lessontime::models::{ClockTime, DurationHours};
/// use lessontime::time::add_duration;
///
/// let end = add_duration(&ClockTime::new(9, 45), DurationHours::HalfHour);
/// assert_eq!(end, ClockTime::new(10, 15));
/// ```
pub fn add_duration(start: &ClockTime, duration: DurationHours) -> ClockTime {
    ClockTime::from_minutes_since_midnight(start.minutes_since_midnight() + duration.minutes())
}

/// Recover the duration in hours between two same-day times.
///
/// Used when editing a stored lesson: the wire start/end pair comes back
/// from the backend and the form needs the original picker option
/// (`DurationHours::from_hours` on the result). No wraparound correction is
/// applied; end must not precede start, and a pair that violates that
/// yields a negative value which `from_hours` maps to `None`.
pub fn duration_between(start: &ClockTime, end: &ClockTime) -> f64 {
    let start_minutes = start.minutes_since_midnight() as f64;
    let end_minutes = end.minutes_since_midnight() as f64;
    (end_minutes - start_minutes) / 60.0
}

//! Lesson scheduling time engine.
//!
//! The pure core behind the lesson-creation form and the sessions calendar
//! screen: converting between human-entered date/time strings and the
//! backend's wire formats, computing lesson end times from a picked
//! duration, and building a timezone-safe month grid with sessions bucketed
//! per calendar day.
//!
//! Every function here is a synchronous, side-effect-free computation over
//! its arguments (the session-JSON file loader in [`parsing::sessions`] is
//! the one I/O entry point). The UI layer owns all mutable state and calls
//! in on demand:
//!
//! ```
//! use lessontime::models::DurationHours;
//! use lessontime::parsing::parse_display_time;
//! use lessontime::time::{add_duration, format_wire_time};
//!
//! let start = parse_display_time("09:00 AM").expect("validated by the form");
//! let end = add_duration(&start, DurationHours::NinetyMinutes);
//! assert_eq!(format_wire_time(&end), "10:30");
//! ```

pub mod calendar;
pub mod models;
pub mod parsing;
pub mod time;

pub use calendar::{date_key, DayBuckets, MonthGrid};
pub use models::{CalendarDate, ClockTime, DurationHours, SessionRecord};
pub use parsing::{parse_display_date, parse_display_time, ParseError};
pub use time::{add_duration, duration_between};

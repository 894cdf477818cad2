//! Parsers for the engine's input formats.
//!
//! This module is the validation boundary between raw form input / fetched
//! payloads and the typed values the rest of the engine operates on.
//!
//! # Parsers
//!
//! - [`display`]: Parse human-entered `mm/dd/yyyy` and `hh:mm AM/PM` strings
//! - [`sessions`]: Parse the data-fetch layer's session-list JSON
//!
//! # Example
//!
//! ```
//! use lessontime::parsing::parse_display_time;
//!
//! let start = parse_display_time("09:00 AM").expect("valid display time");
//! assert_eq!(start.hour, 9);
//! ```

pub mod display;
pub mod error;
pub mod sessions;


pub use display::{parse_display_date, parse_display_time};
pub use error::{ParseError, ParseResult};
pub use sessions::{parse_sessions_json, parse_sessions_json_str};

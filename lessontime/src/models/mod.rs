//! Domain value types for the lesson scheduling time engine.
//!
//! Everything in this module is a small, immutable value type: validated
//! calendar dates and clock times, the fixed lesson-duration picker set, and
//! the read-only session records handed over by the data-fetch layer.

pub mod duration;
pub mod session;
pub mod time;

pub use duration::*;
pub use session::*;
pub use time::*;

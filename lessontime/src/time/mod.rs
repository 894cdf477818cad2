pub mod duration;
pub mod wire;

pub use duration::{add_duration, duration_between};
pub use wire::{format_display_date, format_display_time_12h, format_wire_date, format_wire_time};

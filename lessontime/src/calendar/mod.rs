//! Month-calendar construction and per-day session bucketing.
//!
//! The sessions screen renders a 7-column month view: [`MonthGrid`] supplies
//! the padded day cells, [`DayBuckets`] groups the fetched sessions under a
//! timezone-stable date key, and the two are joined per cell through
//! [`date_key`]. Everything here is stateless and recomputed per render.

pub mod buckets;
pub mod grid;

#[cfg(test)]
mod buckets_tests;

pub use buckets::DayBuckets;
pub use grid::{date_key, days_in_month, next_month, prev_month, MonthGrid};

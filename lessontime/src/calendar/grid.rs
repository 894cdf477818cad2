use chrono::{Datelike, NaiveDate};

use crate::calendar::buckets::DayBuckets;
use crate::models::SessionRecord;

/// The single date-key constructor.
///
/// Every code path that turns a (year, month, day) triple into a bucket key
/// or a cell-comparison string must route through this function, so no two
/// call sites can drift apart on the format. The key is built by
/// zero-padding the integer components directly, never by formatting a
/// constructed date-time value, which is what keeps a host in any timezone
/// from shifting a day near midnight.
///
/// # Example
/// ```
/// use lessontime::calendar::date_key;
///
/// assert_eq!(date_key(2026, 0, 5), "2026-01-05");
/// ```
pub fn date_key(year: i32, month0: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month0 + 1, day)
}

/// Number of days in the given month (`month0` is 0-based).
///
/// Computed as the first of the following month stepped back one day, so
/// leap-year February falls out of the calendar itself rather than a table.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    debug_assert!(month0 < 12);
    let (next_year, next_month0) = if month0 == 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .and_then(|first| first.pred_opt())
        .map_or(0, |last| last.day())
}

/// The (year, month0) following the given month, carrying the year past
/// December. Drives the sessions screen's forward arrow.
pub fn next_month(year: i32, month0: u32) -> (i32, u32) {
    if month0 == 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    }
}

/// The (year, month0) preceding the given month, carrying the year past
/// January. Drives the sessions screen's back arrow.
pub fn prev_month(year: i32, month0: u32) -> (i32, u32) {
    if month0 == 0 {
        (year - 1, 11)
    } else {
        (year, month0 - 1)
    }
}

/// A month's worth of calendar cells, ready for a 7-column layout.
///
/// Cells run Sunday-first: `Some(day)` for each day of the month, with
/// `None` pads before the 1st (as many as the weekday index of the 1st,
/// 0 = Sunday) and after the last day out to a whole week. The grid
/// carries no session data; the UI joins cells to a [`DayBuckets`] through
/// [`date_key`] per cell.
///
/// Derived purely from year + month and rebuilt per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month0: u32,
    cells: Vec<Option<u32>>,
}

impl MonthGrid {
    /// Builds the grid for a month (`month0` is 0-based).
    ///
    /// # Example
    /// ```
    /// use lessontime::calendar::MonthGrid;
    ///
    /// // February 2024: leap year, 29 numbered cells.
    /// let grid = MonthGrid::build(2024, 1);
    /// assert_eq!(grid.cells().iter().filter(|c| c.is_some()).count(), 29);
    /// ```
    pub fn build(year: i32, month0: u32) -> Self {
        let Some(first) = NaiveDate::from_ymd_opt(year, month0 + 1, 1) else {
            debug_assert!(false, "month0 out of range: {}", month0);
            return Self {
                year,
                month0,
                cells: Vec::new(),
            };
        };

        let leading = first.weekday().num_days_from_sunday();
        let day_count = days_in_month(year, month0);

        let mut cells: Vec<Option<u32>> = Vec::with_capacity(42);
        cells.extend(std::iter::repeat(None).take(leading as usize));
        cells.extend((1..=day_count).map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        Self {
            year,
            month0,
            cells,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month.
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// All cells in render order; length is a multiple of 7.
    pub fn cells(&self) -> &[Option<u32>] {
        &self.cells
    }

    /// Cells grouped into Sunday-first weeks for row-by-row rendering.
    pub fn weeks(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.cells.chunks(7)
    }

    /// The bucket key for a day cell of this grid.
    pub fn date_key_for(&self, day: u32) -> String {
        date_key(self.year, self.month0, day)
    }

    /// Sessions bucketed under a cell of this grid.
    ///
    /// Pad cells (`None`) and days with no bucket both yield an empty
    /// slice, never an error.
    pub fn sessions_for_day<'a, 'b>(
        &self,
        buckets: &'b DayBuckets<'a>,
        day: Option<u32>,
    ) -> &'b [&'a SessionRecord] {
        match day {
            Some(day) => buckets.get(&self.date_key_for(day)),
            None => &[],
        }
    }
}

use serde::{Deserialize, Serialize};

/// The fixed set of lesson durations offered by the scheduling form.
///
/// The form renders these as a picker; a lesson duration is never an
/// arbitrary float. Half-hour granularity, 30 minutes to 2 hours.
///
/// # Examples
///
/// ```
/// use lessontime::models::DurationHours;
///
/// assert_eq!(DurationHours::NinetyMinutes.minutes(), 90);
/// assert_eq!(DurationHours::from_hours(1.5), Some(DurationHours::NinetyMinutes));
/// assert_eq!(DurationHours::from_hours(0.75), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationHours {
    HalfHour,
    OneHour,
    NinetyMinutes,
    TwoHours,
}

impl DurationHours {
    /// All options, in the order the duration picker lists them.
    pub const ALL: [DurationHours; 4] = [
        DurationHours::HalfHour,
        DurationHours::OneHour,
        DurationHours::NinetyMinutes,
        DurationHours::TwoHours,
    ];

    /// Duration in whole minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            DurationHours::HalfHour => 30,
            DurationHours::OneHour => 60,
            DurationHours::NinetyMinutes => 90,
            DurationHours::TwoHours => 120,
        }
    }

    /// Duration in (possibly fractional) hours.
    pub fn as_hours(&self) -> f64 {
        self.minutes() as f64 / 60.0
    }

    /// Maps an hour count back to a picker option.
    ///
    /// Returns `None` for any value outside the enumerated set, including
    /// the negative values produced by reading back a start/end pair where
    /// end precedes start. The edit form leaves the picker unselected in
    /// that case.
    pub fn from_hours(hours: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| (d.as_hours() - hours).abs() < 1e-9)
    }

    /// Human label shown in the duration picker.
    pub fn label(&self) -> &'static str {
        match self {
            DurationHours::HalfHour => "30 minutes",
            DurationHours::OneHour => "1 hour",
            DurationHours::NinetyMinutes => "1.5 hours",
            DurationHours::TwoHours => "2 hours",
        }
    }
}

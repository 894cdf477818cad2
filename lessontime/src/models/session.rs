use serde::{Deserialize, Serialize};

/// A lesson session as delivered by the data-fetch layer.
///
/// The engine treats session records as read-only input: it buckets them
/// into calendar days and hands them back for rendering, but never mutates
/// or persists them.
///
/// The `date` field is wire-format: either a bare `yyyy-mm-dd` or a full
/// `T`-separated timestamp (`2026-01-01T00:00:00.000000Z`), depending on
/// which backend endpoint produced the record. Bucketing takes only the
/// date portion, so both shapes land on the same calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub date: String,
    /// Wire-format start time, `HH:MM`.
    pub start_time: String,
    /// Wire-format end time, `HH:MM`.
    pub end_time: String,
    /// Rendering color for the calendar cell chip.
    #[serde(default)]
    pub color: Option<String>,
    /// Display names of the enrolled students.
    #[serde(default)]
    pub students: Vec<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

impl SessionRecord {
    /// The date portion of the wire date field.
    ///
    /// For a bare `yyyy-mm-dd` this is the whole field; for a full
    /// timestamp it is everything before the `T`. This is a plain substring
    /// take, never a parse-and-reformat, so the host timezone can never
    /// shift the resulting day.
    pub fn date_portion(&self) -> &str {
        match self.date.split_once('T') {
            Some((date, _)) => date,
            None => &self.date,
        }
    }
}

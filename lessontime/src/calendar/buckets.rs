use std::collections::HashMap;

use crate::models::SessionRecord;

/// Sessions grouped by calendar day, keyed by date-key string.
///
/// Rebuilt fresh from the current session list on every render pass; it is
/// never mutated incrementally and holds no identity beyond that pass. Key
/// lookup order is irrelevant, but within a day the input order of the
/// records is preserved so the cell renders stably.
#[derive(Debug, Default)]
pub struct DayBuckets<'a> {
    map: HashMap<String, Vec<&'a SessionRecord>>,
}

impl<'a> DayBuckets<'a> {
    /// Buckets a fetched session list by day.
    ///
    /// Each record's key is the date portion of its wire date field: a
    /// plain substring take (everything before a `T`, or the whole field
    /// for a bare date). No date value is parsed and reformatted, so a
    /// record stamped `2026-01-01T00:00:00.000000Z` lands under
    /// `2026-01-01` on every host regardless of local timezone offset.
    pub fn from_sessions(sessions: &'a [SessionRecord]) -> Self {
        let mut map: HashMap<String, Vec<&'a SessionRecord>> = HashMap::new();
        for session in sessions {
            let key = session.date_portion();
            if key.is_empty() {
                log::warn!("session with empty date field skipped during bucketing");
                continue;
            }
            map.entry(key.to_string()).or_default().push(session);
        }
        log::debug!("bucketed {} sessions into {} days", sessions.len(), map.len());
        Self { map }
    }

    /// Sessions under a date key, empty when the day has none.
    pub fn get(&self, key: &str) -> &[&'a SessionRecord] {
        self.map.get(key).map_or(&[], |v| v.as_slice())
    }

    /// Number of distinct days holding at least one session.
    pub fn day_count(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

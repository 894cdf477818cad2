#[cfg(test)]
mod tests {
    use crate::calendar::buckets::DayBuckets;
    use crate::calendar::grid::MonthGrid;
    use crate::models::SessionRecord;

    fn session(date: &str, start: &str, end: &str) -> SessionRecord {
        SessionRecord {
            id: None,
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            color: None,
            students: Vec::new(),
            subject: None,
        }
    }

    #[test]
    fn test_buckets_bare_wire_date() {
        let sessions = vec![
            session("2026-01-05", "09:00", "10:30"),
            session("2026-01-05", "14:00", "15:00"),
            session("2026-01-06", "09:00", "10:00"),
        ];

        let buckets = DayBuckets::from_sessions(&sessions);
        assert_eq!(buckets.day_count(), 2);
        assert_eq!(buckets.get("2026-01-05").len(), 2);
        assert_eq!(buckets.get("2026-01-06").len(), 1);
    }

    /// A full UTC timestamp buckets under its date portion on any host,
    /// regardless of local timezone offset
    #[test]
    fn test_buckets_full_timestamp_by_substring() {
        let sessions = vec![session("2026-01-01T00:00:00.000000Z", "00:00", "01:00")];

        let buckets = DayBuckets::from_sessions(&sessions);
        assert_eq!(buckets.get("2026-01-01").len(), 1);
        assert!(buckets.get("2025-12-31").is_empty());
    }

    /// Within a day, input order is preserved for stable rendering
    #[test]
    fn test_buckets_preserve_input_order() {
        let sessions = vec![
            session("2026-01-05", "14:00", "15:00"),
            session("2026-01-05", "09:00", "10:00"),
        ];

        let buckets = DayBuckets::from_sessions(&sessions);
        let day = buckets.get("2026-01-05");
        assert_eq!(day[0].start_time, "14:00");
        assert_eq!(day[1].start_time, "09:00");
    }

    #[test]
    fn test_buckets_empty_input() {
        let buckets = DayBuckets::from_sessions(&[]);
        assert!(buckets.is_empty());
        assert!(buckets.get("2026-01-05").is_empty());
    }

    #[test]
    fn test_sessions_for_day_joins_grid_to_buckets() {
        let sessions = vec![session("2026-01-05", "09:00", "10:30")];
        let buckets = DayBuckets::from_sessions(&sessions);
        let grid = MonthGrid::build(2026, 0);

        assert_eq!(grid.sessions_for_day(&buckets, Some(5)).len(), 1);
        assert!(grid.sessions_for_day(&buckets, Some(6)).is_empty());
        assert!(grid.sessions_for_day(&buckets, None).is_empty());
    }

    /// A grid for a different month never sees another month's sessions
    #[test]
    fn test_sessions_for_day_keyed_per_grid_month() {
        let sessions = vec![session("2026-01-05", "09:00", "10:30")];
        let buckets = DayBuckets::from_sessions(&sessions);
        let february = MonthGrid::build(2026, 1);

        assert!(february.sessions_for_day(&buckets, Some(5)).is_empty());
    }
}

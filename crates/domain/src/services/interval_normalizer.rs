//! Places raw records on the absolute timeline.

use chrono::{Days, NaiveTime, Timelike};

use crate::models::{NormalizedInterval, WorkInterval};

/// Normalizes one record.
///
/// Returns `None` when either time is missing or the resulting duration is
/// not strictly positive. An end time earlier than the start time is read as
/// a shift crossing midnight.
pub fn normalize(record: &WorkInterval) -> Option<NormalizedInterval> {
    let start_time = truncate_to_minute(record.start_time?);
    let end_time = truncate_to_minute(record.end_time?);

    let start = record.work_date.and_time(start_time);
    let mut end = record.work_date.and_time(end_time);
    if end_time < start_time {
        end = end.checked_add_days(Days::new(1))?;
    }

    let duration_minutes = (end - start).num_minutes();
    if duration_minutes <= 0 {
        return None;
    }

    Some(NormalizedInterval {
        start,
        end,
        duration_minutes,
    })
}

/// Normalizes every record, dropping the ones without a valid interval.
pub fn normalize_all(records: &[WorkInterval]) -> Vec<NormalizedInterval> {
    records.iter().filter_map(normalize).collect()
}

/// Duration of a record in whole minutes, if it normalizes.
pub fn duration_minutes(record: &WorkInterval) -> Option<i64> {
    normalize(record).map(|n| n.duration_minutes)
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn record(start: Option<(u32, u32)>, end: Option<(u32, u32)>) -> WorkInterval {
        WorkInterval::new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            start.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
            end.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
        )
    }

    #[test]
    fn test_same_day_interval() {
        let normalized = normalize(&record(Some((9, 0)), Some((10, 30)))).unwrap();
        assert_eq!(normalized.duration_minutes, 90);
        assert_eq!(normalized.start.to_string(), "2026-03-10 09:00:00");
        assert_eq!(normalized.end.to_string(), "2026-03-10 10:30:00");
    }

    #[test]
    fn test_overnight_interval_rolls_into_next_day() {
        let normalized = normalize(&record(Some((23, 0)), Some((1, 0)))).unwrap();
        assert_eq!(normalized.duration_minutes, 120);
        assert_eq!(normalized.start.to_string(), "2026-03-10 23:00:00");
        assert_eq!(normalized.end.to_string(), "2026-03-11 01:00:00");
    }

    #[test]
    fn test_zero_length_interval_is_dropped() {
        assert!(normalize(&record(Some((9, 0)), Some((9, 0)))).is_none());
    }

    #[test]
    fn test_missing_time_is_dropped() {
        assert!(normalize(&record(None, Some((9, 0)))).is_none());
        assert!(normalize(&record(Some((9, 0)), None)).is_none());
        assert!(normalize(&record(None, None)).is_none());
    }

    #[test]
    fn test_seconds_are_truncated() {
        let mut raw = record(None, None);
        raw.start_time = NaiveTime::from_hms_opt(9, 0, 59);
        raw.end_time = NaiveTime::from_hms_opt(9, 1, 10);
        let normalized = normalize(&raw).unwrap();
        assert_eq!(normalized.duration_minutes, 1);
        assert_eq!(normalized.start.to_string(), "2026-03-10 09:00:00");

        raw.end_time = NaiveTime::from_hms_opt(9, 0, 30);
        assert!(normalize(&raw).is_none());
    }

    #[test]
    fn test_normalize_all_skips_invalid_records() {
        let records = vec![
            record(Some((9, 0)), Some((10, 0))),
            record(None, None),
            record(Some((11, 0)), Some((11, 0))),
        ];
        assert_eq!(normalize_all(&records).len(), 1);
        assert_eq!(duration_minutes(&records[0]), Some(60));
        assert_eq!(duration_minutes(&records[1]), None);
    }
}

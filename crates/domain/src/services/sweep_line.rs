//! Sweep-line coverage aggregation.
//!
//! Intervals are sorted by `(start, end)` with a stable sort, so equal keys
//! keep their input order. Each interval after the first either extends the
//! running merged window (its minutes already inside the window count as
//! overlap) or closes the window and opens a gap. Overlap is always measured
//! against the running window, which keeps N-way overlap from being
//! subtracted twice.

use chrono::NaiveDateTime;

use super::interval_normalizer::normalize_all;
use crate::models::{AggregateResult, Gap, MergedInterval, NormalizedInterval, WorkInterval};

/// Aggregates already-normalized intervals.
///
/// `parts_count` is the number of intervals given.
pub fn aggregate_intervals(intervals: &[NormalizedInterval]) -> AggregateResult {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|interval| (interval.start, interval.end));

    let Some((first, rest)) = sorted.split_first() else {
        return AggregateResult::default();
    };

    let recorded_minutes: i64 = sorted.iter().map(|i| i.duration_minutes).sum();

    let mut merged_intervals = Vec::new();
    let mut gaps = Vec::new();
    let mut overlap_minutes = 0;
    let mut window_start = first.start;
    let mut window_end = first.end;

    for interval in rest {
        if interval.start <= window_end {
            overlap_minutes += minutes_between(interval.start, interval.end.min(window_end)).max(0);
            window_end = window_end.max(interval.end);
        } else {
            merged_intervals.push(MergedInterval {
                start: window_start,
                end: window_end,
                duration_minutes: minutes_between(window_start, window_end),
            });
            gaps.push(Gap {
                start: window_end,
                end: interval.start,
                duration_minutes: minutes_between(window_end, interval.start),
            });
            window_start = interval.start;
            window_end = interval.end;
        }
    }

    merged_intervals.push(MergedInterval {
        start: window_start,
        end: window_end,
        duration_minutes: minutes_between(window_start, window_end),
    });

    let covered_minutes = merged_intervals.iter().map(|m| m.duration_minutes).sum();

    AggregateResult {
        parts_count: sorted.len(),
        recorded_minutes,
        covered_minutes,
        overlap_minutes,
        merged_intervals,
        gaps,
        first_start: Some(first.start),
        last_end: Some(window_end),
    }
}

/// Normalizes and aggregates raw records.
///
/// `parts_count` counts every record, including those without times.
pub fn summarize_records(records: &[WorkInterval]) -> AggregateResult {
    let mut result = aggregate_intervals(&normalize_all(records));
    result.parts_count = records.len();
    result
}

fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

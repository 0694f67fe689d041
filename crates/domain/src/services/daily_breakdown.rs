//! Per-day coverage summaries for multi-day scopes.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::sweep_line::summarize_records;
use crate::models::{DailySummary, DateRange, WorkInterval};

/// One summary per date in `range`, ascending, zero-record days included.
///
/// Records are grouped by their raw `work_date`, so a shift crossing midnight
/// counts wholly toward the day it started on. Works on the already fetched
/// set; nothing is re-queried.
pub fn daily_breakdown(records: &[WorkInterval], range: &DateRange) -> Vec<DailySummary> {
    let mut by_date: BTreeMap<NaiveDate, Vec<WorkInterval>> = BTreeMap::new();
    for record in records.iter().filter(|r| range.contains(r.work_date)) {
        by_date
            .entry(record.work_date)
            .or_default()
            .push(record.clone());
    }

    range
        .iter_days()
        .map(|date| {
            let day_records = by_date.get(&date).map(Vec::as_slice).unwrap_or(&[]);
            DailySummary::from_aggregate(date, &summarize_records(day_records))
        })
        .collect()
}

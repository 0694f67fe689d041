//! Work interval domain models.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// A raw work-time record as supplied by the storage collaborator.
///
/// Only `work_date`, `start_time` and `end_time` take part in coverage
/// computation; the rest is carried through for the flat listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkInterval {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub actor_name: Option<String>,
    pub work_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub client_id: Option<Uuid>,
    pub client_name: Option<String>,
    pub group_id: Option<Uuid>,
    pub group_name: Option<String>,
    pub type_id: Option<Uuid>,
    pub type_name: Option<String>,
    pub ticket_id: Option<String>,
    pub action: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WorkInterval {
    /// Minimal record with only the fields the coverage engine reads.
    pub fn new(
        actor_id: Uuid,
        work_date: NaiveDate,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            actor_id,
            actor_name: None,
            work_date,
            start_time,
            end_time,
            client_id: None,
            client_name: None,
            group_id: None,
            group_name: None,
            type_id: None,
            type_name: None,
            ticket_id: None,
            action: None,
            status: None,
            tags: Vec::new(),
        }
    }
}

/// An interval placed on the absolute (naive) timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
}

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Number of calendar days in the range, both ends included.
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// Every date from `from` to `to`, ascending.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d <= to)
    }
}

/// Filter handed to the storage collaborator. `None` fields do not restrict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkIntervalFilter {
    pub date_range: Option<DateRange>,
    pub actor_ids: Option<BTreeSet<Uuid>>,
    pub client_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub type_id: Option<Uuid>,
    /// Case-insensitive substring over action, ticket id and tags.
    pub search: Option<String>,
}

impl WorkIntervalFilter {
    /// Whether a record satisfies every set criterion.
    pub fn matches(&self, record: &WorkInterval) -> bool {
        if let Some(range) = &self.date_range {
            if !range.contains(record.work_date) {
                return false;
            }
        }
        if let Some(ids) = &self.actor_ids {
            if !ids.contains(&record.actor_id) {
                return false;
            }
        }
        if self.client_id.is_some() && record.client_id != self.client_id {
            return false;
        }
        if self.group_id.is_some() && record.group_id != self.group_id {
            return false;
        }
        if self.type_id.is_some() && record.type_id != self.type_id {
            return false;
        }
        if let Some(needle) = self.search.as_deref().map(str::to_lowercase) {
            let hit = record
                .action
                .iter()
                .chain(record.ticket_id.iter())
                .chain(record.tags.iter())
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Flat projection of one record in the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkIntervalListItem {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub actor_name: Option<String>,
    pub work_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// `None` when a time is missing or the interval is zero-length.
    pub duration_minutes: Option<i64>,
    pub client_id: Option<Uuid>,
    pub client_name: Option<String>,
    pub group_id: Option<Uuid>,
    pub group_name: Option<String>,
    pub type_id: Option<Uuid>,
    pub type_name: Option<String>,
    pub ticket_id: Option<String>,
    pub action: Option<String>,
    pub status: Option<String>,
    pub tags: Vec<String>,
}

/// Response for the flat listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkIntervalListResponse {
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<WorkIntervalListItem>,
}

//! Sorting, projection and pagination of the flat work-interval listing.

use std::cmp::Ordering;

use shared::pagination::PageRequest;

use super::interval_normalizer::duration_minutes;
use crate::models::{
    SortDirection, SortField, SortKey, WorkInterval, WorkIntervalListItem,
    WorkIntervalListResponse,
};

/// Order used when no recognized sort key is given.
pub const DEFAULT_SORT: [SortKey; 2] = [
    SortKey::new(SortField::WorkDate, SortDirection::Desc),
    SortKey::new(SortField::StartTime, SortDirection::Asc),
];

/// Parses a `field[:direction],...` specification.
///
/// Unknown fields are skipped. An absent or fully unrecognized spec yields
/// [`DEFAULT_SORT`].
pub fn parse_sort_spec(spec: Option<&str>) -> Vec<SortKey> {
    let keys: Vec<SortKey> = spec
        .unwrap_or_default()
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.splitn(2, ':');
            let field = SortField::parse(pieces.next()?)?;
            Some(SortKey::new(field, SortDirection::parse(pieces.next())))
        })
        .collect();

    if keys.is_empty() {
        DEFAULT_SORT.to_vec()
    } else {
        keys
    }
}

/// Flat projection of a record, with its normalized duration.
pub fn project(record: WorkInterval) -> WorkIntervalListItem {
    let duration_minutes = duration_minutes(&record);
    WorkIntervalListItem {
        id: record.id,
        actor_id: record.actor_id,
        actor_name: record.actor_name,
        work_date: record.work_date,
        start_time: record.start_time,
        end_time: record.end_time,
        duration_minutes,
        client_id: record.client_id,
        client_name: record.client_name,
        group_id: record.group_id,
        group_name: record.group_name,
        type_id: record.type_id,
        type_name: record.type_name,
        ticket_id: record.ticket_id,
        action: record.action,
        status: record.status,
        tags: record.tags,
    }
}

/// Stable multi-key sort: the first key is primary, later keys break ties.
pub fn sort_items(items: &mut [WorkIntervalListItem], keys: &[SortKey]) {
    items.sort_by(|a, b| {
        keys.iter()
            .map(|key| {
                let ordering = compare_field(key.field, a, b);
                match key.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

fn compare_field(field: SortField, a: &WorkIntervalListItem, b: &WorkIntervalListItem) -> Ordering {
    match field {
        SortField::WorkDate => a.work_date.cmp(&b.work_date),
        SortField::StartTime => a.start_time.cmp(&b.start_time),
        SortField::EndTime => a.end_time.cmp(&b.end_time),
        SortField::Duration => a.duration_minutes.cmp(&b.duration_minutes),
        SortField::ActorName => compare_names(a.actor_name.as_deref(), b.actor_name.as_deref()),
        SortField::ClientName => {
            compare_names(a.client_name.as_deref(), b.client_name.as_deref())
        }
    }
}

fn compare_names(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.map(str::to_lowercase).cmp(&b.map(str::to_lowercase))
}

/// Projects, sorts and pages a fetched record set.
pub fn build_listing(
    records: Vec<WorkInterval>,
    keys: &[SortKey],
    page: PageRequest,
) -> WorkIntervalListResponse {
    let mut items: Vec<WorkIntervalListItem> = records.into_iter().map(project).collect();
    sort_items(&mut items, keys);

    WorkIntervalListResponse {
        total: items.len(),
        page: page.page,
        page_size: page.page_size,
        items: page.slice(&items).to_vec(),
    }
}

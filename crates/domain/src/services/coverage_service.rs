//! Request-level orchestration of the coverage engine.
//!
//! Both operations resolve scope and actors first, issue exactly one fetch
//! against the [`WorkIntervalSource`], then run the synchronous pipeline on
//! the fetched set.

use chrono::Utc;
use shared::pagination::{PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use tracing::{debug, info, warn};

use super::actor_resolver::resolve_actors;
use super::daily_breakdown::daily_breakdown;
use super::listing_sort::{build_listing, parse_sort_spec};
use super::scope_resolver::{resolve_optional_scope, resolve_scope};
use super::sweep_line::summarize_records;
use super::work_interval_source::WorkIntervalSource;
use crate::errors::CoverageError;
use crate::models::{
    Caller, CoverageQuery, CoverageReport, FiltersApplied, WorkIntervalFilter,
    WorkIntervalListQuery, WorkIntervalListResponse,
};

/// Request bounds applied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// Longest explicit range accepted, in days; `None` accepts any length.
    pub max_range_days: Option<i64>,
    pub max_page_size: u32,
    pub default_page_size: u32,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_range_days: None,
            max_page_size: MAX_PAGE_SIZE,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Computes the coverage report for one aggregate query.
///
/// An open actor selection is narrowed to the caller.
pub async fn build_coverage_report(
    source: &dyn WorkIntervalSource,
    caller: &Caller,
    query: &CoverageQuery,
    limits: &QueryLimits,
) -> Result<CoverageReport, CoverageError> {
    let scope = resolve_scope(&query.scope_params(), limits.max_range_days)?;
    let actor_ids = resolve_actors(caller, query.agent_id.as_deref(), query.agent_ids.as_deref())?
        .or_caller(caller.actor_id);

    let filter = WorkIntervalFilter {
        date_range: Some(scope.range),
        actor_ids: Some(actor_ids.clone()),
        client_id: query.client_id,
        group_id: query.group_id,
        type_id: query.type_id,
        search: None,
    };

    let records = source.fetch(&filter).await.map_err(|e| {
        warn!(error = %e, caller = %caller.actor_id, "Work interval fetch failed");
        CoverageError::from(e)
    })?;

    let aggregate = summarize_records(&records);
    let by_day = scope
        .wants_daily_breakdown()
        .then(|| daily_breakdown(&records, &scope.range));

    info!(
        caller = %caller.actor_id,
        role = %caller.role,
        scope = scope.kind.as_str(),
        from = %scope.range.from,
        to = %scope.range.to,
        actors = actor_ids.len(),
        records = records.len(),
        covered_minutes = aggregate.covered_minutes,
        overlap_minutes = aggregate.overlap_minutes,
        "Coverage report computed"
    );

    Ok(CoverageReport {
        generated_at: Utc::now(),
        filters_applied: FiltersApplied {
            scope: scope.kind,
            from: scope.range.from,
            to: scope.range.to,
            agent_ids: actor_ids.into_iter().collect(),
            client_id: query.client_id,
            group_id: query.group_id,
            type_id: query.type_id,
        },
        aggregate,
        by_day,
    })
}

/// Returns one page of the flat listing.
///
/// Editors and admins without targets see every actor.
pub async fn list_work_intervals(
    source: &dyn WorkIntervalSource,
    caller: &Caller,
    query: &WorkIntervalListQuery,
    limits: &QueryLimits,
) -> Result<WorkIntervalListResponse, CoverageError> {
    let scope = resolve_optional_scope(&query.scope_params(), limits.max_range_days)?;
    let selection = resolve_actors(caller, query.agent_id.as_deref(), query.agent_ids.as_deref())?;

    let filter = WorkIntervalFilter {
        date_range: scope.map(|s| s.range),
        actor_ids: selection.as_filter(),
        client_id: query.client_id,
        group_id: query.group_id,
        type_id: query.type_id,
        search: query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string),
    };

    let records = source.fetch(&filter).await.map_err(|e| {
        warn!(error = %e, caller = %caller.actor_id, "Work interval fetch failed");
        CoverageError::from(e)
    })?;

    let page = PageRequest::new(
        query.page,
        query.page_size.or(Some(limits.default_page_size)),
        limits.max_page_size,
    );
    let keys = parse_sort_spec(query.sort.as_deref());

    debug!(
        caller = %caller.actor_id,
        records = records.len(),
        page = page.page,
        page_size = page.page_size,
        "Listing work intervals"
    );

    Ok(build_listing(records, &keys, page))
}
